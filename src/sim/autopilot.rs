//! Demo mode: the survivor plays itself
//!
//! Produces the same `TickInput` a player would, so the simulation cannot
//! tell the difference.

use super::state::SimulationState;
use super::tick::TickInput;

/// Choose this frame's input for an unattended survivor
pub fn autopilot(state: &SimulationState) -> TickInput {
    let survivor = &state.survivor;
    if !survivor.is_targetable() {
        return TickInput::default();
    }

    let sx = survivor.body.center_x();
    let height = survivor.body.size.y;

    // Nearest zombie that is roughly level with us and still in play
    let target = state
        .zombies
        .iter_alive()
        .filter(|(_, z)| z.is_hittable() && (z.body.pos.y - survivor.body.pos.y).abs() < height)
        .min_by(|(_, a), (_, b)| {
            let da = (a.body.center_x() - sx).abs();
            let db = (b.body.center_x() - sx).abs();
            da.total_cmp(&db)
        });

    let Some((_, zombie)) = target else {
        // Nothing to fight: wander back toward the middle of the platform
        let dx = state.level.platform.center().x - sx;
        if dx.abs() <= survivor.body.size.x / 2.0 {
            return TickInput::default();
        }
        return TickInput {
            move_right: dx > 0.0,
            move_left: dx < 0.0,
            ..Default::default()
        };
    };

    let dx = zombie.body.center_x() - sx;
    let toward = if dx > 0.0 {
        1.0
    } else if dx < 0.0 {
        -1.0
    } else {
        survivor.facing
    };

    if toward != survivor.facing {
        return TickInput {
            move_right: toward > 0.0,
            move_left: toward < 0.0,
            ..Default::default()
        };
    }

    let stab_range =
        survivor.body.size.x / 2.0 + state.tuning.melee_reach + zombie.body.size.x / 2.0;
    if dx.abs() < stab_range {
        TickInput {
            stab: true,
            ..Default::default()
        }
    } else {
        TickInput {
            shoot: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::survivor::SurvivorState;
    use crate::sim::zombie::ZombieState;

    fn standing_state() -> SimulationState {
        let mut state = SimulationState::with_seed(5);
        let top = state.level.platform.top();
        state.survivor.body.pos = Vec2::new(200.0, top - 64.0);
        state.survivor.state = SurvivorState::Idle;
        state
    }

    fn add_zombie(state: &mut SimulationState, x: f32) {
        let y = state.survivor.body.pos.y;
        let (_, z) = state.zombies.allocate().unwrap();
        z.spawn(Vec2::new(x, y), -1.0);
        z.state = ZombieState::Walk;
    }

    #[test]
    fn test_shoots_distant_zombie_ahead() {
        let mut state = standing_state();
        add_zombie(&mut state, 380.0);
        assert!(autopilot(&state).shoot);
    }

    #[test]
    fn test_turns_toward_zombie_behind() {
        let mut state = standing_state();
        add_zombie(&mut state, 100.0);
        let input = autopilot(&state);
        assert!(input.move_left);
        assert!(!input.shoot);
    }

    #[test]
    fn test_stabs_close_zombie() {
        let mut state = standing_state();
        add_zombie(&mut state, 250.0);
        assert!(autopilot(&state).stab);
    }

    #[test]
    fn test_ignores_knocked_back_zombies() {
        let mut state = standing_state();
        add_zombie(&mut state, 250.0);
        state
            .zombies
            .get_mut(0)
            .unwrap()
            .take_hit(Vec2::new(4.0, 0.0));
        // Centre of the platform is 256, survivor centre 232: close enough
        assert_eq!(autopilot(&state), TickInput::default());
    }

    #[test]
    fn test_dead_survivor_does_nothing() {
        let mut state = standing_state();
        add_zombie(&mut state, 380.0);
        state.survivor.kill();
        assert_eq!(autopilot(&state), TickInput::default());
    }
}
