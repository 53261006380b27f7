//! The player-controlled survivor and its behaviour state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::body::Body;
use super::state::{Level, SimEvent};
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Frame-group on which shots and stabs take effect
pub const ACTION_GROUP: u32 = 2;

/// Survivor behaviour states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurvivorState {
    Idle,
    Walk,
    Jump,
    Shoot,
    Stab,
    Fall,
    /// Death animation; the survivor goes inert once it has played once
    Dead,
}

impl SurvivorState {
    /// Sprite sheet row for this state
    pub fn sprite_row(self) -> u32 {
        match self {
            SurvivorState::Idle => 0,
            SurvivorState::Walk => 1,
            SurvivorState::Jump | SurvivorState::Fall => 2,
            SurvivorState::Shoot => 3,
            SurvivorState::Stab => 4,
            SurvivorState::Dead => 5,
        }
    }

    /// States that ignore input until they finish or the platform check ends them
    pub fn is_locked(self) -> bool {
        matches!(
            self,
            SurvivorState::Shoot | SurvivorState::Stab | SurvivorState::Fall
        )
    }
}

/// Effect the survivor wants applied to the rest of the world this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurvivorAction {
    FireBullet,
    MeleeStrike,
}

/// The survivor (one per session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survivor {
    pub body: Body,
    /// +1 facing right, -1 facing left
    pub facing: f32,
    pub anim: Animation,
    /// Latch: a bullet has left the gun during this shoot cycle
    pub shot_fired: bool,
    /// Latch: the melee hit-test has run during this stab cycle
    pub stab_landed: bool,
    pub state: SurvivorState,
    pub alive: bool,
}

impl Survivor {
    pub fn new(pos: Vec2, size: Vec2, anim_speed: u32) -> Self {
        Self {
            body: Body::new(pos, size),
            facing: 1.0,
            anim: Animation::new(anim_speed),
            shot_fired: false,
            stab_landed: false,
            state: SurvivorState::Fall,
            alive: true,
        }
    }

    /// Whether zombies can still engage the survivor
    pub fn is_targetable(&self) -> bool {
        self.alive && self.state != SurvivorState::Dead
    }

    fn set_state(&mut self, next: SurvivorState) {
        if self.state != next {
            self.state = next;
            self.anim.reset();
        }
    }

    /// Begin a shoot or stab: fresh cycle, latch cleared, feet planted
    fn begin_attack(&mut self, attack: SurvivorState) {
        self.state = attack;
        self.anim.reset();
        self.shot_fired = false;
        self.stab_landed = false;
        self.body.vel.x = 0.0;
    }

    fn move_horizontal(&mut self, direction: f32, speed: f32) {
        self.facing = direction;
        self.body.vel.x = direction * speed;
    }

    /// A zombie attack connected. Ignored once already dead.
    pub fn kill(&mut self) {
        if !self.is_targetable() {
            return;
        }
        self.state = SurvivorState::Dead;
        self.body.vel = Vec2::ZERO;
        self.anim.reset();
    }

    /// Advance one frame. Returns the world effect to apply, if any.
    pub fn update(
        &mut self,
        input: &TickInput,
        level: &Level,
        tuning: &Tuning,
        events: &mut Vec<SimEvent>,
    ) -> Option<SurvivorAction> {
        if !self.alive {
            return None;
        }

        if self.state == SurvivorState::Dead {
            if self.anim.completed {
                self.alive = false;
                events.push(SimEvent::SurvivorDied);
                log::info!("Survivor died");
            } else {
                self.anim.advance();
            }
            return None;
        }

        self.body.integrate(tuning.gravity);

        if self
            .body
            .settle_on(&level.platform, tuning.platform_edge_margin)
        {
            if matches!(self.state, SurvivorState::Fall | SurvivorState::Jump) {
                self.set_state(SurvivorState::Idle);
            }
        } else if self.state != SurvivorState::Jump {
            self.set_state(SurvivorState::Fall);
        }

        if !self.state.is_locked() {
            self.handle_input(input, tuning);
        }

        let mut action = None;
        match self.state {
            SurvivorState::Shoot => {
                if self.anim.completed {
                    self.set_state(SurvivorState::Idle);
                } else if self.anim.group() == ACTION_GROUP && !self.shot_fired {
                    self.shot_fired = true;
                    action = Some(SurvivorAction::FireBullet);
                }
            }
            SurvivorState::Stab => {
                if self.anim.completed {
                    self.set_state(SurvivorState::Idle);
                } else if self.anim.group() == ACTION_GROUP && !self.stab_landed {
                    self.stab_landed = true;
                    action = Some(SurvivorAction::MeleeStrike);
                }
            }
            _ => {}
        }

        self.anim.advance();
        action
    }

    fn handle_input(&mut self, input: &TickInput, tuning: &Tuning) {
        let speed = tuning.survivor_speed;

        // Airborne: steering only
        if self.state == SurvivorState::Jump {
            if input.move_right {
                self.move_horizontal(1.0, speed);
            } else if input.move_left {
                self.move_horizontal(-1.0, speed);
            } else {
                self.body.vel.x = 0.0;
            }
            return;
        }

        if input.jump {
            self.set_state(SurvivorState::Jump);
            self.body.vel.y = -tuning.survivor_jump_velocity;
        } else if input.shoot {
            self.begin_attack(SurvivorState::Shoot);
        } else if input.stab {
            self.begin_attack(SurvivorState::Stab);
        } else if input.move_right {
            self.set_state(SurvivorState::Walk);
            self.move_horizontal(1.0, speed);
        } else if input.move_left {
            self.set_state(SurvivorState::Walk);
            self.move_horizontal(-1.0, speed);
        } else {
            self.set_state(SurvivorState::Idle);
            self.body.vel.x = 0.0;
        }
    }
}
