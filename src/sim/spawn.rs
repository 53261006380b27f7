//! Time-gated zombie spawning
//!
//! One spawn attempt per interval of wall-clock time. Missed attempts (pool
//! full) are lost rather than queued.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::Pool;
use super::state::{Level, SimEvent};
use super::survivor::Survivor;
use super::zombie::Zombie;
use crate::tuning::Tuning;

/// Decides when a spawn attempt is due
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnDirector {
    pub interval_ms: u64,
    /// Clock reading of the last attempt; `None` until the first one
    pub last_spawn_ms: Option<u64>,
}

impl SpawnDirector {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_spawn_ms: None,
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms > last.saturating_add(self.interval_ms),
        }
    }

    /// Consume a due attempt. The timestamp advances whether or not the
    /// caller finds a free slot.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.last_spawn_ms = Some(now_ms);
        true
    }
}

/// Activate the first free zombie slot somewhere over the platform, heading
/// toward the survivor. Returns the slot, or `None` when the pool is full.
pub fn spawn_zombie<R: Rng>(
    zombies: &mut Pool<Zombie>,
    survivor: &Survivor,
    level: &Level,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) -> Option<usize> {
    let Some((slot, zombie)) = zombies.allocate() else {
        events.push(SimEvent::SpawnSkipped);
        log::debug!("Spawn due but every zombie slot is taken");
        return None;
    };

    let platform = &level.platform;
    let min_x = platform.left();
    let max_x = platform.right() - zombie.body.size.x;
    let x = if max_x > min_x {
        rng.random_range(min_x..max_x)
    } else {
        min_x
    };

    let zombie_center = x + zombie.body.size.x / 2.0;
    let direction = if survivor.body.center_x() < zombie_center {
        -1.0
    } else {
        1.0
    };

    zombie.spawn(Vec2::new(x, tuning.zombie_spawn_y), direction);
    events.push(SimEvent::ZombieSpawned { slot });
    log::debug!("Zombie {slot} spawned at x={x:.1}, heading {direction}");
    Some(slot)
}
