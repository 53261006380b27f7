//! Simulation state
//!
//! `SimulationState` is the single owner of every entity. Sub-steps borrow
//! its fields disjointly; nothing lives in module-level globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::pool::Pool;
use super::rect::Rect;
use super::spawn::SpawnDirector;
use super::survivor::Survivor;
use super::zombie::Zombie;
use crate::consts::*;
use crate::tuning::Tuning;

/// Static stage geometry, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Visible area (width, height)
    pub screen: Vec2,
    pub platform: Rect,
    /// Survivor's top-left corner at session start
    pub survivor_start: Vec2,
}

impl Default for Level {
    fn default() -> Self {
        Self::with_platform(
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            PLATFORM_SIZE,
            PLATFORM_Y,
        )
    }
}

impl Level {
    /// Stage with the platform centred horizontally at height `platform_y`
    pub fn with_platform(screen: Vec2, platform_size: Vec2, platform_y: f32) -> Self {
        let platform_x = screen.x / 2.0 - platform_size.x / 2.0;
        Self {
            screen,
            platform: Rect::from_pos_size(Vec2::new(platform_x, platform_y), platform_size),
            survivor_start: SURVIVOR_START,
        }
    }
}

/// Sprite cell sizes, used for bounding boxes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub survivor: Vec2,
    pub zombie: Vec2,
    pub bullet: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            survivor: SURVIVOR_SIZE,
            zombie: ZOMBIE_SIZE,
            bullet: BULLET_SIZE,
        }
    }
}

/// How a zombie was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    Bullet,
    Melee,
}

/// Something noteworthy that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    ZombieSpawned { slot: usize },
    /// A spawn was due but every zombie slot was taken
    SpawnSkipped,
    BulletFired { slot: usize },
    ZombieHit { slot: usize, source: HitSource },
    ZombieReaped { slot: usize },
    /// A zombie attack landed; the death animation starts
    SurvivorKilled { by: usize },
    /// The death animation finished; the survivor is now inert
    SurvivorDied,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub level: Level,
    pub tuning: Tuning,
    pub survivor: Survivor,
    pub zombies: Pool<Zombie>,
    pub bullets: Pool<Bullet>,
    pub spawner: SpawnDirector,
    /// Completed ticks
    pub frame: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<SimEvent>,
}

impl SimulationState {
    pub fn new(level: Level, sprites: SpriteSizes, tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.validated();
        let survivor = Survivor::new(
            level.survivor_start,
            sprites.survivor,
            tuning.survivor_anim_speed,
        );
        let zombies = Pool::new(tuning.zombie_capacity, || {
            Zombie::new(sprites.zombie, tuning.zombie_anim_speed)
        });
        let bullets = Pool::new(tuning.bullet_capacity, || Bullet::new(sprites.bullet));
        let spawner = SpawnDirector::new(tuning.spawn_interval_ms);

        log::info!(
            "Simulation created: {} zombie slots, {} bullet slots, seed {}",
            zombies.capacity(),
            bullets.capacity(),
            seed
        );

        Self {
            level,
            tuning,
            survivor,
            zombies,
            bullets,
            spawner,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Default stage, sprites and tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            Level::default(),
            SpriteSizes::default(),
            Tuning::default(),
            seed,
        )
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }
}
