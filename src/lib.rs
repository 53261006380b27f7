//! Zombies - a side-view survivor vs. zombie-wave arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, state machines, pools, spawning)
//! - `snapshot`: Read-only per-frame export for a renderer
//! - `platform`: Host clock abstraction
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use snapshot::{FrameSnapshot, capture};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Host frame period for fixed-step drivers (~60 Hz)
    pub const FRAME_MS: u64 = 16;

    /// Visible area
    pub const SCREEN_WIDTH: f32 = 512.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Platform sprite size and surface height
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(320.0, 32.0);
    pub const PLATFORM_Y: f32 = 300.0;

    /// Sprite cell sizes
    pub const SURVIVOR_SIZE: Vec2 = Vec2::new(64.0, 64.0);
    pub const ZOMBIE_SIZE: Vec2 = Vec2::new(64.0, 64.0);
    pub const BULLET_SIZE: Vec2 = Vec2::new(16.0, 6.0);

    /// Survivor drops in from here at session start
    pub const SURVIVOR_START: Vec2 = Vec2::new(200.0, 100.0);
}
