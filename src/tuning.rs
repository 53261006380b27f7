//! Data-driven game balance
//!
//! Every hand-tuned number the simulation uses lives here. Values are in
//! per-frame units (pixels per frame, pixels per frame², frames per
//! animation group) except the spawn interval, which is wall-clock time.
//!
//! A JSON file only needs to name the keys it overrides:
//!
//! ```json
//! { "gravity": 0.6, "spawn_interval_ms": 2000 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read or parse a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Balance table for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (px/frame²)
    pub gravity: f32,
    /// Inset applied to each side of a body before the platform span check
    pub platform_edge_margin: f32,

    // === Survivor ===
    /// Walk speed (px/frame)
    pub survivor_speed: f32,
    /// Upward launch speed when jumping (px/frame)
    pub survivor_jump_velocity: f32,
    /// Frames per animation group
    pub survivor_anim_speed: u32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Muzzle x offset from the survivor's left edge when facing right
    pub bullet_muzzle_right: f32,
    /// Muzzle x offset from the survivor's left edge when facing left
    pub bullet_muzzle_left: f32,
    /// Muzzle y offset from the survivor's top edge
    pub bullet_muzzle_height: f32,
    /// Horizontal speed given to a zombie hit by a bullet
    pub bullet_knockback: f32,
    /// Maximum bullets in flight
    pub bullet_capacity: usize,

    // === Melee ===
    /// How far a stab reaches past the survivor's half-width
    pub melee_reach: f32,
    pub melee_knockback_x: f32,
    /// Upward speed given to a stabbed zombie
    pub melee_knockback_y: f32,

    // === Zombies ===
    pub zombie_speed: f32,
    pub zombie_anim_speed: u32,
    /// Maximum zombies alive at once
    pub zombie_capacity: usize,
    /// Vertical spawn position
    pub zombie_spawn_y: f32,
    /// Wall-clock time between spawn attempts
    pub spawn_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            platform_edge_margin: 48.0,

            survivor_speed: 3.0,
            survivor_jump_velocity: 10.0,
            survivor_anim_speed: 6,

            bullet_speed: 8.0,
            bullet_muzzle_right: 48.0,
            bullet_muzzle_left: 16.0,
            bullet_muzzle_height: 28.0,
            bullet_knockback: 4.0,
            bullet_capacity: 8,

            melee_reach: 24.0,
            melee_knockback_x: 4.0,
            melee_knockback_y: 8.0,

            zombie_speed: 1.0,
            zombie_anim_speed: 8,
            zombie_capacity: 8,
            zombie_spawn_y: 0.0,
            spawn_interval_ms: 3000,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validated())
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a tuning file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Clamp values that would stall or break the simulation
    pub fn validated(mut self) -> Self {
        self.survivor_anim_speed = self.survivor_anim_speed.max(1);
        self.zombie_anim_speed = self.zombie_anim_speed.max(1);
        self.bullet_capacity = self.bullet_capacity.max(1);
        self.zombie_capacity = self.zombie_capacity.max(1);
        self.platform_edge_margin = self.platform_edge_margin.max(0.0);
        self
    }
}
