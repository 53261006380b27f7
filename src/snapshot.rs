//! Read-only per-frame export for an external renderer
//!
//! Captured after `tick` returns; never mutates the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::SimulationState;

/// Sprite sheet cell: column is the animation frame-group, row the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteCell {
    pub column: u32,
    pub row: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivorView {
    pub pos: Vec2,
    pub cell: SpriteCell,
    /// +1 draws unflipped, -1 mirrored
    pub facing: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZombieView {
    pub slot: usize,
    pub pos: Vec2,
    pub cell: SpriteCell,
    pub facing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub slot: usize,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub survivor: SurvivorView,
    /// Live zombie slots only, in slot order
    pub zombies: Vec<ZombieView>,
    /// Live bullet slots only, in slot order
    pub bullets: Vec<BulletView>,
}

/// Capture the drawable state of the simulation
pub fn capture(state: &SimulationState) -> FrameSnapshot {
    let s = &state.survivor;
    let survivor = SurvivorView {
        pos: s.body.pos,
        cell: SpriteCell {
            column: s.anim.group(),
            row: s.state.sprite_row(),
        },
        facing: s.facing,
        alive: s.alive,
    };

    let zombies = state
        .zombies
        .iter_alive()
        .map(|(slot, z)| ZombieView {
            slot,
            pos: z.body.pos,
            cell: SpriteCell {
                column: z.anim.group(),
                row: z.state.sprite_row(),
            },
            facing: z.direction,
        })
        .collect();

    let bullets = state
        .bullets
        .iter_alive()
        .map(|(slot, b)| BulletView {
            slot,
            pos: b.body.pos,
            size: b.body.size,
        })
        .collect();

    FrameSnapshot {
        frame: state.frame,
        survivor,
        zombies,
        bullets,
    }
}
