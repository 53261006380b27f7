//! Sprite animation cycles
//!
//! Every animation is four frame-groups long. A frame-group lasts
//! `speed` frames, and the group index doubles as the sprite sheet column.

use serde::{Deserialize, Serialize};

/// Frame-groups per animation cycle
pub const GROUPS_PER_CYCLE: u32 = 4;

/// Per-entity animation counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Frames elapsed in the current cycle
    pub counter: u32,
    /// Frames per frame-group
    pub speed: u32,
    /// Set on the frame a cycle wraps around, cleared on the next advance
    pub completed: bool,
}

impl Animation {
    pub fn new(speed: u32) -> Self {
        Self {
            counter: 0,
            speed: speed.max(1),
            completed: false,
        }
    }

    /// Restart the cycle from the first frame-group
    pub fn reset(&mut self) {
        self.counter = 0;
        self.completed = false;
    }

    /// Current frame-group (sprite sheet column)
    #[inline]
    pub fn group(&self) -> u32 {
        self.counter / self.speed
    }

    /// Step one rendered frame
    pub fn advance(&mut self) {
        self.completed = false;
        self.counter += 1;
        if self.group() >= GROUPS_PER_CYCLE {
            self.counter = 0;
            self.completed = true;
        }
    }
}
