//! Frame-stepped kinematics shared by every entity kind
//!
//! Velocities are in pixels per frame and gravity in pixels per frame², so
//! one call to [`Body::integrate`] is one rendered frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::on_platform;
use super::rect::Rect;

/// Position, velocity and fixed bounding size of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Bounding box at the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Apply gravity, then move by the updated velocity
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos.y += self.vel.y;
        self.pos.x += self.vel.x;
    }

    /// Land on the platform if the containment test passes.
    ///
    /// On contact the bottom edge is placed exactly on the platform surface
    /// and vertical velocity is cleared. Returns whether the body is supported.
    pub fn settle_on(&mut self, platform: &Rect, edge_margin: f32) -> bool {
        if !on_platform(&self.rect(), platform, edge_margin) {
            return false;
        }
        self.pos.y = platform.top() - self.size.y;
        self.vel.y = 0.0;
        true
    }

    /// Horizontal centre line
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}
