//! Bullets: straight-line projectiles with no gravity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::off_screen_horizontal;
use super::pool::Slot;
use super::survivor::Survivor;
use crate::tuning::Tuning;

/// A bullet pool slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
    /// +1 travelling right, -1 travelling left
    pub direction: f32,
    pub alive: bool,
}

impl Slot for Bullet {
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Bullet {
    /// An empty (dead) slot sized from the bullet sprite
    pub fn new(size: Vec2) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, size),
            direction: 1.0,
            alive: false,
        }
    }

    /// Occupy this slot with a bullet leaving `pos`
    pub fn launch(&mut self, pos: Vec2, direction: f32) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.direction = direction;
        self.alive = true;
    }

    /// Where a shot leaves the gun.
    ///
    /// The muzzle offset is measured from the survivor's left edge and is
    /// not mirrored, so the two facings use separate offsets.
    pub fn muzzle(survivor: &Survivor, tuning: &Tuning) -> Vec2 {
        let offset_x = if survivor.facing >= 0.0 {
            tuning.bullet_muzzle_right
        } else {
            tuning.bullet_muzzle_left
        };
        survivor.body.pos + Vec2::new(offset_x, tuning.bullet_muzzle_height)
    }

    /// Move one frame. Returns true if the bullet left the screen and was freed.
    pub fn advance(&mut self, speed: f32, screen_width: f32) -> bool {
        self.body.pos.x += speed * self.direction;
        if off_screen_horizontal(&self.body.rect(), screen_width) {
            self.alive = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muzzle_asymmetry() {
        let tuning = Tuning::default();
        let mut survivor = Survivor::new(Vec2::new(100.0, 50.0), Vec2::new(64.0, 64.0), 6);

        survivor.facing = 1.0;
        assert_eq!(Bullet::muzzle(&survivor, &tuning), Vec2::new(148.0, 78.0));

        survivor.facing = -1.0;
        assert_eq!(Bullet::muzzle(&survivor, &tuning), Vec2::new(116.0, 78.0));
    }

    #[test]
    fn test_flies_until_off_screen() {
        let mut bullet = Bullet::new(Vec2::new(16.0, 6.0));
        bullet.launch(Vec2::new(482.0, 100.0), 1.0);

        assert!(!bullet.advance(8.0, 512.0));
        assert_eq!(bullet.body.pos.x, 490.0);
        assert!(!bullet.advance(8.0, 512.0));
        assert!(!bullet.advance(8.0, 512.0));
        assert!(bullet.advance(8.0, 512.0));
        assert!(!bullet.alive);
    }

    #[test]
    fn test_leftward_flight_culled_at_zero() {
        let mut bullet = Bullet::new(Vec2::new(16.0, 6.0));
        bullet.launch(Vec2::new(0.0, 100.0), -1.0);
        // Trailing edge at 8 after one frame, still visible
        assert!(!bullet.advance(8.0, 512.0));
        assert!(!bullet.advance(8.0, 512.0));
        assert!(bullet.advance(8.0, 512.0));
    }
}
