//! Cross-entity effects: firing, bullet impacts and melee strikes
//!
//! Entities never hold references to one another; every effect here is
//! resolved by a fresh geometric test against the pools.

use glam::Vec2;

use super::bullet::Bullet;
use super::collision::{melee_reach, rects_overlap};
use super::pool::Pool;
use super::state::{HitSource, SimEvent};
use super::survivor::Survivor;
use super::zombie::Zombie;
use crate::tuning::Tuning;

/// Put a bullet in flight from the survivor's muzzle.
///
/// A full pool drops the shot. Returns the slot used.
pub fn fire_bullet(
    bullets: &mut Pool<Bullet>,
    survivor: &Survivor,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) -> Option<usize> {
    let Some((slot, bullet)) = bullets.allocate() else {
        log::debug!("Bullet pool exhausted, shot dropped");
        return None;
    };
    bullet.launch(Bullet::muzzle(survivor, tuning), survivor.facing);
    events.push(SimEvent::BulletFired { slot });
    log::debug!("Bullet {slot} fired");
    Some(slot)
}

/// Move live bullets and free those that left the screen
pub fn advance_bullets(bullets: &mut Pool<Bullet>, tuning: &Tuning, screen_width: f32) {
    for (slot, bullet) in bullets.iter_alive_mut() {
        if bullet.advance(tuning.bullet_speed, screen_width) {
            log::trace!("Bullet {slot} left the screen");
        }
    }
}

/// Test every live bullet against every hittable zombie.
///
/// A bullet stops at the first zombie it overlaps (lowest slot first) and is
/// freed immediately, so it can never hit two zombies.
pub fn resolve_bullet_hits(
    bullets: &mut Pool<Bullet>,
    zombies: &mut Pool<Zombie>,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) {
    for (_, bullet) in bullets.iter_alive_mut() {
        let bullet_rect = bullet.body.rect();
        let target = zombies
            .iter_alive_mut()
            .find(|(_, z)| z.is_hittable() && rects_overlap(&bullet_rect, &z.body.rect()));

        if let Some((slot, zombie)) = target {
            let vy = zombie.body.vel.y;
            zombie.take_hit(Vec2::new(tuning.bullet_knockback * bullet.direction, vy));
            bullet.alive = false;
            events.push(SimEvent::ZombieHit {
                slot,
                source: HitSource::Bullet,
            });
            log::debug!("Zombie {slot} shot");
        }
    }
}

/// Run the stab hit-test. Every hittable zombie inside the reach box is
/// thrown up and away in the survivor's facing direction.
pub fn melee_strike(
    survivor: &Survivor,
    zombies: &mut Pool<Zombie>,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) -> usize {
    let reach = melee_reach(&survivor.body.rect(), survivor.facing, tuning.melee_reach);
    let knockback = Vec2::new(
        tuning.melee_knockback_x * survivor.facing,
        -tuning.melee_knockback_y,
    );

    let mut struck = 0;
    for (slot, zombie) in zombies.iter_alive_mut() {
        if zombie.is_hittable() && rects_overlap(&reach, &zombie.body.rect()) {
            zombie.take_hit(knockback);
            events.push(SimEvent::ZombieHit {
                slot,
                source: HitSource::Melee,
            });
            log::debug!("Zombie {slot} stabbed");
            struck += 1;
        }
    }
    struck
}
