//! Zombies and their per-instance behaviour state machine
//!
//! Zombies are never killed outright. A hit knocks them out of the state
//! machine for good; they keep moving under gravity until they drop below
//! the screen and their slot is reaped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::body::Body;
use super::collision::{below_screen, rects_overlap};
use super::pool::Slot;
use super::state::{Level, SimEvent};
use super::survivor::{Survivor, SurvivorState};
use crate::tuning::Tuning;

/// Frame-group on which an attack connects
pub const ATTACK_GROUP: u32 = 3;

/// Zombie behaviour states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZombieState {
    Fall,
    Walk,
    Attack,
    /// Knocked back; no further decisions until reaped
    Hit,
}

impl ZombieState {
    /// Sprite sheet row for this state
    pub fn sprite_row(self) -> u32 {
        match self {
            ZombieState::Fall | ZombieState::Walk => 0,
            ZombieState::Attack => 1,
            ZombieState::Hit => 2,
        }
    }
}

/// A zombie pool slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub body: Body,
    /// Walk direction, fixed at spawn (+1 right, -1 left)
    pub direction: f32,
    pub anim: Animation,
    /// Latch: this attack cycle has already delivered its blow
    pub attack_landed: bool,
    pub state: ZombieState,
    pub alive: bool,
}

impl Slot for Zombie {
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Zombie {
    /// An empty (dead) slot
    pub fn new(size: Vec2, anim_speed: u32) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, size),
            direction: 1.0,
            anim: Animation::new(anim_speed),
            attack_landed: false,
            state: ZombieState::Fall,
            alive: false,
        }
    }

    /// Occupy this slot with a fresh zombie. Nothing from a previous
    /// occupant survives except the sprite size and animation speed.
    pub fn spawn(&mut self, pos: Vec2, direction: f32) {
        let mut fresh = Zombie::new(self.body.size, self.anim.speed);
        fresh.body.pos = pos;
        fresh.direction = direction;
        fresh.alive = true;
        *self = fresh;
    }

    /// Whether bullets and stabs can still affect this zombie
    pub fn is_hittable(&self) -> bool {
        self.alive && self.state != ZombieState::Hit
    }

    /// Knock the zombie back with the given velocity and take it out of play
    pub fn take_hit(&mut self, vel: Vec2) {
        self.body.vel = vel;
        self.state = ZombieState::Hit;
        self.anim.reset();
    }

    fn set_state(&mut self, next: ZombieState) {
        if self.state != next {
            self.state = next;
            self.anim.reset();
        }
    }

    /// Advance one frame
    pub fn update(
        &mut self,
        slot: usize,
        survivor: &mut Survivor,
        level: &Level,
        tuning: &Tuning,
        events: &mut Vec<SimEvent>,
    ) {
        if !self.alive {
            return;
        }

        if below_screen(&self.body.rect(), level.screen.y) {
            self.alive = false;
            events.push(SimEvent::ZombieReaped { slot });
            log::debug!("Zombie {slot} reaped");
            return;
        }

        self.body.integrate(tuning.gravity);

        if self.state == ZombieState::Hit {
            self.anim.advance();
            return;
        }

        if self
            .body
            .settle_on(&level.platform, tuning.platform_edge_margin)
        {
            if self.state == ZombieState::Fall {
                self.set_state(ZombieState::Walk);
            }
        } else if self.state == ZombieState::Walk {
            self.body.vel.x = 0.0;
            self.set_state(ZombieState::Fall);
        }

        match self.state {
            ZombieState::Walk => {
                self.body.vel.x = tuning.zombie_speed * self.direction;
                let touching = rects_overlap(&self.body.rect(), &survivor.body.rect());
                if touching && survivor.is_targetable() {
                    self.state = ZombieState::Attack;
                    self.anim.reset();
                    self.body.vel.x = 0.0;
                    self.attack_landed = false;
                }
            }
            ZombieState::Attack => {
                if self.anim.completed {
                    self.set_state(ZombieState::Walk);
                } else if self.anim.group() == ATTACK_GROUP
                    && !self.attack_landed
                    && survivor.is_targetable()
                    && survivor.state != SurvivorState::Jump
                {
                    self.attack_landed = true;
                    survivor.kill();
                    events.push(SimEvent::SurvivorKilled { by: slot });
                    log::info!("Survivor caught by zombie {slot}");
                }
            }
            ZombieState::Fall | ZombieState::Hit => {}
        }

        self.anim.advance();
    }
}
