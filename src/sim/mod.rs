//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Frame-stepped integration (velocities are per frame)
//! - Seeded RNG only
//! - Fixed-capacity pools iterated in slot order
//! - No rendering or platform dependencies

pub mod animation;
pub mod autopilot;
pub mod body;
pub mod bullet;
pub mod collision;
pub mod combat;
pub mod pool;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod survivor;
pub mod tick;
pub mod zombie;

pub use animation::Animation;
pub use autopilot::autopilot;
pub use body::Body;
pub use bullet::Bullet;
pub use collision::{on_platform, rects_overlap};
pub use pool::{Pool, Slot};
pub use rect::Rect;
pub use spawn::SpawnDirector;
pub use state::{HitSource, Level, SimEvent, SimulationState, SpriteSizes};
pub use survivor::{Survivor, SurvivorState};
pub use tick::{TickInput, tick};
pub use zombie::{Zombie, ZombieState};
