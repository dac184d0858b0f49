//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed step only, one `tick` per host frame
//! - Injected RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod progression;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{remove_off_field, resolve_collisions};
pub use geometry::{Aabb, Geometry};
pub use progression::{LevelProfile, MAX_LEVEL, check_progression};
pub use snapshot::Snapshot;
pub use spawn::{SpawnRates, spawn_pickup, spawn_pickups};
pub use state::{GameEvent, GamePhase, Pickup, PickupKind, PlayerCraft, Projectile};
pub use tick::{TickInput, tick};
