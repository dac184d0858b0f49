//! Spitfire - simulation core of a vertically-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (craft, projectiles, pickups, collisions, levels)
//! - `game`: Game loop owning the craft, RNG and session records
//! - `platform`: Input and renderer contracts for the host
//! - `settings`: Validated configuration (field geometry, seed, effects)
//! - `highscores`: In-process leaderboard of finished runs

pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical play-field dimensions
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Craft bounding box
    pub const CRAFT_WIDTH: f32 = 48.0;
    pub const CRAFT_HEIGHT: f32 = 48.0;
    /// Gap between the craft's spawn position and the bottom edge
    pub const SPAWN_BOTTOM_MARGIN: f32 = 10.0;
    /// Movement per held direction, per tick
    pub const CRAFT_SPEED: f32 = 2.0;

    /// Projectile bounding box
    pub const PROJECTILE_WIDTH: f32 = 16.0;
    pub const PROJECTILE_HEIGHT: f32 = 16.0;
    /// Upward travel per tick
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Horizontal offset of each twin projectile from the craft center
    pub const TWIN_FIRE_SPREAD: f32 = 17.5;

    /// Pickup bounding box before scaling
    pub const PICKUP_SIZE: f32 = 16.0;
    /// Base fall per tick
    pub const PICKUP_FALL_SPEED: f32 = 2.0;
    /// Number of cosmetic sprite variants for normal pickups
    pub const NORMAL_PICKUP_VARIANTS: u8 = 3;

    /// Scoring
    pub const SHOT_NORMAL_REWARD: u32 = 10;
    pub const SHOT_BONUS_PENALTY: u32 = 100;
    pub const COMPLETION_SCORE: u32 = 3000;

    /// Health lost when the craft touches a normal pickup
    pub const NORMAL_PICKUP_DAMAGE: f32 = 0.5;
    pub const MAX_HEALTH: f32 = 1.0;

    /// Ticks of screen shake after a level-up (1 second at 60 Hz)
    pub const LEVEL_UP_SHAKE_TICKS: u32 = 60;
}
