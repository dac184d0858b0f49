//! Level progression
//!
//! Levels only ever move up one step at a time, each gated on a score
//! threshold checked from the level directly below it.

use super::state::PlayerCraft;
use crate::consts::LEVEL_UP_SHAKE_TICKS;

pub const MAX_LEVEL: u8 = 4;

/// Per-level tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProfile {
    /// Score needed to leave this level (None at the top level)
    pub promote_at: Option<u32>,
    /// Fixed pickup scale (None keeps the random creation scale)
    pub pickup_scale: Option<f32>,
    /// Extra pickup fall per tick on top of the base speed
    pub extra_fall_speed: f32,
}

const LEVEL_PROFILES: [LevelProfile; MAX_LEVEL as usize] = [
    LevelProfile {
        promote_at: Some(200),
        pickup_scale: None,
        extra_fall_speed: 0.0,
    },
    LevelProfile {
        promote_at: Some(500),
        pickup_scale: Some(2.0),
        extra_fall_speed: 0.0,
    },
    LevelProfile {
        promote_at: Some(1000),
        pickup_scale: Some(3.0),
        extra_fall_speed: 0.0,
    },
    LevelProfile {
        promote_at: None,
        pickup_scale: Some(4.0),
        extra_fall_speed: 2.0,
    },
];

impl LevelProfile {
    /// Profile for a level, clamped into 1..=MAX_LEVEL
    pub fn for_level(level: u8) -> &'static LevelProfile {
        let index = level.clamp(1, MAX_LEVEL) as usize - 1;
        &LEVEL_PROFILES[index]
    }
}

/// Promote the craft by at most one level. Returns the new level on promotion.
pub fn check_progression(craft: &mut PlayerCraft) -> Option<u8> {
    let threshold = LevelProfile::for_level(craft.level).promote_at?;
    if craft.score < threshold {
        return None;
    }
    let new_level = craft.level + 1;
    level_up(craft, new_level);
    Some(new_level)
}

/// Enter `new_level`: start the shake and nudge every live entity once
fn level_up(craft: &mut PlayerCraft, new_level: u8) {
    craft.level = new_level;
    craft.shake_timer = LEVEL_UP_SHAKE_TICKS;

    let nudge = f32::from(new_level);
    for pickup in &mut craft.pickups {
        pickup.pos.y += nudge;
    }
    for projectile in &mut craft.projectiles {
        projectile.pos.y -= nudge;
    }
    log::info!("Level up! Now at level {}", new_level);
}
