//! Axis-aligned bounding boxes and play-field geometry
//!
//! All positions are the top-left corner of an entity's box, in field units,
//! with y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Largest accepted field dimension
pub const MAX_FIELD_DIMENSION: f32 = 16384.0;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Field and sprite dimensions shared by every bounds check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub field_width: f32,
    pub field_height: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Pickup box edge before level/creation scaling
    pub pickup_size: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            pickup_size: PICKUP_SIZE,
        }
    }
}

fn valid_extent(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl Geometry {
    /// Reject geometry the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !valid_extent(self.field_width)
            || !valid_extent(self.field_height)
            || self.field_width > MAX_FIELD_DIMENSION
            || self.field_height > MAX_FIELD_DIMENSION
        {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }

        let sprites = [
            ("craft", self.craft_width, self.craft_height),
            ("projectile", self.projectile_width, self.projectile_height),
            ("pickup", self.pickup_size, self.pickup_size),
        ];
        for (what, width, height) in sprites {
            if !valid_extent(width) || !valid_extent(height) {
                return Err(ConfigError::InvalidSprite {
                    what,
                    width,
                    height,
                });
            }
        }

        // Spawn point sits SPAWN_BOTTOM_MARGIN above the bottom edge
        if self.craft_width > self.field_width
            || self.craft_height + SPAWN_BOTTOM_MARGIN > self.field_height
        {
            return Err(ConfigError::CraftDoesNotFit {
                craft: (self.craft_width, self.craft_height),
                field: (self.field_width, self.field_height),
            });
        }

        Ok(())
    }

    pub fn craft_size(&self) -> Vec2 {
        Vec2::new(self.craft_width, self.craft_height)
    }

    pub fn projectile_size(&self) -> Vec2 {
        Vec2::new(self.projectile_width, self.projectile_height)
    }

    /// Bottom-center position the craft starts each run from
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.craft_width / 2.0,
            self.field_height - self.craft_height - SPAWN_BOTTOM_MARGIN,
        )
    }

    /// Largest top-left position that keeps the craft inside the field
    pub fn craft_max_pos(&self) -> Vec2 {
        Vec2::new(
            self.field_width - self.craft_width,
            self.field_height - self.craft_height,
        )
    }

    /// Clamp a craft position so its box stays inside the field
    pub fn clamp_craft(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, self.craft_max_pos())
    }
}
