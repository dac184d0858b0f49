//! Game state and core simulation types
//!
//! `PlayerCraft` is the aggregate root: it owns every live entity, and the
//! game loop owns it exclusively.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, Geometry};
use super::progression::LevelProfile;
use crate::consts::*;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting movement and fire input
    #[default]
    Active,
    /// Health ran out
    GameOver,
    /// Reached the completion score
    Completed,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Damages the craft on contact, rewards a shot
    Normal,
    /// Restores full health
    Health,
    /// Enables twin fire for the rest of the run
    Upgrade,
}

/// Something that happened during a tick (for logging and hosts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile destroyed a pickup
    PickupShot { kind: PickupKind, score: u32 },
    /// The craft touched a pickup
    PickupCollected { kind: PickupKind, health: f32 },
    LevelUp { level: u8 },
    GameOver { score: u32, new_high_score: bool },
    GameCompleted { score: u32, new_high_score: bool },
    Restarted,
}

/// A player-fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
}

impl Projectile {
    /// Move up by one tick
    pub fn advance(&mut self) {
        self.pos.y -= PROJECTILE_SPEED;
    }

    pub fn aabb(&self, geometry: &Geometry) -> Aabb {
        Aabb::from_pos_size(self.pos, geometry.projectile_size())
    }

    /// Fully past the top edge
    pub fn is_off_field(&self, geometry: &Geometry) -> bool {
        self.pos.y < -geometry.projectile_height
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec2,
    /// Size multiplier; random at creation, fixed by level from level 2 on
    pub scale: f32,
    /// Cosmetic sprite index
    pub variant: u8,
}

impl Pickup {
    /// Fall by one tick under the current level's profile
    pub fn advance(&mut self, level: u8) {
        let profile = LevelProfile::for_level(level);
        self.pos.y += PICKUP_FALL_SPEED + profile.extra_fall_speed;
        if let Some(scale) = profile.pickup_scale {
            self.scale = scale;
        }
    }

    pub fn aabb(&self, geometry: &Geometry) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(geometry.pickup_size * self.scale))
    }

    /// Past the bottom edge
    pub fn is_off_field(&self, geometry: &Geometry) -> bool {
        self.pos.y > geometry.field_height
    }
}

/// The controlled craft and everything it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCraft {
    /// Top-left of the craft's box
    pub pos: Vec2,
    /// 0.0 - 1.0
    pub health: f32,
    pub score: u32,
    /// Best score seen in this process; survives restart
    pub high_score: u32,
    /// High score when the current run started
    pub previous_high_score: u32,
    /// 1 - 4
    pub level: u8,
    pub bullet_upgrade: bool,
    /// Ticks of level-up shake remaining
    pub shake_timer: u32,
    pub phase: GamePhase,
    /// Active ticks in this run
    pub ticks: u64,
    /// Live projectiles in creation order
    pub projectiles: Vec<Projectile>,
    /// Live pickups in creation order
    pub pickups: Vec<Pickup>,
    pub geometry: Geometry,
    next_id: u32,
}

impl PlayerCraft {
    /// Create a craft at the spawn point of already-validated geometry
    pub fn new(geometry: Geometry) -> Self {
        Self {
            pos: geometry.spawn_point(),
            health: MAX_HEALTH,
            score: 0,
            high_score: 0,
            previous_high_score: 0,
            level: 1,
            bullet_upgrade: false,
            shake_timer: 0,
            phase: GamePhase::Active,
            ticks: 0,
            projectiles: Vec::new(),
            pickups: Vec::new(),
            geometry,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset the run, keeping only the session high score
    pub fn restart(&mut self) {
        let high_score = self.high_score.max(self.score);
        *self = Self::new(self.geometry);
        self.high_score = high_score;
        self.previous_high_score = high_score;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_game_completed(&self) -> bool {
        self.phase == GamePhase::Completed
    }

    /// No movement, firing or collisions happen in terminal phases
    pub fn is_terminal(&self) -> bool {
        self.phase != GamePhase::Active
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.geometry.craft_size())
    }

    /// Add points and track the high score
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Remove points, flooring at zero
    pub fn deduct_score(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    /// Lose health; running out ends the run
    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).clamp(0.0, MAX_HEALTH);
        if self.health <= 0.0 {
            self.phase = GamePhase::GameOver;
        }
    }

    pub fn heal_full(&mut self) {
        self.health = MAX_HEALTH;
    }

    /// Apply one tick of directional movement, then keep the box in the field
    pub fn apply_movement(&mut self, up: bool, down: bool, left: bool, right: bool) {
        let mut delta = Vec2::ZERO;
        if up {
            delta.y -= CRAFT_SPEED;
        }
        if down {
            delta.y += CRAFT_SPEED;
        }
        if left {
            delta.x -= CRAFT_SPEED;
        }
        if right {
            delta.x += CRAFT_SPEED;
        }
        self.pos = self.geometry.clamp_craft(self.pos + delta);
    }

    /// Spawn projectiles from the craft's nose (one, or two with the upgrade)
    pub fn fire(&mut self) {
        let center_x =
            self.pos.x + self.geometry.craft_width / 2.0 - self.geometry.projectile_width / 2.0;
        if self.bullet_upgrade {
            self.spawn_projectile(center_x - TWIN_FIRE_SPREAD);
            self.spawn_projectile(center_x + TWIN_FIRE_SPREAD);
        } else {
            self.spawn_projectile(center_x);
        }
    }

    fn spawn_projectile(&mut self, x: f32) {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: Vec2::new(x, self.pos.y),
        });
    }

    /// Fold the current score into the high score at a terminal transition.
    /// Returns true if this run beat the best score it started against.
    pub fn settle_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.score > self.previous_high_score
    }
}
