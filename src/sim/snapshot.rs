//! Read-only view of the simulation for renderers
//!
//! Renderers never touch `PlayerCraft`; they get a settled copy after each tick.

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, PickupKind, PlayerCraft};

#[derive(Debug, Clone, Serialize)]
pub struct CraftView {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: f32,
    pub bullet_upgrade: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileView {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickupView {
    pub id: u32,
    pub kind: PickupKind,
    pub variant: u8,
    pub pos: Vec2,
    pub scale: f32,
    /// Scaled box size
    pub size: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub field: Vec2,
    pub craft: CraftView,
    pub score: u32,
    pub high_score: u32,
    pub level: u8,
    pub shake_timer: u32,
    /// Shake should be drawn this frame (timer running and effect enabled)
    pub shaking: bool,
    pub phase: GamePhase,
    /// The ended run beat the session best it started against
    pub new_high_score: bool,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
}

impl Snapshot {
    /// Capture the craft's current state. `screen_shake` is the host's
    /// effective shake preference.
    pub fn capture(craft: &PlayerCraft, screen_shake: bool) -> Self {
        let geometry = &craft.geometry;
        Self {
            field: Vec2::new(geometry.field_width, geometry.field_height),
            craft: CraftView {
                pos: craft.pos,
                size: geometry.craft_size(),
                health: craft.health,
                bullet_upgrade: craft.bullet_upgrade,
            },
            score: craft.score,
            high_score: craft.high_score,
            level: craft.level,
            shake_timer: craft.shake_timer,
            shaking: screen_shake && craft.shake_timer > 0,
            phase: craft.phase,
            new_high_score: craft.is_terminal() && craft.score > craft.previous_high_score,
            projectiles: craft
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    id: p.id,
                    pos: p.pos,
                    size: geometry.projectile_size(),
                })
                .collect(),
            pickups: craft
                .pickups
                .iter()
                .map(|p| PickupView {
                    id: p.id,
                    kind: p.kind,
                    variant: p.variant,
                    pos: p.pos,
                    scale: p.scale,
                    size: p.aabb(geometry).size(),
                })
                .collect(),
        }
    }

    /// Health as a whole percentage for HUD text
    pub fn health_percent(&self) -> u32 {
        (self.craft.health * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Geometry;
    use crate::sim::state::Pickup;

    #[test]
    fn test_capture() {
        let mut craft = PlayerCraft::new(Geometry::default());
        craft.fire();
        craft.pickups.push(Pickup {
            id: 9,
            kind: PickupKind::Upgrade,
            pos: Vec2::new(40.0, 0.0),
            scale: 2.0,
            variant: 0,
        });
        craft.shake_timer = 5;
        craft.health = 0.5;

        let snapshot = Snapshot::capture(&craft, true);
        assert_eq!(snapshot.projectiles.len(), 1);
        assert_eq!(snapshot.pickups[0].size, Vec2::splat(32.0));
        assert!(snapshot.shaking);
        assert_eq!(snapshot.health_percent(), 50);
        assert!(!snapshot.new_high_score);

        let calm = Snapshot::capture(&craft, false);
        assert!(!calm.shaking);
    }

    #[test]
    fn test_serializes_to_json() {
        let craft = PlayerCraft::new(Geometry::default());
        let json = serde_json::to_string(&Snapshot::capture(&craft, true)).unwrap_or_default();
        assert!(json.contains("\"phase\":\"Active\""));
        assert!(json.contains("\"level\":1"));
    }
}
