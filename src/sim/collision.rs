//! Collision resolution between projectiles, pickups and the craft
//!
//! Pickups are visited newest-first and projectiles likewise, so when several
//! overlaps happen in one tick the most recently created entities win. A shot
//! clears every live projectile, so at most one pickup can be shot per tick.

use super::state::{GameEvent, PickupKind, PlayerCraft};
use crate::consts::*;

/// Resolve all overlaps for this tick, mutating score, health, flags and
/// both entity collections. Every shot and collection is pushed to `events`
/// newest pickup first.
pub fn resolve_collisions(craft: &mut PlayerCraft, events: &mut Vec<GameEvent>) {
    let geometry = craft.geometry;
    let craft_box = craft.aabb();
    let mut removed = vec![false; craft.pickups.len()];

    for i in (0..craft.pickups.len()).rev() {
        let kind = craft.pickups[i].kind;
        let pickup_box = craft.pickups[i].aabb(&geometry);

        // Projectile vs pickup
        let hit = craft
            .projectiles
            .iter()
            .rev()
            .any(|p| p.aabb(&geometry).overlaps(&pickup_box));
        if hit {
            craft.projectiles.clear();
            removed[i] = true;
            match kind {
                PickupKind::Health | PickupKind::Upgrade => craft.deduct_score(SHOT_BONUS_PENALTY),
                PickupKind::Normal => craft.add_score(SHOT_NORMAL_REWARD),
            }
            events.push(GameEvent::PickupShot {
                kind,
                score: craft.score,
            });
            log::debug!("{:?} pickup shot, score {}", kind, craft.score);
        }

        // Craft vs pickup, even if it was just shot
        if craft_box.overlaps(&pickup_box) {
            match kind {
                PickupKind::Health => craft.heal_full(),
                PickupKind::Upgrade => craft.bullet_upgrade = true,
                PickupKind::Normal => craft.damage(NORMAL_PICKUP_DAMAGE),
            }
            removed[i] = true;
            events.push(GameEvent::PickupCollected {
                kind,
                health: craft.health,
            });
            log::debug!("{:?} pickup collected, health {:.2}", kind, craft.health);
        }
    }

    let mut flags = removed.iter();
    craft
        .pickups
        .retain(|_| !flags.next().copied().unwrap_or(false));
}

/// Drop entities that have left the field
pub fn remove_off_field(craft: &mut PlayerCraft) {
    let geometry = craft.geometry;
    craft.projectiles.retain(|p| !p.is_off_field(&geometry));
    craft.pickups.retain(|p| !p.is_off_field(&geometry));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Geometry;
    use crate::sim::state::{Pickup, Projectile};
    use glam::Vec2;

    fn craft() -> PlayerCraft {
        let mut craft = PlayerCraft::new(Geometry::default());
        // Park the craft in the bottom-left corner, away from test entities
        craft.pos = Vec2::new(0.0, 432.0);
        craft
    }

    fn add_pickup(craft: &mut PlayerCraft, kind: PickupKind, pos: Vec2) -> u32 {
        let id = craft.next_entity_id();
        craft.pickups.push(Pickup {
            id,
            kind,
            pos,
            scale: 1.0,
            variant: 0,
        });
        id
    }

    fn add_projectile(craft: &mut PlayerCraft, pos: Vec2) {
        let id = craft.next_entity_id();
        craft.projectiles.push(Projectile { id, pos });
    }

    #[test]
    fn test_shot_clears_all_projectiles() {
        let mut craft = craft();
        add_pickup(&mut craft, PickupKind::Normal, Vec2::new(300.0, 100.0));
        add_projectile(&mut craft, Vec2::new(300.0, 100.0));
        add_projectile(&mut craft, Vec2::new(500.0, 50.0));
        add_projectile(&mut craft, Vec2::new(100.0, 200.0));

        let mut events = Vec::new();
        resolve_collisions(&mut craft, &mut events);

        assert_eq!(
            events,
            vec![GameEvent::PickupShot {
                kind: PickupKind::Normal,
                score: 10
            }]
        );
        assert!(craft.pickups.is_empty());
        assert!(craft.projectiles.is_empty());
        assert_eq!(craft.score, 10);
        assert_eq!(craft.high_score, 10);
    }

    #[test]
    fn test_shooting_bonus_pickups_costs_points() {
        for kind in [PickupKind::Health, PickupKind::Upgrade] {
            let mut craft = craft();
            craft.score = 150;
            add_pickup(&mut craft, kind, Vec2::new(300.0, 100.0));
            add_projectile(&mut craft, Vec2::new(305.0, 105.0));

            resolve_collisions(&mut craft, &mut Vec::new());
            assert_eq!(craft.score, 50);

            add_pickup(&mut craft, kind, Vec2::new(300.0, 100.0));
            add_projectile(&mut craft, Vec2::new(305.0, 105.0));
            resolve_collisions(&mut craft, &mut Vec::new());
            assert_eq!(craft.score, 0);
        }
    }

    #[test]
    fn test_only_newest_overlapping_pickup_is_shot() {
        let mut craft = craft();
        let older = add_pickup(&mut craft, PickupKind::Normal, Vec2::new(300.0, 100.0));
        add_pickup(&mut craft, PickupKind::Normal, Vec2::new(304.0, 100.0));
        add_projectile(&mut craft, Vec2::new(302.0, 100.0));

        let mut events = Vec::new();
        resolve_collisions(&mut craft, &mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(craft.pickups.len(), 1);
        assert_eq!(craft.pickups[0].id, older);
        assert_eq!(craft.score, 10);
    }

    #[test]
    fn test_craft_effects() {
        let mut craft = craft();
        let at_craft = craft.pos + Vec2::splat(8.0);

        craft.health = 0.5;
        add_pickup(&mut craft, PickupKind::Health, at_craft);
        resolve_collisions(&mut craft, &mut Vec::new());
        assert_eq!(craft.health, 1.0);

        add_pickup(&mut craft, PickupKind::Upgrade, at_craft);
        resolve_collisions(&mut craft, &mut Vec::new());
        assert!(craft.bullet_upgrade);

        add_pickup(&mut craft, PickupKind::Normal, at_craft);
        let mut events = Vec::new();
        resolve_collisions(&mut craft, &mut events);
        assert_eq!(
            events,
            vec![GameEvent::PickupCollected {
                kind: PickupKind::Normal,
                health: 0.5
            }]
        );
        assert_eq!(craft.health, 0.5);
        assert!(craft.pickups.is_empty());
    }

    #[test]
    fn test_normal_pickup_at_half_health_ends_run() {
        let mut craft = craft();
        craft.health = 0.5;
        let at_craft = craft.pos + Vec2::splat(8.0);
        add_pickup(&mut craft, PickupKind::Normal, at_craft);

        resolve_collisions(&mut craft, &mut Vec::new());
        assert_eq!(craft.health, 0.0);
        assert!(craft.is_game_over());
    }

    #[test]
    fn test_shot_and_collected_same_tick() {
        let mut craft = craft();
        craft.health = 0.5;
        let at_craft = craft.pos + Vec2::splat(8.0);
        add_pickup(&mut craft, PickupKind::Health, at_craft);
        add_projectile(&mut craft, at_craft);

        add_pickup(&mut craft, PickupKind::Normal, Vec2::new(300.0, 100.0));

        let mut events = Vec::new();
        resolve_collisions(&mut craft, &mut events);

        // Both rules fire; only the touched pickup is removed, exactly once
        assert_eq!(
            events,
            vec![
                GameEvent::PickupShot {
                    kind: PickupKind::Health,
                    score: 0
                },
                GameEvent::PickupCollected {
                    kind: PickupKind::Health,
                    health: 1.0
                },
            ]
        );
        assert_eq!(craft.pickups.len(), 1);
        assert_eq!(craft.pickups[0].kind, PickupKind::Normal);
        assert_eq!(craft.health, 1.0);
        assert_eq!(craft.score, 0);
    }

    #[test]
    fn test_remove_off_field() {
        let mut craft = craft();
        add_projectile(&mut craft, Vec2::new(10.0, -16.0));
        add_projectile(&mut craft, Vec2::new(10.0, -16.5));
        add_pickup(&mut craft, PickupKind::Normal, Vec2::new(10.0, 480.0));
        add_pickup(&mut craft, PickupKind::Normal, Vec2::new(10.0, 480.5));

        remove_off_field(&mut craft);
        assert_eq!(craft.projectiles.len(), 1);
        assert_eq!(craft.pickups.len(), 1);
    }
}
