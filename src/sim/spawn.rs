//! Probabilistic pickup spawning
//!
//! Each tick rolls once per pickup kind; the rolls are independent, so zero to
//! three pickups can appear in the same tick.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Pickup, PickupKind, PlayerCraft};
use crate::consts::NORMAL_PICKUP_VARIANTS;

/// Per-tick spawn probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRates {
    pub normal: f64,
    pub health: f64,
    pub upgrade: f64,
}

impl Default for SpawnRates {
    fn default() -> Self {
        Self {
            normal: 0.02,
            health: 0.001,
            upgrade: 0.001,
        }
    }
}

/// Roll this tick's spawns and append them to the craft's pickups.
/// Returns how many were spawned.
pub fn spawn_pickups(craft: &mut PlayerCraft, rates: &SpawnRates, rng: &mut impl Rng) -> usize {
    let mut spawned = 0;
    for (kind, rate) in [
        (PickupKind::Normal, rates.normal),
        (PickupKind::Health, rates.health),
        (PickupKind::Upgrade, rates.upgrade),
    ] {
        if rng.random::<f64>() < rate {
            spawn_pickup(craft, kind, rng);
            spawned += 1;
        }
    }
    spawned
}

/// Append one pickup of `kind` at a random x along the top edge
pub fn spawn_pickup(craft: &mut PlayerCraft, kind: PickupKind, rng: &mut impl Rng) {
    let x = rng.random::<f32>() * craft.geometry.field_width;
    let variant = match kind {
        PickupKind::Normal => rng.random_range(0..NORMAL_PICKUP_VARIANTS),
        PickupKind::Health | PickupKind::Upgrade => 0,
    };
    let scale: f32 = rng.random_range(0.5..1.5);
    let id = craft.next_entity_id();
    craft.pickups.push(Pickup {
        id,
        kind,
        pos: Vec2::new(x, 0.0),
        scale,
        variant,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Geometry;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawned_pickup_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut craft = PlayerCraft::new(Geometry::default());
        for _ in 0..500 {
            spawn_pickup(&mut craft, PickupKind::Normal, &mut rng);
        }
        for pickup in &craft.pickups {
            assert!((0.0..640.0).contains(&pickup.pos.x));
            assert_eq!(pickup.pos.y, 0.0);
            assert!((0.5..1.5).contains(&pickup.scale));
            assert!(pickup.variant < NORMAL_PICKUP_VARIANTS);
        }
        // All variants show up
        for variant in 0..NORMAL_PICKUP_VARIANTS {
            assert!(craft.pickups.iter().any(|p| p.variant == variant));
        }
    }

    #[test]
    fn test_certain_and_impossible_rates() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut craft = PlayerCraft::new(Geometry::default());

        let always = SpawnRates {
            normal: 1.0,
            health: 1.0,
            upgrade: 1.0,
        };
        assert_eq!(spawn_pickups(&mut craft, &always, &mut rng), 3);
        let kinds: Vec<_> = craft.pickups.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PickupKind::Normal, PickupKind::Health, PickupKind::Upgrade]
        );

        let never = SpawnRates {
            normal: 0.0,
            health: 0.0,
            upgrade: 0.0,
        };
        assert_eq!(spawn_pickups(&mut craft, &never, &mut rng), 0);
        assert_eq!(craft.pickups.len(), 3);
    }

    #[test]
    fn test_spawn_rate_converges() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut craft = PlayerCraft::new(Geometry::default());
        let rates = SpawnRates::default();
        let ticks = 100_000;

        let mut total = 0;
        for _ in 0..ticks {
            total += spawn_pickups(&mut craft, &rates, &mut rng);
            craft.pickups.clear();
        }

        // Expect 2200, sigma ~46
        let expected = ticks as f64 * (rates.normal + rates.health + rates.upgrade);
        let diff = (total as f64 - expected).abs();
        assert!(diff < 250.0, "spawned {total}, expected ~{expected}");
    }
}
