//! Demo autopilot - plays the game through the normal input contract
//!
//! Each tick it looks at the latest snapshot and decides which actions to hold:
//! dodge normal pickups falling onto the craft, otherwise line up under a
//! target and shoot. Bonus pickups it wants are collected by touch, so it
//! holds fire while chasing one.

use glam::Vec2;

use super::input::{Action, InputProvider, KeyState};
use crate::sim::{GamePhase, PickupKind, Snapshot};

/// How far above the craft a falling normal pickup counts as a threat
const THREAT_RANGE: f32 = 120.0;
/// Horizontal slack when lining up under a target
const ALIGN_DEADZONE: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    keys: KeyState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this tick's held actions from the latest snapshot
    pub fn update(&mut self, snapshot: &Snapshot) {
        self.keys.clear();

        if snapshot.phase != GamePhase::Active {
            self.keys.press(Action::Restart);
            return;
        }

        let craft = &snapshot.craft;
        let craft_center = craft.pos.x + craft.size.x / 2.0;

        // Dodge the nearest normal pickup about to land on the craft
        let threat = snapshot
            .pickups
            .iter()
            .filter(|p| p.kind == PickupKind::Normal)
            .filter(|p| {
                let bottom = p.pos.y + p.size.y;
                bottom <= craft.pos.y + craft.size.y
                    && bottom > craft.pos.y - THREAT_RANGE
                    && p.pos.x < craft.pos.x + craft.size.x
                    && p.pos.x + p.size.x > craft.pos.x
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        if let Some(threat) = threat {
            let threat_center = threat.pos.x + threat.size.x / 2.0;
            let room_left = threat.pos.x;
            let room_right = snapshot.field.x - (threat.pos.x + threat.size.x);
            let go_left = if (threat_center - craft_center).abs() < ALIGN_DEADZONE {
                room_left > room_right
            } else {
                threat_center > craft_center
            };
            self.keys
                .press(if go_left { Action::MoveLeft } else { Action::MoveRight });
            self.keys.press(Action::Fire);
            return;
        }

        // Bonus pickups worth touching
        let wanted = snapshot
            .pickups
            .iter()
            .filter(|p| match p.kind {
                PickupKind::Health => craft.health < 1.0,
                PickupKind::Upgrade => !craft.bullet_upgrade,
                PickupKind::Normal => false,
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        let target = match wanted {
            Some(bonus) => Some(bonus.pos.x + bonus.size.x / 2.0),
            None => {
                self.keys.press(Action::Fire);
                snapshot
                    .pickups
                    .iter()
                    .filter(|p| p.kind == PickupKind::Normal && p.pos.y < craft.pos.y)
                    .map(|p| p.pos + p.size / 2.0)
                    .min_by(|a, b| {
                        distance_x(*a, craft_center).total_cmp(&distance_x(*b, craft_center))
                    })
                    .map(|center| center.x)
            }
        };

        if let Some(target_x) = target {
            if target_x < craft_center - ALIGN_DEADZONE {
                self.keys.press(Action::MoveLeft);
            } else if target_x > craft_center + ALIGN_DEADZONE {
                self.keys.press(Action::MoveRight);
            }
        }
    }
}

fn distance_x(point: Vec2, x: f32) -> f32 {
    (point.x - x).abs()
}

impl InputProvider for Autopilot {
    fn is_pressed(&self, action: Action) -> bool {
        self.keys.is_pressed(action)
    }
}
