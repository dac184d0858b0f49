//! Fixed-step simulation tick
//!
//! Phase order within an active tick:
//! completion check, shake countdown, movement, fire, entity update,
//! collisions, off-field cleanup, spawning, progression, game-over check.
//!
//! The level-up nudge runs after cleanup, so an entity can sit up to
//! `MAX_LEVEL` units past an edge until the next tick's cleanup drops it.

use rand::Rng;

use super::collision::{remove_off_field, resolve_collisions};
use super::progression::check_progression;
use super::spawn::{SpawnRates, spawn_pickups};
use super::state::{GameEvent, GamePhase, PlayerCraft};
use crate::consts::COMPLETION_SCORE;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire this tick (no cooldown; held fire spawns every tick)
    pub fire: bool,
    /// Start a new run (only honored once the run has ended)
    pub restart: bool,
}

/// Advance the craft by one tick and return what happened
pub fn tick(
    craft: &mut PlayerCraft,
    input: &TickInput,
    rates: &SpawnRates,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Ended runs only listen for restart
    if craft.is_terminal() {
        if input.restart {
            craft.restart();
            events.push(GameEvent::Restarted);
            log::info!("Restarted (high score {})", craft.high_score);
        }
        return events;
    }

    if craft.score >= COMPLETION_SCORE {
        craft.phase = GamePhase::Completed;
        let new_high_score = craft.settle_high_score();
        events.push(GameEvent::GameCompleted {
            score: craft.score,
            new_high_score,
        });
        log::info!("Game completed with score {}", craft.score);
        return events;
    }

    craft.ticks += 1;
    craft.shake_timer = craft.shake_timer.saturating_sub(1);

    craft.apply_movement(input.up, input.down, input.left, input.right);
    if input.fire {
        craft.fire();
    }

    for projectile in &mut craft.projectiles {
        projectile.advance();
    }
    let level = craft.level;
    for pickup in &mut craft.pickups {
        pickup.advance(level);
    }

    resolve_collisions(craft, &mut events);
    remove_off_field(craft);
    spawn_pickups(craft, rates, rng);

    if let Some(level) = check_progression(craft) {
        events.push(GameEvent::LevelUp { level });
    }

    if craft.health <= 0.0 {
        craft.phase = GamePhase::GameOver;
    }
    if craft.is_game_over() {
        let new_high_score = craft.settle_high_score();
        events.push(GameEvent::GameOver {
            score: craft.score,
            new_high_score,
        });
        log::info!("Game over with score {}", craft.score);
    }

    events
}
