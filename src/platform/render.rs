//! Renderer contract
//!
//! Hosts draw from a `Snapshot`; the simulation holds no drawable resources.

use crate::sim::{GamePhase, Snapshot};

pub trait Renderer {
    /// Present one settled frame
    fn present(&mut self, frame: &Snapshot);
}

/// Headless renderer that logs the HUD every `interval` frames and on phase changes
#[derive(Debug)]
pub struct LogRenderer {
    interval: u64,
    frames: u64,
    last_phase: GamePhase,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_phase: GamePhase::Active,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &Snapshot) {
        self.frames += 1;

        if frame.phase != self.last_phase {
            match frame.phase {
                GamePhase::GameOver | GamePhase::Completed => {
                    let banner = if frame.phase == GamePhase::GameOver {
                        "Game Over"
                    } else {
                        "Game Completed!"
                    };
                    if frame.new_high_score {
                        log::info!("{banner} - New High Score: {}", frame.high_score);
                    } else {
                        log::info!("{banner} - High Score: {}", frame.high_score);
                    }
                }
                GamePhase::Active => log::info!("New run"),
            }
            self.last_phase = frame.phase;
        }

        if self.frames.is_multiple_of(self.interval) {
            log::info!(
                "Score: {} | High Score: {} | Level: {} | Health: {}% | {} projectiles, {} pickups{}",
                frame.score,
                frame.high_score,
                frame.level,
                frame.health_percent(),
                frame.projectiles.len(),
                frame.pickups.len(),
                if frame.shaking { " | shaking" } else { "" }
            );
        }
    }
}
