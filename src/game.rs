//! Game loop
//!
//! Owns the craft, the RNG and the session leaderboard. Hosts call `step` (or
//! `frame`) once per tick with their input and get a settled snapshot back.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::ConfigError;
use crate::highscores::{HighScoreEntry, HighScores, RunOutcome};
use crate::platform::{InputProvider, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, PlayerCraft, Snapshot, SpawnRates, TickInput, tick};

pub struct Game {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    rates: SpawnRates,
    craft: PlayerCraft,
    records: HighScores,
}

impl Game {
    /// Validate settings and start the first run
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            craft: PlayerCraft::new(settings.geometry),
            rng: Pcg32::seed_from_u64(seed),
            rates: SpawnRates::default(),
            seed,
            settings,
            records: HighScores::new(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read-only access to the simulation state
    pub fn craft(&self) -> &PlayerCraft {
        &self.craft
    }

    /// Finished runs of this session
    pub fn records(&self) -> &HighScores {
        &self.records
    }

    /// Poll input and advance one tick
    pub fn step(&mut self, input: &impl InputProvider) -> Vec<GameEvent> {
        self.step_with(&TickInput::poll(input))
    }

    /// Advance one tick with already-sampled input
    pub fn step_with(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = tick(&mut self.craft, input, &self.rates, &mut self.rng);
        for event in &events {
            let outcome = match event {
                GameEvent::GameOver { .. } => RunOutcome::GameOver,
                GameEvent::GameCompleted { .. } => RunOutcome::Completed,
                _ => continue,
            };
            let entry = HighScoreEntry {
                score: self.craft.score,
                level: self.craft.level,
                outcome,
                ticks: self.craft.ticks,
            };
            if let Some(rank) = self.records.add_score(entry) {
                log::info!("Run ranked #{} this session", rank);
            }
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.craft, self.settings.effective_screen_shake())
    }

    /// One host frame: step, then present the settled state
    pub fn frame(
        &mut self,
        input: &impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> Vec<GameEvent> {
        let events = self.step(input);
        renderer.present(&self.snapshot());
        events
    }
}
