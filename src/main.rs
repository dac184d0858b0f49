//! Spitfire headless entry point
//!
//! Runs the autopilot against the simulation with a logging renderer:
//!
//! ```text
//! spitfire [settings.json] [--ticks N]
//! ```
//!
//! and prints the final frame and session leaderboard as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spitfire::platform::{Autopilot, LogRenderer};
use spitfire::{Game, Settings};

/// One minute of play at 60 Hz
const DEFAULT_TICKS: u64 = 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "spitfire")]
#[command(about = "Headless Spitfire run driven by the demo autopilot")]
struct Cli {
    /// Settings JSON file (defaults when omitted)
    settings: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::info!("Spitfire (headless) starting...");

    let settings = match &cli.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Rejected settings {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Effective settings: {:?}", game.settings());

    let mut pilot = Autopilot::new();
    let mut renderer = LogRenderer::new(600);
    for _ in 0..cli.ticks {
        pilot.update(&game.snapshot());
        game.frame(&pilot, &mut renderer);
    }
    log::info!("Ran {} ticks with seed {}", renderer.frames(), game.seed());

    let report = serde_json::json!({
        "seed": game.seed(),
        "final_frame": game.snapshot(),
        "records": game.records(),
    });
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize report: {e}");
            ExitCode::FAILURE
        }
    }
}
