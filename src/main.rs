//! Gapflight entry point
//!
//! Runs one headless game in simulated time with an autopilot at the
//! controls, logging surface updates, then prints the final snapshot.
//!
//! Usage: `gapflight [settings.json]` (verbosity via `RUST_LOG`)

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use gapflight::consts::*;
use gapflight::platform::InputEvent;
use gapflight::renderer::RenderSurface;
use gapflight::sim::{GameLoop, ObstaclePair, RunState};
use gapflight::Settings;

/// Host frame length (~60 Hz)
const FRAME: Duration = Duration::from_millis(16);
/// Simulated time limit for the demo run
const MAX_RUN: Duration = Duration::from_secs(300);

/// Render surface that writes every update to the log
struct LogSurface;

impl RenderSurface for LogSurface {
    fn obstacle_created(&mut self, pair: &ObstaclePair) {
        log::debug!(
            "+ pair {} at {:.1}% (gap {:.1}%..{:.1}%)",
            pair.id,
            pair.offset,
            pair.top.height,
            FIELD_MAX - pair.bottom.height
        );
    }

    fn obstacle_moved(&mut self, id: u32, offset: f32) {
        log::trace!("  pair {} left: {}%", id, offset);
    }

    fn obstacle_removed(&mut self, id: u32) {
        log::debug!("- pair {}", id);
    }

    fn flyer_moved(&mut self, position: f32) {
        log::trace!("  flyer top: {}%", position);
    }

    fn score_changed(&mut self, score: u32) {
        log::info!("Score: {}", score);
    }
}

/// Flap once the flyer is falling below the next gap's centre
fn autopilot(game: &GameLoop<LogSurface>) -> bool {
    let flyer = game.flyer();
    let Some(flight) = flyer.flight() else {
        return false;
    };
    // Past the apex of the current trajectory
    let falling = flight.elapsed >= -FLIGHT_CURVE_B / (2.0 * FLIGHT_CURVE_A);

    let target = game
        .obstacles()
        .iter()
        .find(|pair| pair.offset + BARRIER_WIDTH >= FLYER_LEFT)
        .map(ObstaclePair::gap_center)
        .unwrap_or(FLYER_START);

    falling && flyer.position() + FLYER_HEIGHT / 2.0 > target
}

fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = GameLoop::with_settings(settings, LogSurface)?;
    game.start()?;

    while game.run_state() == RunState::Running && game.elapsed() < MAX_RUN {
        if autopilot(&game) {
            game.handle_input(InputEvent::Trigger);
        }
        game.advance(FRAME);
    }
    game.stop();

    log::info!(
        "Final score {} after {:.1}s ({:?})",
        game.score(),
        game.elapsed().as_secs_f32(),
        game.stop_reason()
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Gapflight (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Ok(Settings::default()),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
