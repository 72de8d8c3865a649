//! Tower Stack entry point
//!
//! Headless demo: the auto-player runs a few games through the fixed-step
//! clock and the best towers are printed as JSON.
//!
//! Usage: `tower-stack [settings.json] [games]`

use std::path::Path;

use tower_stack::consts::SIM_DT;
use tower_stack::highscores::HighScoreEntry;
use tower_stack::platform::FixedStep;
use tower_stack::sim::{
    AutoPlayer, CameraDolly, GameEvent, GameStatus, StackState, TickInput, tick,
};
use tower_stack::{HighScores, Settings};

/// Give up on a demo game that somehow never ends
const MAX_GAME_TICKS: u64 = 1_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Tower Stack (headless demo) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };
    let games: u32 = match args.next() {
        Some(n) => n.parse()?,
        None => 5,
    };

    let mut scores = HighScores::new();
    for game in 0..games {
        let mut autoplay = settings.autoplay;
        autoplay.seed = autoplay.seed.wrapping_add(game as u64);
        let entry = run_game(&settings, AutoPlayer::new(autoplay));
        log::info!(
            "Game {}: {} layers in {} ticks (narrowest side {:.3})",
            game + 1,
            entry.score,
            entry.ticks,
            entry.narrowest
        );
        scores.add_score(entry);
    }

    if scores.is_empty() {
        log::warn!("No demo game placed a layer");
    }
    println!("{}", serde_json::to_string_pretty(&scores)?);
    Ok(())
}

/// Play one demo game to completion
fn run_game(settings: &Settings, mut player: AutoPlayer) -> HighScoreEntry {
    let mut state = StackState::new(settings.stack);
    let mut camera = CameraDolly::new(settings.camera, &state);
    let mut clock = FixedStep::default();

    while state.status() != GameStatus::Over && state.time_ticks < MAX_GAME_TICKS {
        // Pretend every frame lands exactly on the sim rate
        for _ in 0..clock.advance(SIM_DT) {
            let mut input = TickInput {
                idle_mode: true,
                ..Default::default()
            };
            player.apply(&state, &mut input);
            tick(&mut state, &input);

            for event in state.drain_events() {
                if let GameEvent::LayerTrimmed { index, overlap, .. } = event {
                    log::trace!("layer {index} trimmed to {overlap:.4}");
                }
            }
        }
        camera.update(&state);
    }

    if state.status() != GameStatus::Over {
        log::warn!("Demo game hit the tick limit");
    }
    log::debug!("Camera finished at height {:.2}", camera.position.y);

    let narrowest = state
        .layers()
        .iter()
        .map(|l| l.width.min(l.depth))
        .fold(f32::INFINITY, f32::min);
    HighScoreEntry {
        score: state.score(),
        ticks: state.time_ticks,
        narrowest,
    }
}
