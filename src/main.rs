//! Fastbreak entry point
//!
//! Runs a headless autopilot session: the sim drives itself with synthesized
//! player intents and logs notable events. Useful for soaking the core and
//! for demoing balance changes without a renderer.
//!
//! Usage: `fastbreak [seed] [max_ticks]`, with `FASTBREAK_TUNING` optionally
//! pointing at a tuning JSON file.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use fastbreak::consts::TICK_RATE;
use fastbreak::sim::{GameState, Outcome, TickInput, tick};
use fastbreak::tuning::Tuning;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(entropy_seed);
    let max_ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60_000);

    let tuning = match std::env::var_os("FASTBREAK_TUNING") {
        Some(path) => match Tuning::load(std::path::Path::new(&path)) {
            Ok(tuning) => {
                log::info!("loaded tuning from {}", path.to_string_lossy());
                tuning
            }
            Err(err) => {
                log::error!("bad tuning file: {err}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let mut state = match GameState::new(tuning) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid tuning: {err}");
            std::process::exit(1);
        }
    };
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("starting session, seed {seed}");

    let input = TickInput {
        autopilot: true,
        ..TickInput::default()
    };
    let mut last_message = state.message.clone();
    let mut ticks = 0u64;
    while ticks < max_ticks && !state.game_over() {
        let snapshot = tick(&mut state, &input, &mut rng);
        if snapshot.hud.message != last_message {
            log::info!(
                "[{ticks:>6}] {} (score {}-{} kindness {} rage {})",
                snapshot.hud.message,
                snapshot.hud.score,
                snapshot.hud.opp_score,
                snapshot.hud.kindness,
                snapshot.hud.rage
            );
            last_message = snapshot.hud.message;
        }
        ticks += 1;
    }

    let verdict = match state.outcome {
        Some(Outcome::Won) => "won",
        Some(Outcome::Lost) => "lost",
        None => "undecided at tick cap",
    };
    println!(
        "session {verdict} after {ticks} ticks ({:.0}s of play): score {} opp {} kindness {} rage {}",
        ticks as f64 / TICK_RATE as f64,
        state.score,
        state.opp_score,
        state.kindness,
        state.rage
    );
}

/// Wall-clock seed for unseeded runs
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
