//! Headless harness
//!
//! Drives the core without a window: start a round, tick until it finishes,
//! log the winner and dump the final snapshot as JSON. A rendering shell
//! drives `GameCore` the same way, at a fixed 60 ticks per second.

use std::time::{SystemTime, UNIX_EPOCH};

use cube_duel::host::{Command, GameCore};
use cube_duel::settings::Viewport;
use cube_duel::sim::GamePhase;

/// Rounds normally end long before this; bail out if one never does
const MAX_TICKS: u64 = 2_000_000;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("cube-duel starting with seed {seed}");

    let mut core = GameCore::new(Viewport::default(), seed);
    core.handle(Command::Start);

    for _ in 0..MAX_TICKS {
        core.tick();
        if core.snapshot().phase == GamePhase::Finished {
            break;
        }
    }

    let snap = core.snapshot();
    match &snap.winner {
        Some(winner) => log::info!("finished after {} ticks, winner: {winner}", snap.ticks),
        None => log::warn!("no winner after {MAX_TICKS} ticks, giving up"),
    }
    match serde_json::to_string_pretty(&snap) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
