//! Host adapter
//!
//! The command surface a shell drives the core with, and the read-only
//! snapshots it renders from. The shell owns the window, the menus and the
//! ticker; the core owns the round. Nothing here can fail: commands that
//! make no sense in the current phase are dropped.

use serde::Serialize;

use crate::settings::Viewport;
use crate::sim::{self, Field, GamePhase, Pickup, RoundState, Square, Tint};

/// Commands a shell may issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the menu and start a fresh round
    Start,
    /// Reinitialize the round mid-play or after a finish
    Reset,
    /// Back to the menu; ticking stops
    ToMenu,
    /// Ask the shell to terminate the process
    Quit,
}

/// Read-only copy of round state, safe to hand to a render thread
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub field: Field,
    pub phase: GamePhase,
    pub ticks: u64,
    pub squares: [Square; 2],
    pub pickups: Vec<Pickup>,
    pub tint: Tint,
    pub winner: Option<String>,
}

/// Owns the round state, accepts commands, hands out snapshots
pub struct GameCore {
    state: RoundState,
    exit_requested: bool,
}

impl GameCore {
    /// Build a core for the given viewport; `seed` drives all randomness
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self {
            state: RoundState::new(viewport.field(), seed),
            exit_requested: false,
        }
    }

    /// Apply a shell command; out-of-phase commands are no-ops
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start if self.state.phase == GamePhase::Idle => {
                self.state.reset();
                self.state.phase = GamePhase::Running;
                log::info!("round started");
            }
            Command::Reset if self.state.phase != GamePhase::Idle => {
                self.state.reset();
                self.state.phase = GamePhase::Running;
                log::info!("round reset");
            }
            Command::ToMenu => {
                self.state.phase = GamePhase::Idle;
            }
            Command::Quit => {
                self.exit_requested = true;
            }
            _ => {}
        }
    }

    /// Advance one logical step; a no-op outside `Running`
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
    }

    /// Copy out everything a renderer needs, taken at a tick boundary
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.state.field,
            phase: self.state.phase,
            ticks: self.state.ticks,
            squares: self.state.squares.clone(),
            pickups: self.state.pickups.clone(),
            tint: self.state.tint,
            winner: self.state.winner.clone(),
        }
    }

    /// Set once `Quit` has been issued; acting on it is the shell's call
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
