//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick only
//! - Seeded RNG only
//! - Fixed resolution order within a tick
//! - No rendering or platform dependencies

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::{aabb_overlap, square_circle_overlap};
pub use state::{Field, GamePhase, Pickup, PickupColor, RoundState, Square, SquareColor, Tint};
pub use tick::tick;
