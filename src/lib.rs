//! Cube Duel - two autonomous squares dueling on a tinted field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, pickups, collisions, round state)
//! - `host`: Command surface and read-only snapshots for a rendering shell
//! - `settings`: Shell-facing viewport configuration

pub mod host;
pub mod settings;
pub mod sim;

pub use host::{Command, GameCore, Snapshot};
pub use settings::Viewport;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal tick rate the shell is expected to drive the core at.
    /// The core itself is rate-agnostic; only the spawn interval below is
    /// measured in ticks.
    pub const TICK_RATE: u32 = 60;

    /// A fresh pickup replaces the standing one every this many ticks
    pub const PICKUP_SPAWN_INTERVAL: u64 = 360;
    /// Pickup token radius
    pub const PICKUP_RADIUS: f32 = 10.0;

    /// Side length of both squares at round start
    pub const SQUARE_START_SIZE: f32 = 60.0;
    /// Fraction of the initial side length lost per vulnerable collision
    pub const SHRINK_RATIO: f32 = 0.2;

    /// Field margins inside the viewport
    pub const FIELD_MARGIN_SIDE: f32 = 50.0;
    pub const FIELD_MARGIN_TOP: f32 = 120.0;
    pub const FIELD_MARGIN_BOTTOM: f32 = 40.0;

    /// Default viewport when the shell supplies none
    pub const DEFAULT_VIEWPORT_W: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_H: f32 = 600.0;

    /// Red square spawn offset from the field's top-left corner
    pub const RED_START_OFFSET: Vec2 = Vec2::new(80.0, 60.0);
    /// Green square spawn offset from the field's bottom-right corner
    pub const GREEN_START_OFFSET: Vec2 = Vec2::new(140.0, 140.0);
    /// Launch velocities, per tick
    pub const RED_START_VEL: Vec2 = Vec2::new(3.2, 2.6);
    pub const GREEN_START_VEL: Vec2 = Vec2::new(-3.0, -2.8);
}
