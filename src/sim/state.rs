//! Entity model and round state
//!
//! Everything the round controller owns lives here: the field rectangle,
//! both squares, the pickup list, the tint and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The bounded rectangular play area, immutable for a round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Field {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Color of a playing square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareColor {
    Red,
    Green,
}

/// Color of a pickup token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupColor {
    Red,
    Green,
    Gray,
}

/// Field tint, set by pickup consumption
///
/// Carried as an explicit state tag; mapping tints to display colors is the
/// shell's concern. A square whose color the tint favors cannot shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Neutral,
    FavorsRed,
    FavorsGreen,
}

impl Tint {
    /// Whether a square of the given color shrinks on an inter-square
    /// collision under this tint
    pub fn leaves_vulnerable(self, color: SquareColor) -> bool {
        match self {
            Tint::Neutral => true,
            Tint::FavorsRed => color != SquareColor::Red,
            Tint::FavorsGreen => color != SquareColor::Green,
        }
    }
}

impl From<PickupColor> for Tint {
    fn from(color: PickupColor) -> Self {
        match color {
            PickupColor::Red => Tint::FavorsRed,
            PickupColor::Green => Tint::FavorsGreen,
            PickupColor::Gray => Tint::Neutral,
        }
    }
}

/// One of the two autonomous squares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Square {
    /// Top-left corner
    pub pos: Vec2,
    /// Current side length; shrinks in discrete steps and may go negative
    pub size: f32,
    /// Side length at round start, constant for the round
    pub init_size: f32,
    /// Velocity in field units per tick
    pub vel: Vec2,
    pub color: SquareColor,
    /// Display name, also used as the winner label
    pub name: String,
}

impl Square {
    pub fn new(pos: Vec2, vel: Vec2, color: SquareColor, name: &str) -> Self {
        Self {
            pos,
            size: SQUARE_START_SIZE,
            init_size: SQUARE_START_SIZE,
            vel,
            color,
            name: name.to_owned(),
        }
    }

    /// One discrete shrink step
    pub fn shrink(&mut self) {
        self.size -= self.init_size * SHRINK_RATIO;
    }

    /// A square at zero size or below is out of the round
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.size <= 0.0
    }
}

/// A circular token; touching it sets the field tint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub color: PickupColor,
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting in the menu; ticks are no-ops
    #[default]
    Idle,
    /// Active play
    Running,
    /// A square hit zero size; the winner label is set
    Finished,
}

/// Complete round state, exclusively owned by the controller
#[derive(Debug, Clone)]
pub struct RoundState {
    pub field: Field,
    pub phase: GamePhase,
    /// Tick counter, reset each round
    pub ticks: u64,
    pub squares: [Square; 2],
    /// At most one pickup exists at any time
    pub pickups: Vec<Pickup>,
    pub tint: Tint,
    /// A square's display name, or "Pair" on a double knockout
    pub winner: Option<String>,
    /// Seeded generator driving pickup colors and placement
    pub rng: Pcg32,
}

impl RoundState {
    /// Create an idle round; `seed` is the only entropy the state ever sees
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            field,
            phase: GamePhase::Idle,
            ticks: 0,
            squares: Self::initial_squares(field),
            pickups: Vec::new(),
            tint: Tint::Neutral,
            winner: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reinitialize the round. The RNG keeps rolling across resets so
    /// successive rounds see different pickups.
    pub fn reset(&mut self) {
        self.squares = Self::initial_squares(self.field);
        self.pickups.clear();
        self.tint = Tint::Neutral;
        self.ticks = 0;
        self.winner = None;
    }

    fn initial_squares(field: Field) -> [Square; 2] {
        [
            Square::new(
                Vec2::new(field.x, field.y) + RED_START_OFFSET,
                RED_START_VEL,
                SquareColor::Red,
                "Red",
            ),
            Square::new(
                Vec2::new(field.right(), field.bottom()) - GREEN_START_OFFSET,
                GREEN_START_VEL,
                SquareColor::Green,
                "Green",
            ),
        ]
    }
}
