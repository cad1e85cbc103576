//! Shell-facing configuration
//!
//! The shell supplies the viewport; the core derives the field rectangle
//! from it once, at construction, and treats the result as immutable for the
//! round.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Field;

/// Viewport extent handed in by the shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_W,
            height: DEFAULT_VIEWPORT_H,
        }
    }
}

impl Viewport {
    /// Field placement: fixed margins on every side of the viewport
    pub fn field(&self) -> Field {
        Field::new(
            FIELD_MARGIN_SIDE,
            FIELD_MARGIN_TOP,
            self.width - 2.0 * FIELD_MARGIN_SIDE,
            self.height - FIELD_MARGIN_TOP - FIELD_MARGIN_BOTTOM,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_shrink_the_viewport_into_the_field() {
        let field = Viewport {
            width: 1024.0,
            height: 768.0,
        }
        .field();
        assert_eq!(field, Field::new(50.0, 120.0, 924.0, 608.0));
    }
}
