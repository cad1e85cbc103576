//! Geometry primitives
//!
//! The whole game runs on two predicates: square/square overlap via
//! separating axes, and square/circle overlap via center clamping.

use glam::Vec2;

use super::state::{Pickup, Square};

/// Separating-axis overlap test for two axis-aligned squares
///
/// Strict comparisons on all four axes; the test is symmetric in its
/// arguments.
#[inline]
pub fn aabb_overlap(a: &Square, b: &Square) -> bool {
    !(a.pos.x + a.size < b.pos.x
        || b.pos.x + b.size < a.pos.x
        || a.pos.y + a.size < b.pos.y
        || b.pos.y + b.size < a.pos.y)
}

/// Whether a square and a circular pickup overlap
///
/// Clamps the circle center onto the square to find the closest point, then
/// compares squared distances. Contact at exactly one radius counts.
#[inline]
pub fn square_circle_overlap(square: &Square, pickup: &Pickup) -> bool {
    let closest = pickup
        .pos
        .clamp(square.pos, square.pos + Vec2::splat(square.size));
    closest.distance_squared(pickup.pos) <= pickup.radius * pickup.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{PickupColor, SquareColor};

    fn square(x: f32, y: f32, size: f32) -> Square {
        Square {
            pos: Vec2::new(x, y),
            size,
            init_size: size,
            vel: Vec2::ZERO,
            color: SquareColor::Red,
            name: "Red".to_owned(),
        }
    }

    fn pickup(x: f32, y: f32) -> Pickup {
        Pickup {
            pos: Vec2::new(x, y),
            radius: 10.0,
            color: PickupColor::Gray,
        }
    }

    #[test]
    fn overlapping_squares_are_detected() {
        assert!(aabb_overlap(
            &square(0.0, 0.0, 60.0),
            &square(30.0, 30.0, 60.0)
        ));
    }

    #[test]
    fn separated_squares_are_not() {
        assert!(!aabb_overlap(
            &square(0.0, 0.0, 60.0),
            &square(100.0, 0.0, 60.0)
        ));
        assert!(!aabb_overlap(
            &square(0.0, 0.0, 60.0),
            &square(0.0, 100.0, 60.0)
        ));
    }

    #[test]
    fn circle_contact_on_an_edge_is_inclusive() {
        // Center one radius to the right of the square's edge: exact contact.
        assert!(square_circle_overlap(&square(0.0, 0.0, 60.0), &pickup(70.0, 30.0)));
        assert!(!square_circle_overlap(&square(0.0, 0.0, 60.0), &pickup(70.5, 30.0)));
    }

    #[test]
    fn circle_near_a_corner_uses_true_distance() {
        // 8 past the corner on both axes: sqrt(128) > 10 even though each
        // axis gap alone is under the radius.
        assert!(!square_circle_overlap(&square(0.0, 0.0, 60.0), &pickup(68.0, 68.0)));
        // 7 past on both axes: sqrt(98) < 10.
        assert!(square_circle_overlap(&square(0.0, 0.0, 60.0), &pickup(67.0, 67.0)));
    }

    #[test]
    fn circle_center_inside_the_square_overlaps() {
        assert!(square_circle_overlap(&square(0.0, 0.0, 60.0), &pickup(30.0, 30.0)));
    }
}
