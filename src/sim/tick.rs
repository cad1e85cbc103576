//! Logical tick
//!
//! `tick` advances one deterministic step with a fixed resolution order:
//! spawn, move, pickup collisions, square collision, terminal check. Work per
//! tick is bounded by the (at most one) pickup plus a constant per-square
//! cost; nothing here suspends or fails.

use glam::Vec2;
use rand::Rng;

use super::geom::{aabb_overlap, square_circle_overlap};
use super::state::{Field, GamePhase, Pickup, PickupColor, RoundState, Square, Tint};
use crate::consts::*;

/// Advance the round by one logical step
///
/// A no-op outside `Running`; a `Finished` round stays frozen until reset.
pub fn tick(state: &mut RoundState) {
    if state.phase != GamePhase::Running {
        return;
    }

    // The spawn condition is checked against the pre-increment counter, so
    // the first tick of a round puts a token on the field right away.
    if state.ticks.is_multiple_of(PICKUP_SPAWN_INTERVAL) {
        respawn_pickup(state);
    }
    state.ticks += 1;

    let field = state.field;
    for square in &mut state.squares {
        move_square(&field, square);
    }

    resolve_pickups(state);
    resolve_square_collision(state);
    check_terminal(state);
}

/// Replace whatever token is on the field with a single fresh one
fn respawn_pickup(state: &mut RoundState) {
    state.pickups.clear();

    let color = match state.rng.random_range(0..3) {
        0 => PickupColor::Red,
        1 => PickupColor::Green,
        _ => PickupColor::Gray,
    };
    let field = state.field;
    let r = PICKUP_RADIUS;
    let pos = Vec2::new(
        state.rng.random_range(field.x + r..field.right() - r),
        state.rng.random_range(field.y + r..field.bottom() - r),
    );
    log::debug!("spawned {color:?} pickup at ({:.1}, {:.1})", pos.x, pos.y);
    state.pickups.push(Pickup {
        pos,
        radius: r,
        color,
    });
}

/// Integrate one step and reflect off the field walls
///
/// Crossing a wall snaps the square flush and points the velocity component
/// inward via its absolute value, so a square past two opposite walls in one
/// step still ends up moving back into the field.
fn move_square(field: &Field, square: &mut Square) {
    square.pos += square.vel;

    if square.pos.x < field.x {
        square.pos.x = field.x;
        square.vel.x = square.vel.x.abs();
    }
    if square.pos.y < field.y {
        square.pos.y = field.y;
        square.vel.y = square.vel.y.abs();
    }
    if square.pos.x + square.size > field.right() {
        square.pos.x = field.right() - square.size;
        square.vel.x = -square.vel.x.abs();
    }
    if square.pos.y + square.size > field.bottom() {
        square.pos.y = field.bottom() - square.size;
        square.vel.y = -square.vel.y.abs();
    }
}

/// Consume every token touched by either square; the tint follows the last
/// consumed token in spawn order
fn resolve_pickups(state: &mut RoundState) {
    let RoundState {
        squares,
        pickups,
        tint,
        ..
    } = state;
    pickups.retain(|pickup| {
        let eaten = squares.iter().any(|sq| square_circle_overlap(sq, pickup));
        if eaten {
            *tint = Tint::from(pickup.color);
            log::debug!("consumed {:?} pickup, tint now {tint:?}", pickup.color);
        }
        !eaten
    });
}

/// Swap velocities and apply the tint-directed shrink rule
///
/// There is no positional separation: overlapping squares keep colliding on
/// following ticks, which is how rapid consecutive shrinks happen.
fn resolve_square_collision(state: &mut RoundState) {
    let [a, b] = &mut state.squares;
    if !aabb_overlap(a, b) {
        return;
    }

    std::mem::swap(&mut a.vel, &mut b.vel);

    let a_vulnerable = state.tint.leaves_vulnerable(a.color);
    let b_vulnerable = state.tint.leaves_vulnerable(b.color);
    match (a_vulnerable, b_vulnerable) {
        (true, false) => a.shrink(),
        (false, true) => b.shrink(),
        // Both vulnerable shrinks both. Neither vulnerable cannot happen
        // with two distinct colors, but would also shrink both.
        _ => {
            a.shrink();
            b.shrink();
        }
    }
}

/// End the round once either square is at or below zero size
fn check_terminal(state: &mut RoundState) {
    let [a, b] = &state.squares;
    let winner = match (a.is_dead(), b.is_dead()) {
        (true, true) => "Pair".to_owned(),
        (true, false) => b.name.clone(),
        (false, true) => a.name.clone(),
        (false, false) => return,
    };
    log::info!("round over after {} ticks, winner: {winner}", state.ticks);
    state.winner = Some(winner);
    state.phase = GamePhase::Finished;
}
