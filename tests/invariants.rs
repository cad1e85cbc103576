//! Whole-round invariant checks
//!
//! Drives full rounds through the host adapter and verifies, at every tick
//! boundary, the state the controller promises.

use cube_duel::consts::{PICKUP_RADIUS, SHRINK_RATIO};
use cube_duel::host::{Command, GameCore, Snapshot};
use cube_duel::settings::Viewport;
use cube_duel::sim::GamePhase;
use proptest::prelude::*;

fn assert_round_invariants(snap: &Snapshot) {
    let field = snap.field;
    for sq in &snap.squares {
        // Containment, written exactly as the wall code evaluates it.
        assert!(sq.pos.x >= field.x, "{} past the left wall", sq.pos.x);
        assert!(sq.pos.y >= field.y, "{} past the top wall", sq.pos.y);
        assert!(sq.pos.x + sq.size <= field.right());
        assert!(sq.pos.y + sq.size <= field.bottom());

        // Size never grows and sits on the shrink lattice.
        assert!(sq.size <= sq.init_size);
        let step = sq.init_size * SHRINK_RATIO;
        assert!(sq.size >= -step);
        let steps = (sq.init_size - sq.size) / step;
        assert!(
            (steps - steps.round()).abs() < 1e-4,
            "off-lattice size {}",
            sq.size
        );
    }

    assert!(snap.pickups.len() <= 1);
    for pickup in &snap.pickups {
        assert!(pickup.pos.x >= field.x + PICKUP_RADIUS);
        assert!(pickup.pos.x <= field.right() - PICKUP_RADIUS);
        assert!(pickup.pos.y >= field.y + PICKUP_RADIUS);
        assert!(pickup.pos.y <= field.bottom() - PICKUP_RADIUS);
    }

    match snap.phase {
        GamePhase::Finished => assert!(snap.winner.is_some()),
        GamePhase::Running => assert!(snap.winner.is_none()),
        GamePhase::Idle => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn invariants_hold_at_every_tick_boundary(
        seed: u64,
        width in 400u32..1600,
        height in 400u32..1200,
    ) {
        let viewport = Viewport {
            width: width as f32,
            height: height as f32,
        };
        let mut core = GameCore::new(viewport, seed);
        core.handle(Command::Start);
        for _ in 0..1500 {
            core.tick();
            let snap = core.snapshot();
            assert_round_invariants(&snap);
            if snap.phase == GamePhase::Finished {
                break;
            }
        }
    }

    #[test]
    fn reset_mid_round_starts_clean(seed: u64) {
        let mut core = GameCore::new(Viewport::default(), seed);
        core.handle(Command::Start);
        for _ in 0..400 {
            core.tick();
        }
        core.handle(Command::Reset);
        let snap = core.snapshot();
        prop_assert_eq!(snap.ticks, 0);
        prop_assert!(snap.pickups.is_empty());
        assert_round_invariants(&snap);
    }
}
