//! Property-based tests for the hexagram algebra.
//!
//! Every property is checked over arbitrary 6-bit line vectors and, where
//! draws matter, arbitrary draw values.

use iching::lines::{flip_lines, Lines, NuclearWindow};
use iching::{Hexagram, Trigram};
use proptest::prelude::*;

fn hexagram() -> impl Strategy<Value = Hexagram> {
    (0u8..64).prop_map(|v| Hexagram::from_lines(Lines::from_value(v)))
}

fn draws() -> impl Strategy<Value = [u8; 6]> {
    prop::array::uniform6(1u8..=8)
}

fn distance(a: &Hexagram, b: &Hexagram) -> u32 {
    (a.decimal_value() ^ b.decimal_value()).count_ones()
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    /// Lookup by trigram pair and by number agree
    #[test]
    fn prop_pair_and_number_agree(lower in 1u8..=8, upper in 1u8..=8) {
        let h = Hexagram::from_indices(lower, upper).unwrap();
        prop_assert_eq!(Hexagram::from_number(h.number()).unwrap(), h);
        prop_assert_eq!(h.lower(), Trigram::new(lower).unwrap());
        prop_assert_eq!(h.upper(), Trigram::new(upper).unwrap());
    }

    /// Lines round-trip through the binary string
    #[test]
    fn prop_binary_roundtrip(h in hexagram()) {
        prop_assert_eq!(Hexagram::from_binary(&h.binary()).unwrap(), h);
        prop_assert_eq!(h.binary().len(), 6);
    }

    /// Trigram opposite and inverse are involutions
    #[test]
    fn prop_trigram_involutions(index in 1u8..=8) {
        let t = Trigram::new(index).unwrap();
        prop_assert_eq!(t.opposite().opposite(), t);
        prop_assert_eq!(t.inverse().inverse(), t);
    }
}

// =============================================================================
// Moving Lines
// =============================================================================

proptest! {
    /// The target differs from the source exactly at the moving lines
    #[test]
    fn prop_target_flips_moving_lines(h in hexagram(), d in draws()) {
        let cast = h.with_draws(&d).unwrap();
        let moving = cast.moving_lines().unwrap();
        let before = cast.lines().bits();
        let after = cast.target().unwrap().lines().bits();
        for i in 0..6 {
            prop_assert_eq!(before[i] != after[i], moving[i], "line {}", i + 1);
        }
    }

    /// Draws never change identity
    #[test]
    fn prop_draws_keep_identity(h in hexagram(), d in draws()) {
        let cast = h.with_draws(&d).unwrap();
        prop_assert_eq!(cast.number(), h.number());
        prop_assert_eq!(cast.without_draws(), h);
    }

    /// Out-of-range draw values are rejected
    #[test]
    fn prop_bad_draw_rejected(h in hexagram(), line in 0usize..6, bad in 9u8..) {
        let mut d = [7u8; 6];
        d[line] = bad;
        prop_assert!(h.with_draws(&d).is_err());
    }
}

// =============================================================================
// Derivations
// =============================================================================

proptest! {
    /// opposite and inverse are commuting involutions
    #[test]
    fn prop_opposite_inverse(h in hexagram()) {
        prop_assert_eq!(h.opposite().opposite(), h);
        prop_assert_eq!(h.inverse().inverse(), h);
        prop_assert_eq!(h.opposite().inverse(), h.inverse().opposite());
        prop_assert_eq!(distance(&h, &h.opposite()), 6);
    }

    /// Six rotations return to the start
    #[test]
    fn prop_rotate_order_six(h in hexagram()) {
        let mut r = h;
        for _ in 0..6 {
            r = r.rotate();
        }
        prop_assert_eq!(r, h);
        prop_assert_eq!(6 % h.cycle().len(), 0);
    }

    /// Nuclear hexagrams ignore the outer lines for windows that skip them
    #[test]
    fn prop_nuclear_ignores_outer_lines(h in hexagram()) {
        let outer = Hexagram::from_lines(flip_lines(h.lines(), &[1, 6]).unwrap());
        prop_assert_eq!(outer.nuclear(), h.nuclear());
        prop_assert_eq!(outer.nuclear_by(NuclearWindow::First), h.nuclear());
    }

    /// Every petal is one line away
    #[test]
    fn prop_flower_single_line(h in hexagram()) {
        let flower = h.flower();
        prop_assert_eq!(flower.len(), 6);
        for petal in flower.antecedents.iter().chain(&flower.consequents) {
            prop_assert_eq!(distance(&h, petal), 1);
        }
    }

    /// Consecutive story steps differ by one line
    #[test]
    fn prop_story_steps(h in hexagram()) {
        let story = h.story();
        for pair in story.windows(2) {
            prop_assert_eq!(distance(&pair[0], &pair[1]), 1);
        }
        prop_assert_eq!(story[6], h.opposite());
    }
}
