//! Property-based tests for the card flow
//!
//! Uses proptest to verify the derived-presentation invariants over the
//! whole decline-count range.

use proptest::prelude::*;
use valentine_core::{CardFlow, Screen, DECLINE_PHRASES};

/// Drive a fresh flow through `count` declines.
fn declined(count: u32) -> CardFlow {
    let mut flow = CardFlow::without_bursts();
    for _ in 0..count {
        flow.decline();
    }
    flow
}

proptest! {
    /// Declining n times always counts exactly n and never leaves Asking.
    #[test]
    fn decline_count_tracks_clicks(count in 0u32..500) {
        let flow = declined(count);
        prop_assert_eq!(flow.decline_count(), count);
        prop_assert_eq!(flow.screen(), Screen::Asking);
    }

    /// The decline label is always the phrase at min(count, last index).
    #[test]
    fn decline_label_is_clamped_phrase(count in 0u32..500) {
        let flow = declined(count);
        let expected = DECLINE_PHRASES[(count as usize).min(DECLINE_PHRASES.len() - 1)];
        prop_assert_eq!(flow.decline_label(), expected);
    }

    /// Accept size follows min(count*20+16, 100) and stays in bounds.
    #[test]
    fn accept_size_formula_and_bounds(count in 0u32..500) {
        let flow = declined(count);
        let expected = (count * 20 + 16).min(100);
        prop_assert_eq!(flow.accept_size(), expected);
        prop_assert!(flow.accept_size() >= 16);
        prop_assert!(flow.accept_size() <= 100);
    }

    /// Accept size never shrinks as declines accumulate.
    #[test]
    fn accept_size_is_monotone(a in 0u32..300, b in 0u32..300) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(declined(low).accept_size() <= declined(high).accept_size());
    }

    /// The glyph tracks the button at a fixed 0.8 ratio.
    #[test]
    fn glyph_size_tracks_button(count in 0u32..500) {
        let flow = declined(count);
        prop_assert_eq!(flow.accept_glyph_size(), flow.accept_size() as f32 * 0.8);
    }
}
