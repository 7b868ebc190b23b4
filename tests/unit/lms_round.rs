// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The single LMS-substring induction round.

use super::common::{encoded, FIXTURES};
use induce::sais::lms_sort;
use induce::{lms_suffix_array, render_slots};

#[test]
fn test_two_bytes() {
    // "ab$": only the sentinel is LMS; one round already sorts everything
    assert_eq!(lms_suffix_array(b"ab"), vec![Some(2), Some(0), Some(1)]);
    assert_eq!(render_slots(&lms_suffix_array(b"ab")), "2 0 1\n");
}

#[test]
fn test_round_is_a_permutation() {
    for &text in FIXTURES {
        let slots = lms_suffix_array(text);
        assert_eq!(slots.len(), text.len() + 1);

        let mut filled: Vec<usize> = slots.iter().flatten().copied().collect();
        filled.sort_unstable();
        let expected: Vec<usize> = (0..=text.len()).collect();
        assert_eq!(filled, expected, "for {:?}", String::from_utf8_lossy(text));
    }
}

#[test]
fn test_sentinel_seeded_first() {
    for &text in FIXTURES {
        assert_eq!(lms_suffix_array(text)[0], Some(text.len()));
    }
}

#[test]
fn test_byte_and_integer_entry_points_agree() {
    let (text, k) = encoded(b"mississippi");
    assert_eq!(lms_sort(&text, k), lms_suffix_array(b"mississippi"));
}

#[test]
fn test_empty_input() {
    assert_eq!(lms_suffix_array(b""), vec![Some(0)]);
}
