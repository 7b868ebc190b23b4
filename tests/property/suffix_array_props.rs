// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural properties of finished suffix arrays.

use super::common::{any_bytes, assert_suffix_array_well_formed, dna_text, repetitive_text};
use induce::{suffix_array, suffix_array_with, LevelRecorder, SuffixArray};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Sorted, complete, sentinel first.
    #[test]
    fn prop_well_formed(text in any_bytes(400)) {
        let sa = suffix_array(&text);
        assert_suffix_array_well_formed(&text, &sa);
    }

    /// Construction is a pure function of its input.
    #[test]
    fn prop_deterministic(text in dna_text(200)) {
        prop_assert_eq!(suffix_array(&text), suffix_array(&text));
    }

    /// Ranks of adjacent positions agree with byte order: if text[i] < text[j]
    /// then suffix i sorts before suffix j.
    #[test]
    fn prop_first_byte_order(text in any_bytes(100)) {
        let sa = SuffixArray::new(&text, suffix_array(&text)).unwrap();
        let ranks = sa.ranks();
        for i in 0..text.len() {
            for j in 0..text.len() {
                if text[i] < text[j] {
                    prop_assert!(ranks[i] < ranks[j]);
                }
            }
        }
    }

    /// Each recursion level is at most half the size of its parent and the
    /// last level is solved directly.
    #[test]
    fn prop_levels_shrink(text in repetitive_text(300)) {
        let mut recorder = LevelRecorder::default();
        suffix_array_with(&text, &mut recorder);

        let levels = &recorder.levels;
        prop_assert!(!levels.is_empty());
        prop_assert_eq!(levels[0].len, text.len() + 1);
        for pair in levels.windows(2) {
            prop_assert!(!pair[0].base_case);
            prop_assert_eq!(pair[1].len, pair[0].lms_count);
            prop_assert!(2 * pair[1].len <= pair[0].len);
        }
        prop_assert!(levels[levels.len() - 1].base_case);
    }
}
