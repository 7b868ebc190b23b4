// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix classification and bucket layout.

use super::common::{any_bytes, encoded, naive_types, repetitive_text};
use induce::sais::buckets::Buckets;
use induce::sais::classify::SuffixTypes;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The one-pass scan agrees with comparing each suffix to the next.
    #[test]
    fn prop_types_match_suffix_comparison(text in repetitive_text(120)) {
        let (symbols, _) = encoded(&text);
        let types = SuffixTypes::classify(&symbols);
        let expected = naive_types(&symbols);
        for (i, &s) in expected.iter().enumerate() {
            prop_assert_eq!(types.is_s(i), s, "position {}", i);
        }
    }

    /// LMS positions are never adjacent, never 0, and the sentinel is one.
    #[test]
    fn prop_lms_positions(text in any_bytes(200)) {
        let (symbols, _) = encoded(&text);
        let types = SuffixTypes::classify(&symbols);
        let lms: Vec<usize> = types.lms_positions().collect();

        if symbols.len() > 1 {
            prop_assert_eq!(lms.last().copied(), Some(symbols.len() - 1));
        }
        prop_assert!(!lms.contains(&0));
        for pair in lms.windows(2) {
            prop_assert!(pair[1] > pair[0] + 1);
        }
    }

    /// Buckets tile the array in symbol order with one slot per occurrence.
    #[test]
    fn prop_buckets_tile_the_array(text in any_bytes(200)) {
        let (symbols, k) = encoded(&text);
        let buckets = Buckets::new(&symbols, k);

        let mut next = 0;
        for c in 0..k {
            let bucket = buckets.bucket(c);
            prop_assert_eq!(bucket.start, next);
            prop_assert_eq!(bucket.len(), symbols.iter().filter(|&&s| s == c).count());
            next = bucket.end;
        }
        prop_assert_eq!(next, symbols.len());
        prop_assert_eq!(buckets.total(), symbols.len());
    }

    /// Seeding during classification places exactly the LMS positions, each
    /// in its own bucket.
    #[test]
    fn prop_seeding_fills_lms_only(text in repetitive_text(150)) {
        let (symbols, k) = encoded(&text);
        let mut buckets = Buckets::new(&symbols, k);
        buckets.reset_tails();
        let mut sa = vec![None; symbols.len()];
        let types = SuffixTypes::classify_and_seed(&symbols, &mut sa, &mut buckets);

        let mut seeded: Vec<usize> = sa.iter().flatten().copied().collect();
        seeded.sort_unstable();
        let lms: Vec<usize> = types.lms_positions().collect();
        prop_assert_eq!(seeded, lms);

        for (slot, p) in sa.iter().enumerate() {
            if let Some(p) = p {
                prop_assert!(buckets.bucket(symbols[*p]).contains(&slot));
            }
        }
    }
}
