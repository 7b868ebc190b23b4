// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential tests: SA-IS against sorting every suffix.

use super::common::{any_bytes, dna_text, naive_suffix_array, periodic_text, repetitive_text};
use induce::suffix_array;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Two-letter texts recurse the deepest.
    #[test]
    fn diff_repetitive(text in repetitive_text(200)) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }

    #[test]
    fn diff_dna(text in dna_text(300)) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }

    #[test]
    fn diff_any_bytes(text in any_bytes(300)) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn diff_periodic(text in periodic_text()) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }
}

/// Every string over {a, b} up to length 12.
#[test]
fn exhaustive_binary_strings() {
    for len in 0..=12u32 {
        for bits in 0..(1u32 << len) {
            let text: Vec<u8> = (0..len)
                .map(|k| if (bits >> k) & 1 == 1 { b'b' } else { b'a' })
                .collect();
            assert_eq!(
                suffix_array(&text),
                naive_suffix_array(&text),
                "mismatch for {:?}",
                String::from_utf8_lossy(&text)
            );
        }
    }
}
