// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burrows-Wheeler transform properties.

use super::common::{any_bytes, naive_bwt, periodic_text};
use induce::{suffix_array, Bwt};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Reading the transform off the suffix array matches sorting rotations.
    #[test]
    fn prop_matches_rotation_sort(text in any_bytes(150)) {
        prop_assert_eq!(Bwt::transform(&text), naive_bwt(&text));
    }

    /// The inverse recovers the input exactly.
    #[test]
    fn prop_inverse_roundtrip(text in any_bytes(500)) {
        prop_assert_eq!(Bwt::transform(&text).inverse(), text);
    }

    #[test]
    fn prop_inverse_roundtrip_periodic(text in periodic_text()) {
        prop_assert_eq!(Bwt::transform(&text).inverse(), text);
    }

    /// Same multiset of bytes, and the primary row is where SA holds 0.
    #[test]
    fn prop_permutes_input(text in any_bytes(200)) {
        let sa = suffix_array(&text);
        let bwt = Bwt::from_suffix_array(&text, &sa);
        prop_assert_eq!(bwt.len(), text.len());
        prop_assert_eq!(sa[bwt.primary], 0);

        let mut out = bwt.bytes.clone();
        let mut input = text.clone();
        out.sort_unstable();
        input.sort_unstable();
        prop_assert_eq!(out, input);
    }
}
