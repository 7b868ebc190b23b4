// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burrows-Wheeler transform and its inverse.

use super::common::{naive_bwt, FIXTURES};
use induce::{render_bwt, suffix_array, Bwt};

#[test]
fn test_mississippi() {
    let bwt = Bwt::transform(b"mississippi");
    assert_eq!(bwt.bytes, b"ipssmpissii".to_vec());
    assert_eq!(bwt.primary, 5);
    assert_eq!(render_bwt(&bwt), b"ipssmpissii\n".to_vec());
}

#[test]
fn test_fixtures_match_rotation_sort() {
    for &text in FIXTURES {
        assert_eq!(
            Bwt::transform(text),
            naive_bwt(text),
            "for {:?}",
            String::from_utf8_lossy(text)
        );
    }
}

#[test]
fn test_fixtures_invert() {
    for &text in FIXTURES {
        assert_eq!(Bwt::transform(text).inverse(), text.to_vec());
    }
}

#[test]
fn test_from_existing_suffix_array() {
    let text = b"abracadabra";
    let sa = suffix_array(text);
    let bwt = Bwt::from_suffix_array(text, &sa);
    assert_eq!(bwt, Bwt::transform(text));
    assert_eq!(sa[bwt.primary], 0);
}

#[test]
fn test_output_is_a_permutation_of_input() {
    let text = b"the quick brown fox";
    let mut out = Bwt::transform(text).bytes;
    let mut sorted = text.to_vec();
    out.sort_unstable();
    sorted.sort_unstable();
    assert_eq!(out, sorted);
}
