// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and strategies.

#![allow(dead_code, unused_imports)]

use induce::{compress, validate_suffix_array};
use proptest::prelude::*;

// Re-export canonical oracles from induce::testing
pub use induce::testing::{naive_bwt, naive_sais, naive_suffix_array, naive_types, FIXTURES};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `sa` is a complete, sorted suffix array for `text`.
pub fn assert_suffix_array_well_formed(text: &[u8], sa: &[usize]) {
    if let Err(e) = validate_suffix_array(text, sa) {
        panic!(
            "suffix array for {:?} is invalid: {}",
            String::from_utf8_lossy(text),
            e
        );
    }
}

/// The integer text SA-IS runs on: compressed symbols plus sentinel.
pub fn encoded(text: &[u8]) -> (Vec<usize>, usize) {
    let (alphabet, symbols) = compress(text);
    (symbols, alphabet.size())
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Text over a tiny alphabet: long runs and many repeated LMS-substrings,
/// which is what drives the recursion deep.
pub fn repetitive_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ab".to_vec()), 0..max_len)
}

/// Text over a small readable alphabet.
pub fn dna_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"acgt".to_vec()), 0..max_len)
}

/// Arbitrary bytes, NUL and 0xFF included.
pub fn any_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max_len)
}

/// A short unit repeated many times, e.g. "abcabcabc".
pub fn periodic_text() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec(b'a'..=b'd', 1..4), 1usize..40).prop_map(|(unit, reps)| unit.repeat(reps))
}
