// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the integer-alphabet entry point.
//!
//! Recursion levels run on integer texts with sparse alphabets. This target
//! feeds such texts directly, with unused symbols and oversized alphabets.

#![no_main]

use arbitrary::Arbitrary;
use induce::sais;
use induce::testing::naive_sais;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct IntegerText {
    /// Symbols before the sentinel; 0 is remapped to keep the sentinel unique.
    symbols: Vec<u16>,
    /// Extra empty buckets above the largest symbol.
    slack: u8,
}

fuzz_target!(|input: IntegerText| {
    if input.symbols.len() > 2048 {
        return;
    }

    let mut text: Vec<usize> = input
        .symbols
        .iter()
        .map(|&s| usize::from(s).max(1))
        .collect();
    text.push(0);
    let alphabet_size = text.iter().copied().max().unwrap_or(0) + 1 + usize::from(input.slack);

    assert_eq!(sais(&text, alphabet_size), naive_sais(&text));
});
