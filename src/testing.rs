// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the brute-force oracles the fast paths are checked against.

#![doc(hidden)]

use crate::bwt::Bwt;

/// Inputs every construction test should survive.
pub const FIXTURES: &[&[u8]] = &[
    b"",
    b"a",
    b"ab",
    b"ba",
    b"aaaa",
    b"abab",
    b"dcba",
    b"banana",
    b"mississippi",
    b"abracadabra",
    b"cabbage",
    b"\x00\x00\x01",
    b"\xff\xfe\xff\xfe",
];

/// Sort every suffix of `text` plus the implicit sentinel by comparison.
///
/// O(n² log n). Only for small inputs.
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..=text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Suffix array of an integer text that already ends in its sentinel.
pub fn naive_sais(text: &[usize]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Transform by sorting all rotations of `text$` explicitly.
pub fn naive_bwt(text: &[u8]) -> Bwt {
    // None is the sentinel and sorts below every byte
    let symbols: Vec<Option<u8>> = text.iter().copied().map(Some).chain([None]).collect();
    let n = symbols.len();
    let symbols = &symbols;

    let rotation = |start: usize| (0..n).map(move |k| symbols[(start + k) % n]);
    let mut rows: Vec<usize> = (0..n).collect();
    rows.sort_by(|&a, &b| rotation(a).cmp(rotation(b)));

    let mut bytes = Vec::with_capacity(text.len());
    let mut primary = 0;
    for (row, &start) in rows.iter().enumerate() {
        match symbols[(start + n - 1) % n] {
            Some(byte) => bytes.push(byte),
            None => primary = row,
        }
    }
    Bwt { bytes, primary }
}

/// S/L labels by direct suffix comparison: `true` where suffix `i` is S-type.
///
/// `text` must end in its sentinel, which is S-type.
pub fn naive_types(text: &[usize]) -> Vec<bool> {
    let n = text.len();
    (0..n)
        .map(|i| i + 1 == n || text[i..] < text[i + 1..])
        .collect()
}
