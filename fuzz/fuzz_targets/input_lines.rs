// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the line-joining input reader.
//!
//! Reading must never fail on in-memory bytes, must drop exactly the `\n`
//! bytes, and must keep everything else in order.

#![no_main]

use induce::read_text;
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let text = read_text(Cursor::new(data)).expect("reading from memory cannot fail");

    let expected: Vec<u8> = data.iter().copied().filter(|&b| b != b'\n').collect();
    assert_eq!(text, expected);
});
