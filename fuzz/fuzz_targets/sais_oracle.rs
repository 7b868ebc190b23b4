// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential fuzz target: SA-IS against sorting every suffix.
//!
//! Raw fuzzer bytes are the text. Anything the naive sort disagrees with is
//! a construction bug, and the debug contracts inside SA-IS catch cursor
//! and reduction errors before the comparison does.

#![no_main]

use induce::testing::naive_suffix_array;
use induce::{suffix_array, validate_suffix_array};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The oracle is O(n² log n); keep it cheap enough to explore widely
    if data.len() > 4096 {
        return;
    }

    let sa = suffix_array(data);
    if let Err(e) = validate_suffix_array(data, &sa) {
        panic!("invalid suffix array for {:?}: {}", data, e);
    }
    assert_eq!(sa, naive_suffix_array(data), "oracle mismatch for {:?}", data);
});
