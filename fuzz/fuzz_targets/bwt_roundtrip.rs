// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Burrows-Wheeler transform.
//!
//! The inverse must reproduce the input for every byte string, and the
//! primary row must point at the suffix starting at 0.

#![no_main]

use induce::{suffix_array, Bwt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let sa = suffix_array(data);
    let bwt = Bwt::from_suffix_array(data, &sa);

    assert_eq!(bwt.len(), data.len());
    assert_eq!(sa[bwt.primary], 0, "primary row must hold suffix 0");
    assert_eq!(bwt.inverse(), data, "inverse BWT lost information");
});
