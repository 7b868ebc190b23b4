// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for suffix array construction.
//!
//! Debug-mode assertions for the properties the construction relies on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Fire on implementation bugs only, never on user input
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                       |
//! |------------------------------|------------------------------------------------|
//! | `check_head_in_bucket`       | L-pass never writes past its bucket            |
//! | `check_tail_in_bucket`       | S-pass/seeding never writes before its bucket  |
//! | `check_sentinel`             | text ends in a unique minimal symbol           |
//! | `check_reduction_shrinks`    | recursion is well-founded                      |
//! | `check_all_filled`           | EXPAND leaves no unfilled slot                 |
//! | `check_permutation`          | result is a permutation of `0..n`              |
//! | `check_suffix_array_sorted`  | adjacent suffixes strictly increase            |
//! | `check_known_byte`           | encoding never produces a second sentinel      |
//! | `check_primary_in_range`     | BWT wraparound row exists                      |

use std::ops::Range;

use crate::alphabet::SENTINEL;
use crate::sais::Slot;

/// Check a head cursor before writing through it.
///
/// # Panics (debug builds only)
/// Panics if `head` is outside `bucket`.
#[inline]
pub fn check_head_in_bucket(head: usize, bucket: &Range<usize>, symbol: usize) {
    // INVARIANT: head cursors stay within [start, end) while writing
    debug_assert!(
        bucket.contains(&head),
        "Contract violation: head {} of bucket {} outside {:?}",
        head,
        symbol,
        bucket
    );
}

/// Check a tail cursor (exclusive end) before retreating and writing.
///
/// # Panics (debug builds only)
/// Panics if the bucket has no free slot left at its tail.
#[inline]
pub fn check_tail_in_bucket(tail: usize, bucket: &Range<usize>, symbol: usize) {
    // INVARIANT: tail cursors stay within (start, end] before a write
    debug_assert!(
        tail > bucket.start && tail <= bucket.end,
        "Contract violation: tail {} of bucket {} outside ({}, {}]",
        tail,
        symbol,
        bucket.start,
        bucket.end
    );
}

/// Check that `text` ends with a sentinel smaller than every other symbol.
#[inline]
pub fn check_sentinel(text: &[usize]) {
    if let Some((&last, rest)) = text.split_last() {
        // INVARIANT: the sentinel is unique and strictly minimal
        debug_assert!(
            rest.iter().all(|&c| c > last),
            "Contract violation: text does not end in a unique minimal sentinel"
        );
    }
}

/// Check that a reduced string is at most half as long as its parent.
#[inline]
pub fn check_reduction_shrinks(parent_len: usize, reduced_len: usize) {
    // INVARIANT: LMS positions are never adjacent and never at 0
    debug_assert!(
        reduced_len <= parent_len / 2 && reduced_len < parent_len,
        "Contract violation: reduced length {} not below half of {}",
        reduced_len,
        parent_len
    );
}

/// Check that construction left no slot unfilled.
#[inline]
pub fn check_all_filled(sa: &[Slot]) {
    // INVARIANT: after EXPAND every slot holds a suffix
    debug_assert!(
        sa.iter().all(Option::is_some),
        "Contract violation: unfilled slot at {:?}",
        sa.iter().position(Option::is_none)
    );
}

/// Check that `sa` is a permutation of `0..sa.len()`.
#[inline]
pub fn check_permutation(sa: &[usize]) {
    if cfg!(debug_assertions) {
        let mut seen = vec![false; sa.len()];
        for &p in sa {
            // INVARIANT: each suffix is placed exactly once
            debug_assert!(
                p < sa.len() && !std::mem::replace(&mut seen[p], true),
                "Contract violation: suffix {} missing or placed twice",
                p
            );
        }
    }
}

/// Texts longer than this skip the sortedness contract. Adjacent suffix
/// comparison is quadratic on repetitive text.
pub const SORT_CHECK_LIMIT: usize = 1 << 12;

/// Check that adjacent suffixes of `text` appear in strictly increasing order.
#[inline]
pub fn check_suffix_array_sorted(text: &[usize], sa: &[usize]) {
    if cfg!(debug_assertions) && text.len() <= SORT_CHECK_LIMIT {
        for (i, pair) in sa.windows(2).enumerate() {
            // INVARIANT: SA[i-1] < SA[i] lexicographically
            debug_assert!(
                text[pair[0]..] < text[pair[1]..],
                "Contract violation: suffix array not sorted at {}",
                i + 1
            );
        }
    }
}

/// Check that `byte` had a symbol of its own in the alphabet.
#[inline]
pub fn check_known_byte(symbol: usize, byte: u8) {
    // INVARIANT: only the appended sentinel maps to symbol 0
    debug_assert!(
        symbol != SENTINEL,
        "Contract violation: byte {:#04x} is not in the alphabet",
        byte
    );
}

/// Check that the wraparound row of a BWT lies within its `len + 1` rows.
#[inline]
pub fn check_primary_in_range(primary: usize, len: usize) {
    // INVARIANT: primary <= len, row `len` is the last one
    debug_assert!(
        primary <= len,
        "Contract violation: primary row {} past {} rows",
        primary,
        len + 1
    );
}
