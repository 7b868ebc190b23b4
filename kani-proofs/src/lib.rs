// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the SA-IS building blocks.
//!
//! This standalone crate extracts bucket layout and suffix classification
//! and proves them for every text up to a small bound using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Tiling**: buckets are contiguous, ordered by symbol, and cover `0..n`
//! 2. **Tail cursors**: pushing one entry per occurrence never leaves the bucket
//! 3. **Classification**: the one-pass scan agrees with suffix comparison
//! 4. **LMS spacing**: LMS positions are never 0 and never adjacent

/// Largest text (sentinel included) the proofs range over.
pub const MAX_LEN: usize = 6;
/// Symbols are drawn from `0..ALPHABET`; 0 is the sentinel.
pub const ALPHABET: usize = 4;

// ============================================================================
// BUCKETS (extracted from src/sais/buckets.rs)
// ============================================================================

/// Bucket starts as prefix sums of symbol counts.
pub fn bucket_starts(text: &[usize], counts: &mut [usize; ALPHABET]) -> [usize; ALPHABET] {
    for &c in text {
        counts[c] += 1;
    }
    let mut starts = [0; ALPHABET];
    let mut sum = 0;
    for c in 0..ALPHABET {
        starts[c] = sum;
        sum += counts[c];
    }
    starts
}

// ============================================================================
// CLASSIFICATION (extracted from src/sais/classify.rs)
// ============================================================================

/// `true` where the suffix is S-type, by one right-to-left scan.
pub fn classify(text: &[usize], s: &mut [bool; MAX_LEN]) {
    let n = text.len();
    if n == 0 {
        return;
    }
    s[n - 1] = true;
    for i in (0..n - 1).rev() {
        s[i] = text[i] < text[i + 1] || (text[i] == text[i + 1] && s[i + 1]);
    }
}

pub fn is_lms(s: &[bool], i: usize) -> bool {
    i > 0 && s[i] && !s[i - 1]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// A symbolic text of length 1..=MAX_LEN ending in a unique sentinel.
    fn any_text(buf: &mut [usize; MAX_LEN]) -> usize {
        let n: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        for i in 0..n - 1 {
            buf[i] = kani::any_where(|&c: &usize| c >= 1 && c < ALPHABET);
        }
        buf[n - 1] = 0;
        n
    }

    /// Buckets tile `0..n` in symbol order.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_buckets_tile() {
        let mut buf = [0usize; MAX_LEN];
        let n = any_text(&mut buf);
        let text = &buf[..n];

        let mut counts = [0usize; ALPHABET];
        let starts = bucket_starts(text, &mut counts);

        kani::assert(starts[0] == 0, "first bucket starts at 0");
        kani::assert(counts[0] == 1, "sentinel bucket holds exactly one slot");
        for c in 0..ALPHABET - 1 {
            kani::assert(starts[c] + counts[c] == starts[c + 1], "buckets are contiguous");
        }
        kani::assert(
            starts[ALPHABET - 1] + counts[ALPHABET - 1] == n,
            "last bucket ends at n",
        );
    }

    /// Retreating a tail cursor once per occurrence stays inside the bucket.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_tail_cursor_in_bucket() {
        let mut buf = [0usize; MAX_LEN];
        let n = any_text(&mut buf);
        let text = &buf[..n];

        let mut counts = [0usize; ALPHABET];
        let starts = bucket_starts(text, &mut counts);
        let mut tails = [0usize; ALPHABET];
        for c in 0..ALPHABET {
            tails[c] = starts[c] + counts[c];
        }

        for &c in text {
            kani::assert(tails[c] > starts[c], "tail has a free slot");
            tails[c] -= 1;
            kani::assert(tails[c] < n, "slot index within the array");
        }
        for c in 0..ALPHABET {
            kani::assert(tails[c] == starts[c], "every bucket exactly filled");
        }
    }

    /// The scan labels position i S exactly when suffix i < suffix i+1.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_classification_matches_comparison() {
        let mut buf = [0usize; MAX_LEN];
        let n = any_text(&mut buf);
        let text = &buf[..n];

        let mut s = [false; MAX_LEN];
        classify(text, &mut s);

        kani::assert(s[n - 1], "sentinel is S-type");
        for i in 0..n - 1 {
            kani::assert(s[i] == (text[i..] < text[i + 1..]), "type agrees with suffix order");
        }
    }

    /// LMS positions are never 0, never adjacent, and include the sentinel.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_lms_spacing() {
        let mut buf = [0usize; MAX_LEN];
        let n = any_text(&mut buf);
        let text = &buf[..n];

        let mut s = [false; MAX_LEN];
        classify(text, &mut s);
        let s = &s[..n];

        kani::assert(!is_lms(s, 0), "position 0 is never LMS");
        if n > 1 {
            kani::assert(is_lms(s, n - 1), "sentinel is LMS");
        }
        for i in 1..n {
            kani::assert(!(is_lms(s, i - 1) && is_lms(s, i)), "LMS never adjacent");
        }
    }
}
