// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bucket boundaries over a zero-indexed suffix array.
//!
//! Every symbol `c` owns the contiguous range `bucket(c)` of the suffix array.
//! Two cursors walk each bucket during induction:
//!
//! ```text
//!  symbol:      0     1           2
//!  counts:      1     3           2
//!  SA:        [ $ | a   a   a | b   b ]
//!              ^    ^       ^   ^   ^
//!  heads:      0    1       |   4   |
//!  tails:      1            4       6     (exclusive ends)
//! ```
//!
//! `heads[c]` only ever moves right (L-pass), `tails[c]` only ever moves left
//! (S-pass and LMS seeding). Both are consumed destructively, so each pass
//! starts from an explicit reset of the cursors it moves.

use std::ops::Range;

use super::Slot;
use crate::verify::contracts::{check_head_in_bucket, check_tail_in_bucket};

/// Symbol occurrence counts plus the head/tail cursors derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    counts: Vec<usize>,
    starts: Vec<usize>,
    heads: Vec<usize>,
    tails: Vec<usize>,
}

impl Buckets {
    /// Count symbol occurrences in `text` and derive bucket boundaries.
    ///
    /// Every symbol must be `< alphabet_size`. Cursors start reset: heads at
    /// bucket starts, tails at bucket ends.
    pub fn new(text: &[usize], alphabet_size: usize) -> Self {
        let mut counts = vec![0; alphabet_size];
        for &c in text {
            counts[c] += 1;
        }
        Self::from_counts(counts)
    }

    /// Build buckets from precomputed occurrence counts, ordered by symbol.
    pub fn from_counts(counts: Vec<usize>) -> Self {
        let mut starts = Vec::with_capacity(counts.len());
        let mut sum = 0;
        for &count in &counts {
            starts.push(sum);
            sum += count;
        }

        let mut buckets = Buckets {
            heads: starts.clone(),
            tails: vec![0; counts.len()],
            counts,
            starts,
        };
        buckets.reset_tails();
        buckets
    }

    /// Occurrences of each symbol.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of symbols that actually occur.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of symbols counted (the text length).
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Current head cursors: next free slot from the front of each bucket.
    #[inline]
    pub fn heads(&self) -> &[usize] {
        &self.heads
    }

    /// Current tail cursors as exclusive ends.
    #[inline]
    pub fn tails(&self) -> &[usize] {
        &self.tails
    }

    /// The slot the next `push_back` for `c` would write, if the bucket has room.
    #[inline]
    pub fn tail_slot(&self, c: usize) -> Option<usize> {
        let tail = self.tails[c];
        (tail > self.starts[c]).then(|| tail - 1)
    }

    /// The slots of `sa` reserved for suffixes starting with `c`.
    #[inline]
    pub fn bucket(&self, c: usize) -> Range<usize> {
        self.starts[c]..self.starts[c] + self.counts[c]
    }

    /// Point every head cursor back at the front of its bucket.
    pub fn reset_heads(&mut self) {
        self.heads.copy_from_slice(&self.starts);
    }

    /// Point every tail cursor back at the end of its bucket.
    pub fn reset_tails(&mut self) {
        for (c, tail) in self.tails.iter_mut().enumerate() {
            *tail = self.starts[c] + self.counts[c];
        }
    }

    /// Place `pos` at the head of bucket `c` and advance the head.
    #[inline]
    pub fn push_front(&mut self, sa: &mut [Slot], c: usize, pos: usize) {
        let head = self.heads[c];
        check_head_in_bucket(head, &self.bucket(c), c);
        sa[head] = Some(pos);
        self.heads[c] = head + 1;
    }

    /// Place `pos` at the tail of bucket `c` and retreat the tail.
    #[inline]
    pub fn push_back(&mut self, sa: &mut [Slot], c: usize, pos: usize) {
        check_tail_in_bucket(self.tails[c], &self.bucket(c), c);
        self.tails[c] -= 1;
        sa[self.tails[c]] = Some(pos);
    }
}
