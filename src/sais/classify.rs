// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! S/L suffix classification and LMS detection.
//!
//! ```text
//!  text:  b  a  n  a  n  a  $
//!  type:  L  S  L  S  L  L  S
//!  LMS:      *     *        *
//! ```
//!
//! The last position (the sentinel) is S-type. Walking right to left,
//! position `i` is S-type iff `T[i] < T[i+1]`, or `T[i] == T[i+1]` and
//! `i+1` is S-type. An LMS position is an S-type position whose left
//! neighbour is L-type; position 0 is never LMS.

use super::buckets::Buckets;
use super::Slot;

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// The suffix immediately preceding a suffix start, in text order.
///
/// Position 0 has no predecessor inside the text. Read cyclically it would be
/// the sentinel at `n - 1`; the sentinel is always seeded directly and never
/// induced, so both induction passes skip the wrapped case.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Preceding {
    At(usize),
    Wraps { sentinel: usize },
}

/// Predecessor of suffix `p` in a text of length `n`.
#[inline]
pub fn preceding(p: usize, n: usize) -> Preceding {
    match p.checked_sub(1) {
        Some(prev) => Preceding::At(prev),
        None => Preceding::Wraps { sentinel: n - 1 },
    }
}

/// Per-position suffix types for one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixTypes {
    types: Vec<SuffixType>,
}

impl SuffixTypes {
    /// Classify every position of `text` in one right-to-left scan.
    pub fn classify(text: &[usize]) -> Self {
        Self::scan(text, |_| {})
    }

    /// Classify `text` and, in the same scan, seed each LMS position into the
    /// tail of its bucket in `sa`.
    ///
    /// LMS positions are seeded in right-to-left text order. Within a bucket
    /// that order is arbitrary; the induction pass that follows only needs
    /// them to sit in the right bucket.
    pub fn classify_and_seed(text: &[usize], sa: &mut [Slot], buckets: &mut Buckets) -> Self {
        Self::scan(text, |lms| buckets.push_back(sa, text[lms], lms))
    }

    fn scan(text: &[usize], mut on_lms: impl FnMut(usize)) -> Self {
        let n = text.len();
        let mut types = vec![SuffixType::S; n];
        if n == 0 {
            return SuffixTypes { types };
        }

        for i in (0..n - 1).rev() {
            types[i] = if text[i] < text[i + 1] {
                SuffixType::S
            } else if text[i] > text[i + 1] {
                SuffixType::L
            } else {
                types[i + 1]
            };

            // i is L and i+1 is S: i+1 starts an LMS-substring
            if types[i] == SuffixType::L && types[i + 1] == SuffixType::S {
                on_lms(i + 1);
            }
        }

        SuffixTypes { types }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> SuffixType {
        self.types[i]
    }

    #[inline]
    pub fn is_s(&self, i: usize) -> bool {
        self.types[i] == SuffixType::S
    }

    #[inline]
    pub fn is_l(&self, i: usize) -> bool {
        self.types[i] == SuffixType::L
    }

    /// Check if position `i` is an LMS position.
    #[inline]
    pub fn is_lms(&self, i: usize) -> bool {
        i > 0 && self.is_s(i) && self.is_l(i - 1)
    }

    /// LMS positions in increasing text order.
    pub fn lms_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.len()).filter(move |&i| self.is_lms(i))
    }

    pub fn as_slice(&self) -> &[SuffixType] {
        &self.types
    }
}
