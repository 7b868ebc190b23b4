// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Naming LMS-substrings and building the reduced string.
//!
//! After the first induction round, LMS-substrings appear in the suffix array
//! in sorted order. Walking the array left to right, each LMS-substring gets
//! the name of its predecessor if the two are identical, or the next name
//! otherwise. Reading the names back in text order gives `T1`, a string over
//! at most `n / 2` symbols whose suffix order equals the order of the LMS
//! suffixes of `T`.
//!
//! ```text
//!  T:     m  i  s  s  i  s  s  i  p  p  i  $
//!  LMS:      1        4        7           11
//!  names:    2        2        1           0     (iss·i, iss·i, ipp·i$... , $)
//!  T1:    [2, 2, 1, 0]     X: [1, 4, 7, 11]
//! ```

use super::classify::SuffixTypes;
use super::Slot;

/// The reduced problem for one recursion level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// `T1`: LMS-substring names in text order of their LMS positions.
    pub text: Vec<usize>,
    /// `X`: `positions[k]` is the position in `T` that `text[k]` names.
    pub positions: Vec<usize>,
    /// Number of distinct names, i.e. the alphabet size of `T1`.
    pub names: usize,
}

impl Reduction {
    /// True when every LMS-substring got its own name, so `T1` is already
    /// its own suffix order.
    pub fn is_unique(&self) -> bool {
        self.names == self.text.len()
    }
}

/// Compare the LMS-substrings starting at `a` and `b` for equality.
///
/// Symbols and suffix types must match position by position until both
/// substrings reach their closing LMS position at the same offset. The
/// sentinel's one-symbol substring equals only itself.
pub fn lms_substrings_equal(text: &[usize], types: &SuffixTypes, a: usize, b: usize) -> bool {
    if a == b {
        return true;
    }
    let sentinel = text.len() - 1;
    if a == sentinel || b == sentinel {
        return false;
    }

    // Every non-sentinel LMS-substring closes at or before the sentinel, and
    // the loop stops at the first closing position of either one, so neither
    // index can run past the text.
    let mut k = 0;
    loop {
        let (i, j) = (a + k, b + k);
        if text[i] != text[j] || types.get(i) != types.get(j) {
            return false;
        }
        if k > 0 {
            let (end_i, end_j) = (types.is_lms(i), types.is_lms(j));
            if end_i || end_j {
                return end_i && end_j;
            }
        }
        k += 1;
    }
}

/// Name the LMS-substrings found in `sa` and build `T1` and `X`.
///
/// `sa` must be the result of one induction round seeded with the LMS
/// positions, which leaves LMS-substrings in sorted order. The sentinel
/// always sorts first and so always receives name 0.
pub fn reduce(text: &[usize], types: &SuffixTypes, sa: &[Slot]) -> Reduction {
    let mut names: Vec<Option<usize>> = vec![None; text.len()];
    let mut name = 0;
    let mut prev: Option<usize> = None;

    for &p in sa.iter().flatten() {
        if !types.is_lms(p) {
            continue;
        }
        if let Some(q) = prev {
            if !lms_substrings_equal(text, types, q, p) {
                name += 1;
            }
        }
        names[p] = Some(name);
        prev = Some(p);
    }

    let (positions, reduced): (Vec<usize>, Vec<usize>) = names
        .iter()
        .enumerate()
        .filter_map(|(p, slot)| slot.map(|label| (p, label)))
        .unzip();

    Reduction {
        text: reduced,
        positions,
        names: if prev.is_some() { name + 1 } else { 0 },
    }
}
