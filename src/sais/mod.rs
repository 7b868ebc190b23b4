// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction algorithm.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Append sentinel (0), compress the alphabet, classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, symbol 0)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Seed LMS (Leftmost S-type) positions 1, 3, 6 at bucket tails
//!
//! Step 3: Induced sorting
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!         LMS-substrings are now in sorted order
//!
//! Step 4: Name LMS-substrings, build reduced string T1, recurse on it
//!         (a level whose symbols are all distinct is solved directly)
//!
//! Step 5: Seed LMS positions in the exact order from the recursion and
//!         induce once more to get the final suffix array
//!
//! Output: [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! # Per-level phases
//!
//! ```text
//! Count → CheckBase ─(all distinct)──────────────────────────────▶ Done
//!             │
//!             └─▶ Bucket → Classify → LmsSort → Reduce → Recurse → Expand → Done
//! ```
//!
//! Each level owns its text, types, buckets and suffix array. Only `T1`/`X`
//! flow down and `SA1` flows back up. `T1` is never longer than half of `T`,
//! so the recursion terminates.
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n) per level, O(n) overall
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

pub mod buckets;
pub mod classify;
pub mod induce;
pub mod reduce;

use log::{debug, trace};
use serde::Serialize;

use crate::alphabet::compress;
use crate::verify::contracts::{
    check_all_filled, check_permutation, check_reduction_shrinks, check_sentinel,
    check_suffix_array_sorted,
};
use buckets::Buckets;
use classify::SuffixTypes;
use induce::induce;
use reduce::reduce;

/// One suffix array slot during construction. `None` is unfilled.
pub type Slot = Option<usize>;

/// Where a recursion level currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Count,
    CheckBase,
    Bucket,
    Classify,
    LmsSort,
    Reduce,
    Recurse,
    Expand,
    Done,
}

/// Summary of one recursion level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// 0 for the input text, +1 per reduction.
    pub depth: usize,
    /// Length of this level's text, sentinel included.
    pub len: usize,
    /// Symbols `0..alphabet_size` may occur in this level's text.
    pub alphabet_size: usize,
    /// LMS positions found (the length of the next level's text).
    pub lms_count: usize,
    /// Distinct LMS-substring names (the next level's alphabet size).
    pub names: usize,
    /// Level was solved directly because every symbol was distinct.
    pub base_case: bool,
}

/// Hook for watching construction. Both callbacks default to no-ops.
pub trait Observer {
    fn phase(&mut self, _depth: usize, _phase: Phase) {}
    fn level(&mut self, _stats: &LevelStats) {}
}

impl Observer for () {}

/// Observer that keeps every level summary and phase transition.
#[derive(Debug, Default)]
pub struct LevelRecorder {
    pub levels: Vec<LevelStats>,
    pub phases: Vec<(usize, Phase)>,
}

impl Observer for LevelRecorder {
    fn phase(&mut self, depth: usize, phase: Phase) {
        self.phases.push((depth, phase));
    }

    fn level(&mut self, stats: &LevelStats) {
        self.levels.push(stats.clone());
    }
}

/// Build the suffix array of `bytes` with an implicit sentinel appended.
///
/// The result has `bytes.len() + 1` entries; the first is always
/// `bytes.len()`, the sentinel-only suffix.
pub fn suffix_array(bytes: &[u8]) -> Vec<usize> {
    suffix_array_with(bytes, &mut ())
}

/// [`suffix_array`], reporting progress to `observer`.
pub fn suffix_array_with(bytes: &[u8], observer: &mut dyn Observer) -> Vec<usize> {
    let (alphabet, text) = compress(bytes);
    sais_with(&text, alphabet.size(), observer)
}

/// The suffix array of `bytes` after the LMS-substring induction round only.
///
/// LMS-substrings are correctly ordered, everything else is approximate.
pub fn lms_suffix_array(bytes: &[u8]) -> Vec<Slot> {
    let (alphabet, text) = compress(bytes);
    lms_sort(&text, alphabet.size())
}

/// Build the suffix array of an integer text.
///
/// `text` must end with a sentinel `0` that occurs nowhere else, and every
/// symbol must be `< alphabet_size`.
pub fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    sais_with(text, alphabet_size, &mut ())
}

/// [`sais`], reporting progress to `observer`.
pub fn sais_with(text: &[usize], alphabet_size: usize, observer: &mut dyn Observer) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    check_sentinel(text);
    let sa = solve_level(text, alphabet_size, 0, observer);
    check_permutation(&sa);
    check_suffix_array_sorted(text, &sa);
    sa
}

/// Seed LMS positions and run one induction round.
pub fn lms_sort(text: &[usize], alphabet_size: usize) -> Vec<Slot> {
    if text.is_empty() {
        return Vec::new();
    }
    check_sentinel(text);
    if text.len() == 1 {
        // no L-type predecessor, so the scan never seeds the sentinel
        return vec![Some(0)];
    }
    let mut buckets = Buckets::new(text, alphabet_size);
    let mut sa = vec![None; text.len()];
    let types = SuffixTypes::classify_and_seed(text, &mut sa, &mut buckets);
    induce(text, &types, &mut buckets, &mut sa);
    sa
}

fn enter(observer: &mut dyn Observer, depth: usize, phase: Phase) {
    trace!("level {}: {:?}", depth, phase);
    observer.phase(depth, phase);
}

fn solve_level(
    text: &[usize],
    alphabet_size: usize,
    depth: usize,
    observer: &mut dyn Observer,
) -> Vec<usize> {
    let n = text.len();
    let mut stats = LevelStats {
        depth,
        len: n,
        alphabet_size,
        ..LevelStats::default()
    };

    enter(observer, depth, Phase::Count);
    let mut buckets = Buckets::new(text, alphabet_size);

    enter(observer, depth, Phase::CheckBase);
    if buckets.distinct() == n {
        // Every symbol is its own bucket of size one: SA[rank(T[i])] = i.
        let mut sa = vec![0; n];
        for (i, &c) in text.iter().enumerate() {
            sa[buckets.bucket(c).start] = i;
        }
        stats.names = n;
        stats.base_case = true;
        debug!("level {}: n={} all distinct, solved directly", depth, n);
        observer.level(&stats);
        enter(observer, depth, Phase::Done);
        return sa;
    }

    enter(observer, depth, Phase::Bucket);
    buckets.reset_tails();

    enter(observer, depth, Phase::Classify);
    let mut sa: Vec<Slot> = vec![None; n];
    let types = SuffixTypes::classify_and_seed(text, &mut sa, &mut buckets);

    enter(observer, depth, Phase::LmsSort);
    induce(text, &types, &mut buckets, &mut sa);

    enter(observer, depth, Phase::Reduce);
    let reduction = reduce(text, &types, &sa);
    check_reduction_shrinks(n, reduction.text.len());
    stats.lms_count = reduction.text.len();
    stats.names = reduction.names;
    debug!(
        "level {}: n={} alphabet={} lms={} names={}",
        depth, n, alphabet_size, stats.lms_count, stats.names
    );
    observer.level(&stats);

    enter(observer, depth, Phase::Recurse);
    let sa1 = solve_level(&reduction.text, reduction.names, depth + 1, observer);

    enter(observer, depth, Phase::Expand);
    buckets.reset_tails();
    sa.fill(None);
    for &k in sa1.iter().rev() {
        let p = reduction.positions[k];
        buckets.push_back(&mut sa, text[p], p);
    }
    induce(text, &types, &mut buckets, &mut sa);

    enter(observer, depth, Phase::Done);
    check_all_filled(&sa);
    sa.into_iter().flatten().collect()
}
