// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Induced sorting: two linear bucket-placement passes over the suffix array.
//!
//! ```text
//!  L-pass  SA[0] ──────────────────────▶ SA[n-1]
//!          for p = SA[i]: if p-1 is L, put p-1 at the head of bucket T[p-1]
//!
//!  reset tails
//!
//!  S-pass  SA[0] ◀────────────────────── SA[n-1]
//!          for p = SA[i]: if p-1 is S, put p-1 at the tail of bucket T[p-1]
//! ```
//!
//! Both passes read slots they wrote earlier in the same pass. That is what
//! carries order from the seeded LMS suffixes to everything else, so the scan
//! direction is load-bearing.

use super::buckets::Buckets;
use super::classify::{preceding, Preceding, SuffixTypes};
use super::Slot;

/// Run one full induction round: reset heads, L-pass, reset tails, S-pass.
///
/// `sa` must hold LMS suffixes at the tails of their buckets (in the order to
/// be propagated) and nothing else. On return every slot is filled.
pub fn induce(text: &[usize], types: &SuffixTypes, buckets: &mut Buckets, sa: &mut [Slot]) {
    buckets.reset_heads();
    induce_l(text, types, buckets, sa);
    buckets.reset_tails();
    induce_s(text, types, buckets, sa);
}

/// Left-to-right pass placing L-type suffixes at bucket heads.
pub fn induce_l(text: &[usize], types: &SuffixTypes, buckets: &mut Buckets, sa: &mut [Slot]) {
    let n = text.len();
    for i in 0..n {
        let Some(p) = sa[i] else { continue };
        if let Preceding::At(j) = preceding(p, n) {
            if types.is_l(j) {
                buckets.push_front(sa, text[j], j);
            }
        }
    }
}

/// Right-to-left pass placing S-type suffixes at bucket tails.
pub fn induce_s(text: &[usize], types: &SuffixTypes, buckets: &mut Buckets, sa: &mut [Slot]) {
    let n = text.len();
    for i in (0..n).rev() {
        let Some(p) = sa[i] else { continue };
        if let Preceding::At(j) = preceding(p, n) {
            if types.is_s(j) {
                buckets.push_back(sa, text[j], j);
            }
        }
    }
}
