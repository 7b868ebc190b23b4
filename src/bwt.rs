// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burrows-Wheeler Transform from a finished suffix array.
//!
//! `BWT[i] = text[SA[i] - 1]`. The row where `SA[i] == 0` would hold the
//! sentinel; it is skipped in the output and its row number is kept as
//! `primary` so the transform stays invertible.
//!
//! ```text
//!  SA:    6  5  3  1  0  4  2        text: banana
//!  BWT:   a  n  n  b  ·  a  a        bytes: "annbaa", primary: 4
//! ```

use crate::sais::suffix_array;
use crate::verify::contracts::check_primary_in_range;

/// A Burrows-Wheeler transformed byte string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bwt {
    /// Transformed bytes, original alphabet, sentinel row omitted.
    pub bytes: Vec<u8>,
    /// Row of the omitted sentinel (the row where `SA[row] == 0`).
    pub primary: usize,
}

impl Bwt {
    /// Compute the suffix array of `text` and transform it.
    pub fn transform(text: &[u8]) -> Self {
        let sa = suffix_array(text);
        Self::from_suffix_array(text, &sa)
    }

    /// Read the transform off a suffix array of `text` plus sentinel.
    ///
    /// `sa` must have `text.len() + 1` entries.
    pub fn from_suffix_array(text: &[u8], sa: &[usize]) -> Self {
        debug_assert_eq!(sa.len(), text.len() + 1, "suffix array must include the sentinel");

        let mut bytes = Vec::with_capacity(text.len());
        let mut primary = 0;
        for (row, &p) in sa.iter().enumerate() {
            match p.checked_sub(1) {
                Some(prev) => bytes.push(text[prev]),
                None => primary = row,
            }
        }
        Bwt { bytes, primary }
    }

    /// Length of the original text.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reconstruct the original text by LF-mapping.
    ///
    /// Row 0 is always the sentinel suffix, so its last column holds the final
    /// byte of the text; following LF from there walks the text backwards.
    pub fn inverse(&self) -> Vec<u8> {
        let m = self.bytes.len();
        check_primary_in_range(self.primary, m);
        if m == 0 {
            return Vec::new();
        }

        // Last column with the sentinel reinserted; sentinel = 0, byte b = b + 1.
        let last: Vec<usize> = (0..=m)
            .map(|row| match row.cmp(&self.primary) {
                std::cmp::Ordering::Less => self.bytes[row] as usize + 1,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => self.bytes[row - 1] as usize + 1,
            })
            .collect();

        // C[c]: number of symbols smaller than c
        let mut starts = [0usize; 257];
        for &c in &last {
            starts[c] += 1;
        }
        let mut sum = 0;
        for start in starts.iter_mut() {
            let count = *start;
            *start = sum;
            sum += count;
        }

        let mut seen = [0usize; 257];
        let lf: Vec<usize> = last
            .iter()
            .map(|&c| {
                let row = starts[c] + seen[c];
                seen[c] += 1;
                row
            })
            .collect();

        let mut text = vec![0u8; m];
        let mut row = 0;
        for k in (0..m).rev() {
            // INVARIANT: the sentinel row is only reached after m steps
            text[k] = (last[row] - 1) as u8;
            row = lf[row];
        }
        text
    }
}
