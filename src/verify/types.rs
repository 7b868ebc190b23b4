// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid suffix arrays unrepresentable.
//!
//! Instead of hoping the construction was right, wrap the result in
//! [`SuffixArray`]. It checks every property at construction and guarantees
//! them forever after. The check is paid once upfront (and is quadratic on
//! highly repetitive text, so keep it out of hot paths).
//!
//! | Property         | What's checked                                          |
//! |------------------|---------------------------------------------------------|
//! | Complete         | `len == text.len() + 1`, no unfilled slot               |
//! | Permutation      | every position `0..=text.len()` appears exactly once    |
//! | Sentinel first   | `sa[0] == text.len()`                                   |
//! | Sorted           | `text[sa[i-1]..] < text[sa[i]..]` for all `i`           |
//!
//! The sentinel is implicit: the suffix at `text.len()` is the empty slice,
//! and slice ordering (a proper prefix sorts first) is exactly the ordering
//! a unique minimal sentinel induces.

use std::fmt;

use crate::sais::Slot;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Suffix array does not have one entry per suffix (sentinel included).
    LengthMismatch { expected: usize, actual: usize },
    /// A slot was never filled.
    UnfilledSlot { position: usize },
    /// An entry points past the sentinel.
    OutOfRange { position: usize, value: usize, max: usize },
    /// A suffix appears twice.
    DuplicatePosition { value: usize },
    /// The first entry is not the sentinel suffix.
    SentinelNotFirst { found: usize },
    /// Suffix array is not sorted lexicographically.
    Unsorted { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthMismatch { expected, actual } => {
                write!(f, "suffix array has {} entries, expected {}", actual, expected)
            }
            InvariantError::UnfilledSlot { position } => {
                write!(f, "slot {} was never filled", position)
            }
            InvariantError::OutOfRange {
                position,
                value,
                max,
            } => {
                write!(f, "sa[{}] = {} exceeds sentinel position {}", position, value, max)
            }
            InvariantError::DuplicatePosition { value } => {
                write!(f, "suffix {} appears more than once", value)
            }
            InvariantError::SentinelNotFirst { found } => {
                write!(f, "sa[0] = {} but the sentinel suffix must sort first", found)
            }
            InvariantError::Unsorted { position } => {
                write!(f, "suffix array not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that `sa` is the suffix array of `text` plus an implicit sentinel.
pub fn validate_suffix_array<T: Ord>(text: &[T], sa: &[usize]) -> Result<(), InvariantError> {
    let n = text.len() + 1;
    if sa.len() != n {
        return Err(InvariantError::LengthMismatch {
            expected: n,
            actual: sa.len(),
        });
    }

    let mut seen = vec![false; n];
    for (position, &value) in sa.iter().enumerate() {
        if value >= n {
            return Err(InvariantError::OutOfRange {
                position,
                value,
                max: text.len(),
            });
        }
        if std::mem::replace(&mut seen[value], true) {
            return Err(InvariantError::DuplicatePosition { value });
        }
    }

    if sa[0] != text.len() {
        return Err(InvariantError::SentinelNotFirst { found: sa[0] });
    }

    for position in 1..n {
        if text[sa[position - 1]..] >= text[sa[position]..] {
            return Err(InvariantError::Unsorted { position });
        }
    }

    Ok(())
}

/// A suffix array proven complete and sorted for the text it was built from.
///
/// # Invariants (enforced at construction)
/// - one entry per suffix, sentinel included
/// - a permutation of `0..=text.len()`
/// - `positions[0] == text.len()`
/// - strictly increasing suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    positions: Vec<usize>,
}

impl SuffixArray {
    /// Validate `positions` against `text`.
    pub fn new<T: Ord>(text: &[T], positions: Vec<usize>) -> Result<Self, InvariantError> {
        validate_suffix_array(text, &positions)?;
        Ok(SuffixArray { positions })
    }

    /// Validate construction slots, rejecting any that were left unfilled.
    pub fn from_slots<T: Ord>(text: &[T], slots: &[Slot]) -> Result<Self, InvariantError> {
        let positions = slots
            .iter()
            .enumerate()
            .map(|(position, slot)| slot.ok_or(InvariantError::UnfilledSlot { position }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(text, positions)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.positions
    }

    /// Inverse permutation: `rank[p]` is the row of suffix `p`.
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.positions.len()];
        for (row, &p) in self.positions.iter().enumerate() {
            ranks[p] = row;
        }
        ranks
    }
}
