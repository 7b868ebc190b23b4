// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Order-preserving alphabet compression for byte input.
//!
//! Distinct bytes are renamed to `1..=k` in byte order and a sentinel `0` is
//! appended, so the top recursion level works over `k + 1` dense buckets
//! instead of 256 mostly-empty ones. A NUL byte in the input is a real symbol
//! (`1` if present) and never collides with the sentinel.

use crate::verify::contracts::check_known_byte;

/// Symbol reserved for the sentinel.
pub const SENTINEL: usize = 0;

/// Byte ↔ symbol mapping for one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    /// `ranks[b]` is the symbol for byte `b`, or `SENTINEL` if `b` is absent.
    ranks: [usize; 256],
    /// `bytes[s - 1]` is the byte for symbol `s`.
    bytes: Vec<u8>,
}

impl Alphabet {
    /// Collect the distinct bytes of `input`.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut present = [false; 256];
        for &b in input {
            present[b as usize] = true;
        }

        let mut ranks = [SENTINEL; 256];
        let mut bytes = Vec::new();
        for b in 0..=u8::MAX {
            if present[b as usize] {
                bytes.push(b);
                ranks[b as usize] = bytes.len();
            }
        }

        Alphabet { ranks, bytes }
    }

    /// Number of symbols including the sentinel.
    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len() + 1
    }

    /// Symbol for `byte`, if it occurred in the input.
    #[inline]
    pub fn symbol(&self, byte: u8) -> Option<usize> {
        match self.ranks[byte as usize] {
            SENTINEL => None,
            s => Some(s),
        }
    }

    /// Byte for `symbol`; `None` for the sentinel or an unknown symbol.
    #[inline]
    pub fn byte(&self, symbol: usize) -> Option<u8> {
        symbol
            .checked_sub(1)
            .and_then(|i| self.bytes.get(i).copied())
    }

    /// Map `input` to symbols and append the sentinel.
    ///
    /// Every byte of `input` must have been seen by `from_bytes`; an unseen
    /// byte trips a debug contract, and [`Alphabet::try_encode`] checks it.
    pub fn encode(&self, input: &[u8]) -> Vec<usize> {
        let mut text = Vec::with_capacity(input.len() + 1);
        text.extend(input.iter().map(|&b| {
            let symbol = self.ranks[b as usize];
            check_known_byte(symbol, b);
            symbol
        }));
        text.push(SENTINEL);
        text
    }

    /// [`Alphabet::encode`], or `None` if `input` has a byte outside the alphabet.
    pub fn try_encode(&self, input: &[u8]) -> Option<Vec<usize>> {
        if input.iter().any(|&b| self.ranks[b as usize] == SENTINEL) {
            return None;
        }
        Some(self.encode(input))
    }
}

/// Build the alphabet of `input` and its sentinel-terminated symbol text.
pub fn compress(input: &[u8]) -> (Alphabet, Vec<usize>) {
    let alphabet = Alphabet::from_bytes(input);
    let text = alphabet.encode(input);
    (alphabet, text)
}
