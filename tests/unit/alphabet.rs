// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alphabet compression.

use induce::{compress, Alphabet, SENTINEL};

#[test]
fn test_banana_symbols() {
    let (alphabet, text) = compress(b"banana");
    assert_eq!(alphabet.size(), 4);
    assert_eq!(text, vec![2, 1, 3, 1, 3, 1, SENTINEL]);
}

#[test]
fn test_nul_byte_does_not_collide_with_sentinel() {
    let (alphabet, text) = compress(b"a\x00b");
    assert_eq!(alphabet.symbol(0), Some(1));
    assert_eq!(text, vec![2, 1, 3, 0]);
    assert_eq!(text.iter().filter(|&&c| c == SENTINEL).count(), 1);
}

#[test]
fn test_symbols_preserve_byte_order() {
    let alphabet = Alphabet::from_bytes(b"zebra");
    let symbols: Vec<usize> = b"aberz"
        .iter()
        .map(|&b| alphabet.symbol(b).unwrap())
        .collect();
    assert_eq!(symbols, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_byte_inverts_symbol() {
    let alphabet = Alphabet::from_bytes(&[0xff, 0x10, 0x80]);
    for b in [0x10u8, 0x80, 0xff] {
        let s = alphabet.symbol(b).unwrap();
        assert_eq!(alphabet.byte(s), Some(b));
    }
    assert_eq!(alphabet.byte(SENTINEL), None);
    assert_eq!(alphabet.symbol(b'x'), None);
}

#[test]
fn test_full_byte_range() {
    let all: Vec<u8> = (0..=255).collect();
    let (alphabet, text) = compress(&all);
    assert_eq!(alphabet.size(), 257);
    assert_eq!(text.len(), 257);
    assert_eq!(text[255], 256);
}

#[test]
fn test_empty_input_is_just_the_sentinel() {
    let (alphabet, text) = compress(b"");
    assert_eq!(alphabet.size(), 1);
    assert_eq!(text, vec![SENTINEL]);
}
