// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full SA-IS construction on fixed inputs.

use super::common::{assert_suffix_array_well_formed, encoded, naive_sais, naive_suffix_array, FIXTURES};
use induce::sais::lms_sort;
use induce::{sais, suffix_array, suffix_array_with, LevelRecorder, Phase};

#[test]
fn test_fixtures_match_oracle() {
    for &text in FIXTURES {
        let sa = suffix_array(text);
        assert_eq!(
            sa,
            naive_suffix_array(text),
            "mismatch for {:?}",
            String::from_utf8_lossy(text)
        );
        assert_suffix_array_well_formed(text, &sa);
    }
}

#[test]
fn test_sentinel_suffix_always_first() {
    for &text in FIXTURES {
        assert_eq!(suffix_array(text)[0], text.len());
    }
}

#[test]
fn test_empty_and_single() {
    assert_eq!(suffix_array(b""), vec![0]);
    assert_eq!(suffix_array(b"x"), vec![1, 0]);
}

#[test]
fn test_strictly_decreasing_input() {
    // every suffix starts with a larger byte than the next one
    assert_eq!(suffix_array(b"edcba"), vec![5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_strictly_increasing_input() {
    assert_eq!(suffix_array(b"abcde"), vec![5, 0, 1, 2, 3, 4]);
}

#[test]
fn test_long_run_of_one_byte() {
    let text = vec![b'z'; 1000];
    let sa = suffix_array(&text);
    let expected: Vec<usize> = (0..=1000).rev().collect();
    assert_eq!(sa, expected);
}

#[test]
fn test_nul_bytes_sort_after_sentinel() {
    // "\0" must sort after the empty suffix but before everything else
    let sa = suffix_array(b"\x00a\x00");
    assert_eq!(sa, vec![3, 2, 0, 1]);
}

#[test]
fn test_integer_entry_point() {
    let (text, k) = encoded(b"mississippi");
    assert_eq!(sais(&text, k), naive_sais(&text));
}

#[test]
fn test_integer_alphabet_larger_than_needed() {
    // unused symbols leave empty buckets
    let text = [7, 3, 7, 3, 0];
    assert_eq!(sais(&text, 100), naive_sais(&text));
}

#[test]
fn test_deep_recursion_on_periodic_text() {
    let text = b"ab".repeat(64);
    let mut recorder = LevelRecorder::default();
    let sa = suffix_array_with(&text, &mut recorder);
    assert_eq!(sa, naive_suffix_array(&text));

    // every level shrinks to at most half of the one above
    for pair in recorder.levels.windows(2) {
        assert_eq!(pair[1].depth, pair[0].depth + 1);
        assert_eq!(pair[1].len, pair[0].lms_count);
        assert_eq!(pair[1].alphabet_size, pair[0].names);
        assert!(pair[1].len <= pair[0].len / 2);
    }
    assert!(recorder.levels.last().unwrap().base_case);
}

#[test]
fn test_every_level_finishes() {
    let mut recorder = LevelRecorder::default();
    suffix_array_with(b"mississippi", &mut recorder);

    let deepest = recorder.levels.len() - 1;
    for depth in 0..=deepest {
        let phases: Vec<Phase> = recorder
            .phases
            .iter()
            .filter(|(d, _)| *d == depth)
            .map(|&(_, p)| p)
            .collect();
        assert_eq!(phases.first(), Some(&Phase::Count));
        assert_eq!(phases.last(), Some(&Phase::Done));
    }
}

#[test]
fn test_base_case_skips_induction() {
    let mut recorder = LevelRecorder::default();
    suffix_array_with(b"zyx", &mut recorder);
    assert_eq!(
        recorder.phases,
        vec![(0, Phase::Count), (0, Phase::CheckBase), (0, Phase::Done)]
    );
}

/// Every ordering of the symbols `1..=m`, each followed by the sentinel.
fn distinct_texts(m: usize) -> Vec<Vec<usize>> {
    fn permute(rest: &mut Vec<usize>, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if rest.is_empty() {
            let mut text = prefix.clone();
            text.push(0);
            out.push(text);
            return;
        }
        for i in 0..rest.len() {
            let c = rest.remove(i);
            prefix.push(c);
            permute(rest, prefix, out);
            prefix.pop();
            rest.insert(i, c);
        }
    }
    let mut symbols: Vec<usize> = (1..=m).collect();
    let mut out = Vec::new();
    permute(&mut symbols, &mut Vec::new(), &mut out);
    out
}

/// A few fixed orderings of `1..=m` for lengths too large to enumerate.
fn sampled_distinct_texts(m: usize) -> Vec<Vec<usize>> {
    (1..m)
        .filter(|step| gcd(*step, m) == 1)
        .map(|step| {
            let mut text: Vec<usize> = (0..m).map(|i| (i * step) % m + 1).collect();
            text.push(0);
            text
        })
        .collect()
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[test]
fn test_base_case_matches_one_induction_round() {
    // Buckets of size one make a single induction round exact, so the
    // shortcut and the induced order must agree with brute force.
    let texts = (0..=7)
        .flat_map(distinct_texts)
        .chain((8..=11).flat_map(sampled_distinct_texts));
    for text in texts {
        let k = text.len();
        let induced: Option<Vec<usize>> = lms_sort(&text, k).into_iter().collect();
        let induced = induced.unwrap_or_else(|| panic!("unfilled slot for {:?}", text));
        let direct = sais(&text, k);
        assert_eq!(induced, direct, "induction and shortcut differ for {:?}", text);
        assert_eq!(direct, naive_sais(&text), "wrong order for {:?}", text);
    }
}
