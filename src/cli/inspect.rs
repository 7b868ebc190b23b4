// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `induce inspect`: build everything once and show how it went.

use induce::{
    compress, suffix_array_with, validate_suffix_array, Bwt, InvariantError, LevelRecorder,
    LevelStats, Report,
};

use super::display::{
    check_mark, format_size, level_badge, pad_left, preview, row, section_bot, section_mid,
    section_top, themed, title, GRAY, YELLOW,
};
use super::CliError;

/// Entries of the suffix array shown before eliding the rest.
const SA_PREVIEW: usize = 12;
/// Characters of input and transform shown in previews.
const TEXT_PREVIEW: usize = 48;

/// Results of one full run over the input.
pub struct Inspection<'a> {
    text: &'a [u8],
    alphabet_size: usize,
    levels: Vec<LevelStats>,
    sa: Vec<usize>,
    bwt: Bwt,
    validation: Result<(), InvariantError>,
    roundtrip: bool,
}

impl<'a> Inspection<'a> {
    pub fn run(text: &'a [u8]) -> Self {
        let (alphabet, _) = compress(text);
        let mut recorder = LevelRecorder::default();
        let sa = suffix_array_with(text, &mut recorder);
        let validation = validate_suffix_array(text, &sa);
        let bwt = Bwt::from_suffix_array(text, &sa);
        let roundtrip = bwt.inverse() == text;

        Inspection {
            text,
            alphabet_size: alphabet.size(),
            levels: recorder.levels,
            sa,
            bwt,
            validation,
            roundtrip,
        }
    }

    /// Ok when the suffix array validated and the BWT inverted cleanly.
    pub fn outcome(&self) -> Result<(), CliError> {
        self.validation.clone()?;
        if self.roundtrip {
            Ok(())
        } else {
            Err(CliError::RoundTrip)
        }
    }

    pub fn report(&self) -> Report {
        Report::new(self.text.len())
            .with_suffix_array(self.sa.clone())
            .with_bwt(&self.bwt)
            .with_levels(self.levels.clone())
            .with_checks(self.validation.is_ok(), self.roundtrip)
    }

    pub fn print(&self) {
        title("SA-IS INSPECTION");

        section_top("INPUT");
        row(&format!(
            " length    {} ({})",
            self.text.len(),
            format_size(self.text.len())
        ));
        row(&format!(
            " alphabet  {} symbols, sentinel included",
            self.alphabet_size
        ));
        row(&format!(" text      {}", preview(self.text, TEXT_PREVIEW)));

        section_mid("RECURSION");
        row(&themed(
            GRAY,
            &[],
            " level        len   alphabet        lms      names",
        ));
        for level in &self.levels {
            let tail = if level.base_case {
                themed(YELLOW, &[], "  all distinct, solved directly")
            } else {
                format!(
                    "{}{}",
                    pad_left(&level.lms_count.to_string(), 11),
                    pad_left(&level.names.to_string(), 11)
                )
            };
            row(&format!(
                " {}{}{}{}",
                pad_left(&level_badge(level.depth), 5),
                pad_left(&level.len.to_string(), 11),
                pad_left(&level.alphabet_size.to_string(), 11),
                tail
            ));
        }

        section_mid("RESULT");
        let shown: Vec<String> = self
            .sa
            .iter()
            .take(SA_PREVIEW)
            .map(usize::to_string)
            .collect();
        let more = if self.sa.len() > SA_PREVIEW { " ..." } else { "" };
        row(&format!(" SA        {}{}", shown.join(" "), more));
        row(&format!(
            " BWT       {}",
            preview(&self.bwt.bytes, TEXT_PREVIEW)
        ));
        row(&format!(" primary   {}", self.bwt.primary));

        section_mid("CHECKS");
        row(&format!(" {}", check_mark(self.validation.is_ok(), "suffix array sorted and complete")));
        if let Err(e) = &self.validation {
            row(&format!("   {}", e));
        }
        row(&format!(" {}", check_mark(self.roundtrip, "inverse BWT reproduces the input")));
        section_bot();
    }
}
