// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering results for stdout.
//!
//! Plain output is what the exercises print: the suffix array as
//! space-separated integers, or the transformed string on one line. `--json`
//! wraps the same data in a [`Report`].

use serde::Serialize;

use crate::bwt::Bwt;
use crate::sais::{LevelStats, Slot};

/// Suffix array as space-separated integers with a trailing newline.
pub fn render_suffix_array(sa: &[usize]) -> String {
    let mut out = sa
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

/// Like [`render_suffix_array`], with unfilled slots printed as `-1`.
pub fn render_slots(slots: &[Slot]) -> String {
    let mut out = slots
        .iter()
        .map(|slot| match slot {
            Some(p) => p.to_string(),
            None => "-1".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

/// Transformed bytes followed by a newline.
pub fn render_bwt(bwt: &Bwt) -> Vec<u8> {
    let mut out = Vec::with_capacity(bwt.len() + 1);
    out.extend_from_slice(&bwt.bytes);
    out.push(b'\n');
    out
}

/// Machine-readable result. Absent parts are left out of the JSON.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Input length without the sentinel.
    pub len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_array: Option<Vec<usize>>,
    /// LMS-round slots; unfilled slots serialize as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lms_suffix_array: Option<Vec<Slot>>,
    /// Transformed text, lossily decoded as UTF-8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bwt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<LevelStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roundtrip: Option<bool>,
}

impl Report {
    pub fn new(len: usize) -> Self {
        Report {
            len,
            ..Report::default()
        }
    }

    pub fn with_suffix_array(mut self, sa: Vec<usize>) -> Self {
        self.suffix_array = Some(sa);
        self
    }

    pub fn with_lms(mut self, slots: Vec<Slot>) -> Self {
        self.lms_suffix_array = Some(slots);
        self
    }

    pub fn with_bwt(mut self, bwt: &Bwt) -> Self {
        self.bwt = Some(String::from_utf8_lossy(&bwt.bytes).into_owned());
        self.primary = Some(bwt.primary);
        self
    }

    pub fn with_levels(mut self, levels: Vec<LevelStats>) -> Self {
        self.levels = Some(levels);
        self
    }

    pub fn with_checks(mut self, valid: bool, roundtrip: bool) -> Self {
        self.valid = Some(valid);
        self.roundtrip = Some(roundtrip);
        self
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
