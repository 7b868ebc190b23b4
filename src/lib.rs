// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-time suffix array construction by induced sorting (SA-IS).
//!
//! Build the suffix array of a byte string with an implicit sentinel, then
//! read the Burrows-Wheeler transform off it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  input.rs   │────▶│ alphabet.rs  │────▶│   sais/     │
//! │ (read_text) │     │  (compress)  │     │ (recursive) │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!                                                 │
//!                     ┌──────────────┐     ┌──────▼──────┐
//!                     │  output.rs   │◀────│   bwt.rs    │
//!                     │(render, JSON)│     │ (transform) │
//!                     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                        │
//! │  (SuffixArray wrapper, InvariantError, contracts)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use induce::{suffix_array, Bwt};
//!
//! let sa = suffix_array(b"banana");
//! assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
//!
//! let bwt = Bwt::from_suffix_array(b"banana", &sa);
//! assert_eq!(bwt.bytes, b"annbaa");
//! assert_eq!(bwt.inverse(), b"banana");
//! ```

pub mod alphabet;
pub mod bwt;
pub mod input;
pub mod output;
pub mod sais;
pub mod testing;
pub mod verify;

pub use alphabet::{compress, Alphabet, SENTINEL};
pub use bwt::Bwt;
pub use input::{read_source, read_text, InputError};
pub use output::{render_bwt, render_slots, render_suffix_array, Report};
pub use sais::{
    lms_suffix_array, sais, sais_with, suffix_array, suffix_array_with, LevelRecorder,
    LevelStats, Observer, Phase, Slot,
};
pub use verify::{validate_suffix_array, InvariantError, SuffixArray};
