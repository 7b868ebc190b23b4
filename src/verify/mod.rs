// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validated results and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validated wrappers** ([`SuffixArray`]) that check a finished result
//!    once and carry the guarantee from then on. Unlike the contracts these
//!    return [`InvariantError`], so callers can report a bad result.
//!
//! 2. **Runtime contracts** that panic in debug builds when the construction
//!    breaks one of its own invariants. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
