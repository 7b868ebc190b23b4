// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the induce command-line interface.
//!
//! Four subcommands over one input text: `sa` prints the suffix array, `bwt`
//! the Burrows-Wheeler transform, `lms` the array after the LMS-substring
//! round only, and `inspect` a per-level report with validation. With no
//! subcommand, `sa` reads stdin.

pub mod display;
pub mod inspect;
pub mod logger;

use std::fmt;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use induce::{InputError, InvariantError};

#[derive(Parser)]
#[command(
    name = "induce",
    about = "Linear-time suffix arrays by induced sorting, with Burrows-Wheeler output",
    version
)]
pub struct Cli {
    /// Log construction progress to stderr (-v per level, -vv per phase)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print a JSON report instead of plain output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the suffix array, sentinel suffix first
    Sa {
        /// Input file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Print the Burrows-Wheeler transform, sentinel row skipped
    Bwt {
        /// Input file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Print the suffix array after the LMS-substring induction round only
    ///
    /// Slots the round leaves unfilled print as -1.
    Lms {
        /// Input file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Show recursion levels, validate the result and round-trip the BWT
    Inspect {
        /// Input file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// The requested command, `sa` on stdin when none was given.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Sa { file: None })
    }
}

impl Commands {
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            Commands::Sa { file }
            | Commands::Bwt { file }
            | Commands::Lms { file }
            | Commands::Inspect { file } => file.as_ref(),
        }
    }
}

/// Anything that makes the binary exit non-zero.
#[derive(Debug)]
pub enum CliError {
    Input(InputError),
    Invalid(InvariantError),
    RoundTrip,
    Json(serde_json::Error),
    Write(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(e) => write!(f, "{}", e),
            CliError::Invalid(e) => write!(f, "invalid suffix array: {}", e),
            CliError::RoundTrip => write!(f, "inverse BWT does not reproduce the input"),
            CliError::Json(e) => write!(f, "failed to encode report: {}", e),
            CliError::Write(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Input(e) => Some(e),
            CliError::Invalid(e) => Some(e),
            CliError::RoundTrip => None,
            CliError::Json(e) => Some(e),
            CliError::Write(e) => Some(e),
        }
    }
}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        CliError::Input(e)
    }
}

impl From<InvariantError> for CliError {
    fn from(e: InvariantError) -> Self {
        CliError::Invalid(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Write(e)
    }
}
