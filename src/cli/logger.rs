// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! stderr logger for the `log` facade.
//!
//! Only records from this crate are shown. `-v` enables the per-level
//! summaries, `-vv` adds every phase transition.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::display::{themed_for, Target, BOLD, CYAN, DIM, GRAY, RED, YELLOW};

struct StderrLogger {
    level: LevelFilter,
}

/// Map `-v` occurrences to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn badge(level: Level) -> String {
    let target = Target::Stderr;
    match level {
        Level::Error => themed_for(target, RED, &[BOLD], "error"),
        Level::Warn => themed_for(target, YELLOW, &[BOLD], "warn"),
        Level::Info => themed_for(target, CYAN, &[], "info"),
        Level::Debug => themed_for(target, CYAN, &[DIM], "debug"),
        Level::Trace => themed_for(target, GRAY, &[DIM], "trace"),
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("induce")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", badge(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Fails only if a logger is already set.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = level_for(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
