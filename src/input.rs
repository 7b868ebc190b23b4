// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading the problem instance.
//!
//! The whole stream is one string: lines are concatenated with their `\n`
//! terminators dropped and nothing inserted between them. Bytes are taken as
//! they are; the input does not have to be UTF-8.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Failure to obtain the input text.
#[derive(Debug)]
pub enum InputError {
    /// The input file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// Reading the stream failed part way.
    Read { source: io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Open { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            InputError::Read { source } => write!(f, "failed to read input: {}", source),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Open { source, .. } | InputError::Read { source } => Some(source),
        }
    }
}

/// Read `reader` to the end, joining lines without separators.
pub fn read_text<R: BufRead>(mut reader: R) -> Result<Vec<u8>, InputError> {
    let mut text = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| InputError::Read { source })?;
        if read == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        text.extend_from_slice(&line);
    }
    Ok(text)
}

/// Read from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<Vec<u8>, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            read_text(BufReader::new(file))
        }
        _ => read_text(io::stdin().lock()),
    }
}
