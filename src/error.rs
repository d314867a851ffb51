//! Error types for dictionary loading and case files.
//!
//! A query that finds no chain is not an error; the solver returns `None` for it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The dictionary source could not be turned into a [`Dictionary`](crate::Dictionary).
///
/// Fatal to every query that depends on the dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The source could not be opened.
    #[error("cannot open dictionary '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was opened but failed part-way through reading.
    #[error("cannot read dictionary '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    /// Path of the source that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DictionaryError::Open { path, .. } | DictionaryError::Read { path, .. } => path,
        }
    }
}

/// A ladder case file could not be read or parsed.
#[derive(Debug, Error)]
pub enum CaseParseError {
    #[error("cannot read case file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line numbers start at 1.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
