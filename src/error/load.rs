//! Loader error module.
//!
//! Errors raised while reading weighted-term files into a trie. Line numbers
//! are 1-based.

use std::path::PathBuf;

use thiserror::Error;

use crate::data_structures::lanai_trie::LanaiTrieError;

/// Errors that can occur while loading weighted terms.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The term file could not be opened.
    #[error("Failed to open term file {path:?}: {source}")]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// The IO error
        #[source]
        source: std::io::Error,
    },

    /// The underlying reader failed.
    #[error("Failed to read line {line}: {source}")]
    Io {
        /// Line being read when the failure happened
        line: usize,
        /// The IO error
        #[source]
        source: std::io::Error,
    },

    /// The weight column could not be parsed as a number.
    #[error("Invalid weight '{value}' on line {line}")]
    InvalidWeight {
        /// Offending line
        line: usize,
        /// Raw weight text
        value: String,
    },

    /// The trie rejected the term.
    #[error("Cannot store term on line {line}: {source}")]
    Trie {
        /// Offending line
        line: usize,
        /// The trie error
        #[source]
        source: LanaiTrieError,
    },
}
