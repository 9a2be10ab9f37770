//! Word-list load error module.
//!
//! This module defines error types that may occur while feeding a word list
//! into a dictionary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when the word list file does not exist.
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the word list file cannot be opened.
    #[error("Failed to open word list {path}: {source}")]
    Open {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error when a line cannot be read (including invalid UTF-8).
    #[error("Failed to read word list at line {line}: {source}")]
    Read {
        /// 1-based line number
        line: usize,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },
}
