//! Huaolelo Library
//!
//! This library contains a case-insensitive word dictionary with
//! shortest-first prefix completion, plus the configuration, error and
//! word-list loading layers the `huaolelo` binary is built on.
//!
//! # Architecture
//!
//! - `data_structures` holds the trie; it has no I/O and never fails
//! - `loader` feeds line-oriented word lists into a dictionary
//! - `config` and `error` carry the ambient settings and failure types
//!
//! Dictionaries are always constructed by the caller and passed where they
//! are needed; there is no process-wide default instance.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Huaolelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
