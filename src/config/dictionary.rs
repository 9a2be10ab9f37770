//! Dictionary configuration module.
//!
//! This module defines where the dictionary's words come from, how a word
//! list is read, and the default completion count.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Word list to load at startup (one word per line)
    pub word_list: Option<PathBuf>,

    /// Number of completions returned when the caller does not ask for a count
    pub default_completions: usize,

    /// Longest word, in characters, accepted from a word list
    pub max_word_length: usize,

    /// Whether to strip surrounding whitespace from each line
    pub trim_whitespace: bool,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            default_completions: 3,
            max_word_length: 64,
            trim_whitespace: true,
            comment_prefix: None,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_completions == 0 {
            return Err(ConfigError::ValidationError(
                "default_completions must be greater than 0".to_string(),
            ));
        }

        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        if self.comment_prefix.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
