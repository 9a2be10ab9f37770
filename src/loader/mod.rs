//! Word-list loader.
//!
//! Reads a line-oriented word list and feeds each word into a [`HuaTrie`].
//! The dictionary knows nothing about files; this module owns the format.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::config::DictionaryConfig;
use crate::data_structures::HuaTrie;
use crate::error::load::LoadError;

/// Result type for word-list loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Summary of one load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words that were new to the dictionary
    pub inserted: usize,

    /// Words the dictionary already held
    pub duplicates: usize,

    /// Lines ignored (blank, comment, or too long)
    pub skipped: usize,
}

/// Loads word lists into a dictionary.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    max_word_length: usize,
    trim_whitespace: bool,
    comment_prefix: Option<String>,
}

impl Default for WordListLoader {
    fn default() -> Self {
        Self::new(&DictionaryConfig::default())
    }
}

impl WordListLoader {
    /// Creates a loader using the word-list settings of `config`.
    pub fn new(config: &DictionaryConfig) -> Self {
        Self {
            max_word_length: config.max_word_length,
            trim_whitespace: config.trim_whitespace,
            comment_prefix: config.comment_prefix.clone(),
        }
    }

    /// Inserts every word read from `reader` into `dictionary`.
    ///
    /// # Arguments
    ///
    /// * `dictionary` - The dictionary to fill.
    /// * `reader` - Source of UTF-8 lines, one word per line.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadReport)` - Counts of inserted, duplicate and skipped lines.
    /// * `Err(LoadError::Read)` - If a line could not be read. Words before it stay inserted.
    pub fn load_reader<R>(&self, dictionary: &mut HuaTrie, reader: R) -> LoadResult<LoadReport>
    where
        R: BufRead,
    {
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| LoadError::Read {
                line: line_number,
                source,
            })?;

            let word = if self.trim_whitespace {
                line.trim()
            } else {
                line.as_str()
            };

            if word.is_empty() || self.is_comment(word) {
                tracing::debug!(line = line_number, "Skipping blank or comment line");
                report.skipped += 1;
                continue;
            }

            let length = word.chars().count();
            if length > self.max_word_length {
                tracing::warn!(
                    line = line_number,
                    length,
                    max = self.max_word_length,
                    "Skipping word longer than the configured maximum"
                );
                report.skipped += 1;
                continue;
            }

            if dictionary.insert(word) {
                report.inserted += 1;
            } else {
                tracing::trace!(line = line_number, word, "Duplicate word");
                report.duplicates += 1;
            }
        }

        Ok(report)
    }

    /// Opens `path` and loads it with [`WordListLoader::load_reader`].
    pub fn load_path<P>(&self, dictionary: &mut HuaTrie, path: P) -> LoadResult<LoadReport>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
            _ => LoadError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let report = self.load_reader(dictionary, BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            skipped = report.skipped,
            "Word list loaded"
        );

        Ok(report)
    }

    fn is_comment(&self, word: &str) -> bool {
        self.comment_prefix
            .as_deref()
            .is_some_and(|prefix| word.starts_with(prefix))
    }
}
