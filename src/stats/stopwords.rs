//! Stopword list handling for the word-frequency queries.
//!
//! The list is explicit configuration: queries receive it from the engine
//! rather than consulting process-global state. A built-in list ships inside
//! the binary; callers may load a replacement from a file.

use anyhow::Context;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;

/// Words excluded from word-frequency outputs.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The list shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_source(include_str!("../../assets/stopwords.txt"))
    }

    /// Load a replacement list from a file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to a text file with one word per line
    ///
    /// # Returns
    ///
    /// The parsed list, or an error when the file is unreadable or holds no words.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file: {}", path.display()))
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;

        let stopwords = Self::from_source(&content);
        if stopwords.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Stopword file {} contains no words",
                path.display()
            )));
        }

        Ok(stopwords)
    }

    /// Parse a list from text: one word per line, lowercased. Blank lines and
    /// `#` comment lines are ignored.
    pub fn from_source(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Self { words }
    }

    /// Whether `word` (already lowercased) is on the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
