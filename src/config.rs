//! Configuration types for parsing and statistics.
//!
//! - [`ParserConfig`] - how header lines are normalized (group-name rewrite)
//! - [`StatsConfig`] - stopwords, media placeholders and table sizes
//!
//! Both are plain data with builder methods and no CLI dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{ParserConfig, StatsConfig};
//! use chatlens::parser::ChatParser;
//!
//! let parser = ChatParser::with_config(
//!     ParserConfig::new().with_group_name("Team Alfaaz"),
//! )?;
//!
//! let stats = StatsConfig::new()
//!     .with_stopwords(["the", "a", "hai"])
//!     .with_top_words(10);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for [`ChatParser`](crate::parser::ChatParser).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Regex matched against each sender; matches are rewritten to
    /// [`GROUP_NOTIFICATION`](crate::record::GROUP_NOTIFICATION) (default: none).
    pub group_pattern: Option<String>,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the group-name pattern as a raw regular expression.
    #[must_use]
    pub fn with_group_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.group_pattern = Some(pattern.into());
        self
    }

    /// Treats every sender starting with `name` as the group itself.
    #[must_use]
    pub fn with_group_name(self, name: &str) -> Self {
        self.with_group_pattern(format!("^{}", regex::escape(name)))
    }
}

/// Configuration for the statistics in [`stats`](crate::stats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Lowercase words excluded from word frequency tables (default: empty).
    pub stopwords: HashSet<String>,

    /// Bodies counted as shared media, matched case-insensitively as
    /// substrings (default: `image omitted`, `video omitted`).
    pub media_placeholders: Vec<String>,

    /// Body of a sticker message (default: `sticker omitted`).
    pub sticker_placeholder: String,

    /// Rows in the most-common-words table (default: 20).
    pub top_words: usize,

    /// Rows in the busiest-users table (default: 5).
    pub top_users: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            stopwords: HashSet::new(),
            media_placeholders: vec!["image omitted".to_string(), "video omitted".to_string()],
            sticker_placeholder: "sticker omitted".to_string(),
            top_words: 20,
            top_users: 5,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stopword set. Words are lowercased.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Replaces the media placeholder list.
    #[must_use]
    pub fn with_media_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sticker placeholder body.
    #[must_use]
    pub fn with_sticker_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.sticker_placeholder = placeholder.into();
        self
    }

    /// Sets the number of rows in the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of rows in the busiest-users table.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Returns `true` if `word` (already lowercased) is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Returns `true` if `body` counts as shared media.
    pub fn is_media(&self, body: &str) -> bool {
        let lower = body.to_lowercase();
        self.media_placeholders
            .iter()
            .any(|p| lower.contains(&p.to_lowercase()))
    }

    /// Returns `true` if `body` is a sticker.
    pub fn is_sticker(&self, body: &str) -> bool {
        body == self.sticker_placeholder
    }

    /// Returns `true` if `body` is exactly one of the placeholders.
    ///
    /// Placeholder bodies are left out of word statistics.
    pub fn is_placeholder(&self, body: &str) -> bool {
        self.is_sticker(body) || self.media_placeholders.iter().any(|p| p == body)
    }
}

/// Reads a stopword list: whitespace-separated words, lowercased.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::config::{StatsConfig, load_stopwords};
///
/// let config = StatsConfig::new().with_stopwords(load_stopwords("stop_hinglish.txt".as_ref())?);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_stopwords(&content))
}

/// Splits a stopword list into a set of lowercase words.
pub fn parse_stopwords(content: &str) -> HashSet<String> {
    content
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
