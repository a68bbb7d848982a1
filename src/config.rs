//! Search and display configuration.
//!
//! Both structs deserialize from partial documents; missing fields take their
//! defaults.

use crate::{Error, MatchKind, Result};
use serde::{Deserialize, Serialize};

/// Options for a full search request (matching plus highlighting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub use_fuzzy: bool,
    /// Minimum similarity for fuzzy matches. Nominally `0..=100`, not clamped.
    pub fuzzy_threshold: i32,
    pub highlight: HighlightOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            use_fuzzy: false,
            fuzzy_threshold: 80,
            highlight: HighlightOptions::default(),
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<()> {
        self.highlight.validate()
    }
}

/// How annotated text is chunked and marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    /// Chunk length in `char`s, at least 1.
    pub chunk_size: usize,
    /// Inserted between chunks.
    pub separator: String,
    /// Marker class for exact matches.
    pub exact_class: String,
    /// Marker class for fuzzy matches.
    pub fuzzy_class: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            separator: "<br><br>".to_owned(),
            exact_class: "highlight-exact".to_owned(),
            fuzzy_class: "highlight-fuzzy".to_owned(),
        }
    }
}

impl HighlightOptions {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfiguration(
                "chunk size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn classes(mut self, exact: impl Into<String>, fuzzy: impl Into<String>) -> Self {
        self.exact_class = exact.into();
        self.fuzzy_class = fuzzy.into();
        self
    }

    /// Marker class for a match kind.
    #[must_use]
    pub fn class_for(&self, kind: MatchKind) -> &str {
        match kind {
            MatchKind::Exact => &self.exact_class,
            MatchKind::Fuzzy { .. } => &self.fuzzy_class,
        }
    }
}
