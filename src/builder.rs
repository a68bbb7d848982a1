use crate::{AssetSearcher, SearchOptions};

/// Builder for [`AssetSearcher`].
///
/// ```rust
/// use asset_highlighter::AssetSearcherBuilder;
///
/// let searcher = AssetSearcherBuilder::new()
///     .case_sensitive(false)
///     .fuzzy(80)
///     .build();
///
/// let outcome = searcher.search("Pyton is great", ["Python"]);
/// assert_eq!(outcome.counts["Python"], 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetSearcherBuilder {
    case_sensitive: bool,
    fuzzy_threshold: Option<i32>,
}

impl AssetSearcherBuilder {
    /// Case-insensitive, exact matching only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            case_sensitive: false,
            fuzzy_threshold: None,
        }
    }

    /// Mirrors the matcher part of a [`SearchOptions`].
    #[must_use]
    pub fn from_options(options: &SearchOptions) -> Self {
        let builder = Self::new().case_sensitive(options.case_sensitive);
        if options.use_fuzzy {
            builder.fuzzy(options.fuzzy_threshold)
        } else {
            builder
        }
    }

    /// Distinguish upper and lower case in both exact and fuzzy matching.
    #[must_use]
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    /// Enable fuzzy token matching. Tokens scoring at least `threshold`
    /// (compared as is, not clamped to `0..=100`) are reported.
    #[must_use]
    pub fn fuzzy(mut self, threshold: i32) -> Self {
        self.fuzzy_threshold = Some(threshold);
        self
    }

    /// Disable fuzzy token matching.
    #[must_use]
    pub fn exact_only(mut self) -> Self {
        self.fuzzy_threshold = None;
        self
    }

    #[must_use]
    pub fn build(self) -> AssetSearcher {
        AssetSearcher {
            case_sensitive: self.case_sensitive,
            fuzzy_threshold: self.fuzzy_threshold,
        }
    }
}
