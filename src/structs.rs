use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Similarity percentage in `0..=100`.
pub type Similarity = u8;

/// Per-keyword occurrence counts, keyed by the trimmed keyword.
pub type KeywordCounts = BTreeMap<String, usize>;

/// How a [`Match`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchKind {
    /// Literal occurrence of the keyword.
    Exact,
    /// Whitespace token close enough to the keyword.
    Fuzzy {
        /// Score of the token against the keyword.
        similarity: Similarity,
    },
}

/// A located keyword occurrence.
///
/// `start` and `end` are `char` indexes into the searched text, `end` is
/// exclusive and `start < end` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Inclusive start `char` index.
    pub start: usize,
    /// Exclusive end `char` index.
    pub end: usize,
    /// Keyword (trimmed) this occurrence is attributed to.
    pub keyword: String,
    #[serde(flatten)]
    pub kind: MatchKind,
}

/// Result of [`AssetSearcher::search`](crate::AssetSearcher::search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// All matches, non-decreasing in `start`.
    pub matches: Vec<Match>,
    /// One entry per non-blank keyword, including those with zero matches.
    pub counts: KeywordCounts,
}

/// Immutable matcher produced by [`AssetSearcherBuilder`](crate::AssetSearcherBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSearcher {
    pub(crate) case_sensitive: bool,
    /// `Some(threshold)` when fuzzy matching is enabled.
    pub(crate) fuzzy_threshold: Option<i32>,
}

/// A match as it appears in the chunked text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedSpan<'a> {
    /// The match in original-text coordinates.
    pub source: &'a Match,
    /// `char` range inside the chunked text.
    pub chunked: Range<usize>,
    /// Slice of the chunked text covered by the marker.
    pub text: &'a str,
}

/// Result of [`Highlighter::segments`](crate::Highlighter::segments): either a
/// marked span or the literal gap between marked spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Matched(HighlightedSpan<'a>),
    Unmatched(&'a str),
}
