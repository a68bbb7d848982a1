//! Locate keywords ("assets") in free text and mark them for display.
//!
//! The crate has two stages:
//! - [`AssetSearcher`] finds exact and, optionally, fuzzy occurrences of many
//!   keywords and counts them per keyword.
//! - [`Highlighter`] splits the text into fixed-size chunks joined by a
//!   separator and wraps every match in a kind-tagged marker, remapping
//!   offsets around the inserted separators.
//!
//! ```rust
//! use asset_highlighter::{highlight, search_keywords};
//!
//! let text = "The quick brown fox";
//! let outcome = search_keywords(text, ["quick", "cat"], false, false, 80);
//! assert_eq!(outcome.counts["quick"], 1);
//! assert_eq!(outcome.counts["cat"], 0);
//!
//! let marked = highlight(text, &outcome.matches, 1000).unwrap();
//! assert_eq!(marked, r#"The <span class="highlight-exact">quick</span> brown fox"#);
//! ```
//!
//! All operations are pure functions of their inputs. Per-user state such as
//! the focused match lives in a caller-owned [`Session`].

mod builder;
mod chunk;
mod config;
mod error;
mod exact;
mod fuzzy;
mod highlight;
mod matches;
mod segment;
mod session;
pub mod similarity;
mod structs;
#[cfg(test)]
mod tests;

pub use builder::AssetSearcherBuilder;
pub use chunk::Chunked;
pub use config::{HighlightOptions, SearchOptions};
pub use error::{Error, Result};
pub use exact::find_exact;
pub use fuzzy::find_fuzzy;
pub use highlight::{Highlighter, highlight};
pub use matches::normalize_keywords;
pub use session::{SearchResponse, Session};
pub use structs::*;

use std::collections::BTreeSet;
use tracing::debug;

impl AssetSearcher {
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Fuzzy threshold, `None` when fuzzy matching is disabled.
    #[must_use]
    pub fn fuzzy_threshold(&self) -> Option<i32> {
        self.fuzzy_threshold
    }

    /// See [`find_exact`].
    #[inline]
    pub fn find_exact(&self, text: &str, keyword: &str) -> Vec<Match> {
        find_exact(text, keyword, self.case_sensitive)
    }

    /// See [`find_fuzzy`]. Uses `threshold` even when the engine was built
    /// without fuzzy matching.
    #[inline]
    pub fn find_fuzzy(&self, text: &str, keyword: &str, threshold: i32) -> Vec<Match> {
        find_fuzzy(text, keyword, threshold, self.case_sensitive)
    }

    /// Searches `text` for every keyword.
    ///
    /// Keywords are trimmed and blank ones skipped. For each keyword the exact
    /// matches are collected, then (if enabled) the fuzzy matches whose span
    /// is not already an exact match of the same keyword. The count of a
    /// keyword is the number of matches it contributed. A repeated keyword
    /// is searched once, so counts are never added up across repeats.
    ///
    /// The returned list is stably sorted by `start`, so at equal offsets
    /// earlier keywords come first. Matches of different keywords may overlap.
    pub fn search<I, S>(&self, text: &str, keywords: I) -> SearchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = SearchOutcome::default();

        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            // a repeat would recompute the same matches
            if keyword.is_empty() || outcome.counts.contains_key(keyword) {
                continue;
            }

            let exact = self.find_exact(text, keyword);
            let fuzzy = match self.fuzzy_threshold {
                Some(threshold) => {
                    let exact_spans: BTreeSet<(usize, usize)> =
                        exact.iter().map(|m| (m.start, m.end)).collect();
                    let mut fuzzy = self.find_fuzzy(text, keyword, threshold);
                    fuzzy.retain(|m| !exact_spans.contains(&(m.start, m.end)));
                    fuzzy
                }
                None => Vec::new(),
            };

            debug!(
                keyword,
                exact = exact.len(),
                fuzzy = fuzzy.len(),
                "keyword searched"
            );
            outcome
                .counts
                .insert(keyword.to_owned(), exact.len() + fuzzy.len());
            outcome.matches.extend(exact);
            outcome.matches.extend(fuzzy);
        }

        outcome.matches.sort_by_key(|m| m.start);
        debug!(
            keywords = outcome.counts.len(),
            matches = outcome.matches.len(),
            "search finished"
        );
        outcome
    }
}

/// One-shot form of [`AssetSearcher::search`].
///
/// `fuzzy_threshold` is only used when `use_fuzzy` is set.
pub fn search_keywords<I, S>(
    text: &str,
    keywords: I,
    case_sensitive: bool,
    use_fuzzy: bool,
    fuzzy_threshold: i32,
) -> SearchOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = AssetSearcherBuilder::new().case_sensitive(case_sensitive);
    if use_fuzzy {
        builder = builder.fuzzy(fuzzy_threshold);
    }
    builder.build().search(text, keywords)
}
