//! Caller-owned state for an interactive search: the document, the last
//! response and the focused match.

use crate::{
    AssetSearcherBuilder, Highlighter, Match, Result, SearchOptions, SearchOutcome,
    normalize_keywords,
};
use tracing::debug;

/// Everything produced by one search request. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub outcome: SearchOutcome,
    pub annotated: String,
}

/// One user's view of a document.
///
/// ```rust
/// use asset_highlighter::{SearchOptions, Session};
///
/// let mut session = Session::new("apple pie, apple tart, plum jam");
/// session.run(["plum", "apple", " "], &SearchOptions::default()).unwrap();
/// assert_eq!(session.position(), Some((1, 3)));
///
/// assert_eq!(session.select_keyword("plum"), Some(2));
/// assert_eq!(session.position(), Some((3, 3)));
/// assert_eq!(session.ranked_assets(), vec![("apple", 2), ("plum", 1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    response: Option<SearchResponse>,
    selected_keyword: Option<String>,
    cursor: usize,
}

impl Session {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the document and drops the previous results.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.clear_results();
    }

    /// Searches the current text and replaces the previous response.
    ///
    /// Keywords are normalized first (trimmed, blanks dropped, duplicates
    /// removed). Selection and cursor are reset. On invalid options the
    /// previous response is kept.
    pub fn run<I, S>(&mut self, keywords: I, options: &SearchOptions) -> Result<&SearchResponse>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        options.validate()?;
        let highlighter = Highlighter::new(options.highlight.clone())?;
        let keywords = normalize_keywords(keywords);
        let outcome = AssetSearcherBuilder::from_options(options)
            .build()
            .search(&self.text, &keywords);
        let annotated = highlighter.highlight(&self.text, &outcome.matches)?;
        debug!(
            keywords = keywords.len(),
            matches = outcome.matches.len(),
            "session search finished"
        );

        self.selected_keyword = None;
        self.cursor = 0;
        Ok(&*self.response.insert(SearchResponse { outcome, annotated }))
    }

    #[must_use]
    pub fn response(&self) -> Option<&SearchResponse> {
        self.response.as_ref()
    }

    fn matches(&self) -> &[Match] {
        self.response
            .as_ref()
            .map(|r| r.outcome.matches.as_slice())
            .unwrap_or_default()
    }

    /// The focused match.
    #[must_use]
    pub fn current(&self) -> Option<&Match> {
        self.matches().get(self.cursor)
    }

    /// `(1-based index, total)` of the focused match.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        let total = self.matches().len();
        (total > 0).then_some((self.cursor + 1, total))
    }

    /// Focuses the next match; stays on the last one.
    pub fn next_match(&mut self) -> Option<&Match> {
        if self.cursor + 1 < self.matches().len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Focuses the previous match; stays on the first one.
    pub fn previous_match(&mut self) -> Option<&Match> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Focuses the first match of `keyword` and returns its index. The
    /// cursor does not move when the keyword has no match.
    pub fn select_keyword(&mut self, keyword: &str) -> Option<usize> {
        let index = self.response.as_ref()?.outcome.first_match_of(keyword)?;
        self.selected_keyword = Some(keyword.to_owned());
        self.cursor = index;
        Some(index)
    }

    #[must_use]
    pub fn selected_keyword(&self) -> Option<&str> {
        self.selected_keyword.as_deref()
    }

    /// See [`SearchOutcome::ranked_assets`]. Empty before the first search.
    #[must_use]
    pub fn ranked_assets(&self) -> Vec<(&str, usize)> {
        self.response
            .as_ref()
            .map(|r| r.outcome.ranked_assets())
            .unwrap_or_default()
    }

    fn clear_results(&mut self) {
        self.response = None;
        self.selected_keyword = None;
        self.cursor = 0;
    }

    /// Forgets the document and all results.
    pub fn reset(&mut self) {
        self.text.clear();
        self.clear_results();
    }
}
