use crate::{Match, MatchKind, SearchOutcome, Similarity};
use std::collections::BTreeSet;
use std::ops::Range;

impl Match {
    /// Number of `char`s covered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }

    /// Score of a fuzzy match, `None` for exact ones.
    #[must_use]
    pub fn similarity(&self) -> Option<Similarity> {
        match self.kind {
            MatchKind::Exact => None,
            MatchKind::Fuzzy { similarity } => Some(similarity),
        }
    }

    /// Byte range of this match in `text`, the string it was found in.
    /// Returns `None` when the `char` range lies outside `text`.
    #[must_use]
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        let mut bounds = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()));
        let start = bounds.nth(self.start)?;
        let end = if self.is_empty() {
            start
        } else {
            bounds.nth(self.end - self.start - 1)?
        };
        Some(start..end)
    }

    /// The slice of `text` this match covers.
    #[must_use]
    pub fn text<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.byte_range(text).map(|r| &text[r])
    }
}

impl SearchOutcome {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Keywords with at least one match, most frequent first. Equal counts
    /// keep keyword order.
    #[must_use]
    pub fn ranked_assets(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(keyword, &count)| (keyword.as_str(), count))
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked
    }

    /// Index of the first match attributed to `keyword`.
    #[must_use]
    pub fn first_match_of(&self, keyword: &str) -> Option<usize> {
        self.matches.iter().position(|m| m.keyword == keyword)
    }

    /// Distinct keywords that produced at least one match.
    #[must_use]
    pub fn unique_keywords(&self) -> BTreeSet<&str> {
        self.matches.iter().map(|m| m.keyword.as_str()).collect()
    }

    /// Matches of one keyword, in text order.
    pub fn matches_of<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Match> + 'a {
        self.matches.iter().filter(move |m| m.keyword == keyword)
    }
}

/// Trims raw keywords, drops blank ones and removes duplicates, keeping the
/// first occurrence of each.
pub fn normalize_keywords<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    raw.into_iter()
        .filter_map(|k| {
            let k = k.as_ref().trim();
            (!k.is_empty() && seen.insert(k.to_owned())).then(|| k.to_owned())
        })
        .collect()
}

/// Orders matches for display: ascending start, longer span first on ties
/// (stable otherwise), then keeps only matches starting at or after the end
/// of the previously kept one.
pub(crate) fn display_order(matches: &[Match]) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().filter(|m| !m.is_empty()).collect();
    sorted.sort_by(|left, right| {
        left.start
            .cmp(&right.start)
            .then_with(|| right.end.cmp(&left.end))
    });

    let mut cursor = 0;
    sorted.retain(|m| {
        if m.start >= cursor {
            cursor = m.end;
            true
        } else {
            tracing::debug!(
                keyword = %m.keyword,
                start = m.start,
                end = m.end,
                "skipping match overlapping an earlier one"
            );
            false
        }
    });
    sorted
}
