use crate::similarity::ratio;
use crate::{Match, MatchKind};
use std::collections::BTreeSet;

/// Finds whitespace-delimited tokens of `text` whose [`ratio`] against
/// `keyword` is at least `threshold`, and reports every standalone
/// occurrence of each such token.
///
/// A standalone occurrence is not preceded or followed by an alphanumeric
/// character, so the token `cat` never matches inside `category`. Equal
/// tokens are scored once. Only single tokens are compared: a keyword
/// containing whitespace can score at most partially against any token.
///
/// The result is sorted by `start`.
pub fn find_fuzzy(text: &str, keyword: &str, threshold: i32, case_sensitive: bool) -> Vec<Match> {
    if keyword.is_empty() {
        return Vec::new();
    }
    let folded_keyword = fold(keyword, case_sensitive);
    let haystack: Vec<char> = text.chars().collect();

    let mut seen = BTreeSet::new();
    let mut matches = Vec::new();
    for token in text.split_whitespace() {
        if !seen.insert(token) {
            continue;
        }
        let similarity = ratio(&folded_keyword, &fold(token, case_sensitive));
        if i32::from(similarity) < threshold {
            continue;
        }
        tracing::trace!(token, keyword, similarity, "fuzzy token accepted");
        let needle: Vec<char> = token.chars().collect();
        for start in standalone_occurrences(&haystack, &needle) {
            matches.push(Match {
                start,
                end: start + needle.len(),
                keyword: keyword.to_owned(),
                kind: MatchKind::Fuzzy { similarity },
            });
        }
    }
    matches.sort_by_key(|m| m.start);
    matches
}

fn fold(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_owned()
    } else {
        s.to_lowercase()
    }
}

/// Start indexes of non-overlapping occurrences of `needle` bounded by
/// non-alphanumeric characters or the ends of `haystack`.
fn standalone_occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut starts = Vec::new();
    if needle.is_empty() {
        return starts;
    }
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        let end = i + needle.len();
        let bounded = (i == 0 || !haystack[i - 1].is_alphanumeric())
            && haystack.get(end).is_none_or(|c| !c.is_alphanumeric());
        if bounded && haystack[i..end] == *needle {
            starts.push(i);
            i = end;
        } else {
            i += 1;
        }
    }
    starts
}
