use crate::{Match, MatchKind};

#[inline]
pub(crate) fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Finds every non-overlapping literal occurrence of `keyword` in `text`.
///
/// The keyword is compared character by character, no pattern syntax is
/// interpreted. After a hit the scan resumes at its end, so `"aa"` occurs
/// twice in `"aaaa"` and once in `"aaa"`. An empty keyword yields nothing.
///
/// ```rust
/// use asset_highlighter::{find_exact, MatchKind};
///
/// let matches = find_exact("python PYTHON Python", "Python", false);
/// assert_eq!(matches.len(), 3);
/// assert!(matches.iter().all(|m| m.kind == MatchKind::Exact));
/// ```
pub fn find_exact(text: &str, keyword: &str, case_sensitive: bool) -> Vec<Match> {
    let needle: Vec<char> = keyword.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack: Vec<char> = text.chars().collect();

    let mut matches = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        let hit = haystack[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(&h, &n)| chars_eq(h, n, case_sensitive));
        if hit {
            matches.push(Match {
                start: i,
                end: i + needle.len(),
                keyword: keyword.to_owned(),
                kind: MatchKind::Exact,
            });
            i += needle.len();
        } else {
            i += 1;
        }
    }
    matches
}
