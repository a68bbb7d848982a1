//! String similarity measures used by fuzzy matching.
//!
//! Both measures work on extended grapheme clusters, so `"e\u{301}"` counts
//! as a single character.

use crate::Similarity;
use unicode_segmentation::UnicodeSegmentation;

/// Levenshtein edit distance (insertions, deletions, substitutions) between
/// two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<&str> = a.graphemes(true).collect();
    let b: Vec<&str> = b.graphemes(true).collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Insertion/deletion distance: a substitution costs two edits.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<&str> = a.graphemes(true).collect();
    let b: Vec<&str> = b.graphemes(true).collect();
    a.len() + b.len() - 2 * longest_common_subsequence(&a, &b)
}

fn longest_common_subsequence(a: &[&str], b: &[&str]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ga in a {
        for (j, gb) in b.iter().enumerate() {
            curr[j + 1] = if ga == gb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized similarity in `0..=100`:
/// `round(100 * (|a| + |b| - indel(a, b)) / (|a| + |b|))`.
///
/// Symmetric, 100 only for equal strings, 0 when nothing is shared.
pub fn ratio(a: &str, b: &str) -> Similarity {
    let total = a.graphemes(true).count() + b.graphemes(true).count();
    if total == 0 {
        return 100;
    }
    let kept = total - indel_distance(a, b);
    (kept as f64 * 100.0 / total as f64).round() as Similarity
}
