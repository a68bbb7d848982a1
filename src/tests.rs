/* -------------------------------------------------------------------------
 *  Tests
 * ---------------------------------------------------------------------- */
use crate::{
    AssetSearcherBuilder, Error, HighlightOptions, Highlighter, Match, MatchKind, SearchOptions,
    Segment, Session, find_exact, find_fuzzy, highlight, normalize_keywords, search_keywords,
};

fn exact(start: usize, end: usize, keyword: &str) -> Match {
    Match {
        start,
        end,
        keyword: keyword.to_owned(),
        kind: MatchKind::Exact,
    }
}

fn fuzzy(start: usize, end: usize, keyword: &str, similarity: u8) -> Match {
    Match {
        start,
        end,
        keyword: keyword.to_owned(),
        kind: MatchKind::Fuzzy { similarity },
    }
}

#[test]
fn test_quick_brown_fox() {
    let outcome = search_keywords("The quick brown fox", ["quick", "cat"], false, false, 80);
    assert_eq!(outcome.matches, vec![exact(4, 9, "quick")]);
    assert_eq!(outcome.counts["quick"], 1);
    assert_eq!(outcome.counts["cat"], 0);
    assert_eq!(outcome.counts.len(), 2);
}

#[test]
fn test_case_sensitivity() {
    let text = "python PYTHON Python";
    let sensitive = find_exact(text, "Python", true);
    assert_eq!(sensitive, vec![exact(14, 20, "Python")]);

    let insensitive = find_exact(text, "Python", false);
    assert_eq!(
        insensitive.iter().map(|m| m.start).collect::<Vec<_>>(),
        vec![0, 7, 14]
    );
}

#[test]
fn test_case_insensitive_unicode() {
    let matches = find_exact("ЮРИЙ ГАГАРИН", "юрий", false);
    assert_eq!(matches, vec![exact(0, 4, "юрий")]);
}

#[test]
fn test_exact_non_overlapping() {
    let matches = find_exact("aaaa", "aa", true);
    assert_eq!(matches, vec![exact(0, 2, "aa"), exact(2, 4, "aa")]);
    assert_eq!(find_exact("aaa", "aa", true).len(), 1);
}

#[test]
fn test_exact_is_literal() {
    let matches = find_exact("cost: $5.00 (approx.)", "(approx.)", true);
    assert_eq!(matches, vec![exact(12, 21, "(approx.)")]);
    assert!(find_exact("abc", ".", true).is_empty());
}

#[test]
fn test_exact_empty_keyword() {
    assert!(find_exact("anything", "", false).is_empty());
    assert!(find_exact("", "a", false).is_empty());
}

#[test]
fn test_exact_char_offsets() {
    let text = "这是一个测试文本，包含文本检索。";
    let matches = find_exact(text, "文本检索", true);
    assert_eq!(matches, vec![exact(11, 15, "文本检索")]);
    assert_eq!(matches[0].text(text), Some("文本检索"));
}

#[test]
fn test_fuzzy_typo() {
    let outcome = search_keywords("Pyton is great", ["Python"], false, true, 80);
    assert_eq!(outcome.matches.len(), 1);
    let m = &outcome.matches[0];
    assert_eq!((m.start, m.end), (0, 5));
    let similarity = m.similarity().unwrap();
    assert!((80..100).contains(&similarity), "{similarity}");
    assert_eq!(outcome.counts["Python"], 1);

    let strict = search_keywords("Pyton is great", ["Python"], false, true, 95);
    assert!(strict.matches.is_empty());
    assert_eq!(strict.counts["Python"], 0);
}

#[test]
fn test_fuzzy_standalone_only() {
    let matches = find_fuzzy("category cat", "cat", 100, true);
    assert_eq!(matches, vec![fuzzy(9, 12, "cat", 100)]);
}

#[test]
fn test_fuzzy_reports_each_standalone_occurrence_once() {
    let matches = find_fuzzy("colour and colour again", "color", 80, true);
    assert_eq!(
        matches.iter().map(|m| (m.start, m.end)).collect::<Vec<_>>(),
        vec![(0, 6), (11, 17)]
    );
}

#[test]
fn test_fuzzy_case_folding() {
    assert!(find_fuzzy("PYTON", "python", 80, true).is_empty());
    assert_eq!(find_fuzzy("PYTON", "python", 80, false).len(), 1);
}

#[test]
fn test_fuzzy_multi_word_keyword_not_found() {
    // tokens are compared one at a time
    assert!(find_fuzzy("new york city", "new york", 80, false).is_empty());
}

#[test]
fn test_fuzzy_threshold_not_clamped() {
    assert_eq!(find_fuzzy("abc", "xyz", -10, true).len(), 1);
    assert!(find_fuzzy("abc", "abc", 150, true).is_empty());
}

#[test]
fn test_fuzzy_dedup_against_exact_of_same_keyword() {
    let outcome = search_keywords("python rocks", ["python"], false, true, 80);
    assert_eq!(outcome.matches, vec![exact(0, 6, "python")]);
    assert_eq!(outcome.counts["python"], 1);
}

#[test]
fn test_fuzzy_kept_when_exact_belongs_to_other_keyword() {
    let outcome = search_keywords("pyton rocks", ["pyton", "python"], false, true, 80);
    assert_eq!(
        outcome.matches,
        vec![exact(0, 5, "pyton"), fuzzy(0, 5, "python", 91)]
    );
    assert_eq!(outcome.counts["pyton"], 1);
    assert_eq!(outcome.counts["python"], 1);
}

#[test]
fn test_search_stable_sort() {
    let outcome = search_keywords("ab", ["b", "ab", "a"], true, false, 80);
    assert_eq!(
        outcome.matches,
        vec![exact(0, 2, "ab"), exact(0, 1, "a"), exact(1, 2, "b")]
    );
}

#[test]
fn test_search_skips_blank_and_trims() {
    let outcome = search_keywords("fox", ["  fox ", "", "   "], false, false, 80);
    assert_eq!(outcome.matches, vec![exact(0, 3, "fox")]);
    assert_eq!(outcome.counts.len(), 1);
}

#[test]
fn test_search_duplicate_keyword_idempotent() {
    let outcome = search_keywords("fox fox", ["fox", "fox"], false, false, 80);
    assert_eq!(outcome.counts["fox"], 2);
    assert_eq!(outcome.matches.len(), 2);
}

#[test]
fn test_search_empty_text() {
    let outcome = search_keywords("", ["a"], false, true, 80);
    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.counts["a"], 0);

    let none = search_keywords::<[&str; 0], &str>("text", [], false, false, 80);
    assert!(none.is_empty());
    assert!(none.counts.is_empty());
}

#[test]
fn test_builder_from_options() {
    let options = SearchOptions {
        case_sensitive: true,
        use_fuzzy: true,
        fuzzy_threshold: 70,
        ..SearchOptions::default()
    };
    let searcher = AssetSearcherBuilder::from_options(&options).build();
    assert!(searcher.is_case_sensitive());
    assert_eq!(searcher.fuzzy_threshold(), Some(70));

    let plain = AssetSearcherBuilder::from_options(&SearchOptions::default()).build();
    assert_eq!(plain.fuzzy_threshold(), None);
}

#[test]
fn test_ranked_assets_and_lookup() {
    let text = "plum apple plum pear plum apple";
    let outcome = search_keywords(text, ["pear", "apple", "plum", "kiwi"], false, false, 80);
    assert_eq!(
        outcome.ranked_assets(),
        vec![("plum", 3), ("apple", 2), ("pear", 1)]
    );
    assert_eq!(outcome.first_match_of("apple"), Some(1));
    assert_eq!(outcome.first_match_of("kiwi"), None);
    assert_eq!(
        outcome.unique_keywords().into_iter().collect::<Vec<_>>(),
        vec!["apple", "pear", "plum"]
    );
    assert_eq!(outcome.matches_of("plum").count(), 3);
}

#[test]
fn test_normalize_keywords() {
    assert_eq!(
        normalize_keywords([" Python", "", "Streamlit", "Python ", "  "]),
        vec!["Python".to_owned(), "Streamlit".to_owned()]
    );
}

#[test]
fn test_highlight_no_matches_returns_text() {
    let text = "x".repeat(2500);
    assert_eq!(highlight(&text, &[], 1000).unwrap(), text);
}

#[test]
fn test_highlight_single_chunk() {
    let text = "Pyton and python";
    let outcome = search_keywords(text, ["python"], false, true, 80);
    assert_eq!(
        highlight(text, &outcome.matches, 1000).unwrap(),
        r#"<span class="highlight-fuzzy">Pyton</span> and <span class="highlight-exact">python</span>"#
    );
}

#[test]
fn test_highlight_shifts_after_separators() {
    let text = format!("{}needle", "a".repeat(10));
    let outcome = search_keywords(&text, ["needle"], true, false, 80);
    assert_eq!(outcome.matches, vec![exact(10, 16, "needle")]);
    assert_eq!(
        highlight(&text, &outcome.matches, 4).unwrap(),
        r#"aaaa<br><br>aaaa<br><br>aa<span class="highlight-exact">ne<br><br>edle</span>"#
    );
}

#[test]
fn test_highlight_match_starting_on_boundary() {
    let text = "abcdneedle";
    let matches = find_exact(text, "needle", true);
    assert_eq!(
        highlight(text, &matches, 4).unwrap(),
        r#"abcd<br><br><span class="highlight-exact">need<br><br>le</span>"#
    );
}

#[test]
fn test_highlight_overlap_keeps_earliest_longest() {
    let text = "New York City";
    let outcome = search_keywords(text, ["York", "New York", "York City"], true, false, 80);
    assert_eq!(outcome.matches.len(), 3);
    assert_eq!(
        highlight(text, &outcome.matches, 1000).unwrap(),
        r#"<span class="highlight-exact">New York</span> City"#
    );
}

#[test]
fn test_highlight_custom_classes() {
    let options = HighlightOptions::default().classes("hit", "near-hit");
    let highlighter = Highlighter::new(options).unwrap();
    let matches = vec![exact(0, 1, "a"), fuzzy(4, 5, "c", 90)];
    assert_eq!(
        highlighter.highlight("a b c", &matches).unwrap(),
        r#"<span class="hit">a</span> b <span class="near-hit">c</span>"#
    );
}

#[test]
fn test_highlight_invalid_chunk_size() {
    assert_eq!(
        highlight("abc", &[exact(0, 1, "a")], 0),
        Err(Error::InvalidConfiguration(
            "chunk size must be at least 1".to_owned()
        ))
    );
}

#[test]
fn test_segments_cover_chunked_text() {
    let text = "one two three four";
    let outcome = search_keywords(text, ["two", "four"], false, false, 80);
    let highlighter = Highlighter::new(HighlightOptions::default().chunk_size(5)).unwrap();
    let chunked = highlighter.chunk(text).unwrap();

    let segments: Vec<Segment> = highlighter.segments(&chunked, &outcome.matches).collect();
    let rebuilt: String = segments
        .iter()
        .map(|s| match s {
            Segment::Matched(span) => span.text,
            Segment::Unmatched(s) => s,
        })
        .collect();
    assert_eq!(rebuilt, chunked.as_str());

    let marked: Vec<&str> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Matched(span) => Some(span.text),
            Segment::Unmatched(_) => None,
        })
        .collect();
    assert_eq!(marked, vec!["t<br><br>wo", "f<br><br>our"]);
}

#[test]
fn test_segments_skip_out_of_range_match() {
    let highlighter = Highlighter::default();
    let chunked = highlighter.chunk("short").unwrap();
    let matches = vec![exact(3, 40, "gone")];
    let segments: Vec<Segment> = highlighter.segments(&chunked, &matches).collect();
    assert_eq!(segments, vec![Segment::Unmatched("short")]);
}

#[test]
fn test_options_from_partial_json() {
    let options: SearchOptions =
        serde_json::from_str(r#"{"use_fuzzy": true, "highlight": {"chunk_size": 50}}"#).unwrap();
    assert!(options.use_fuzzy);
    assert!(!options.case_sensitive);
    assert_eq!(options.fuzzy_threshold, 80);
    assert_eq!(options.highlight.chunk_size, 50);
    assert_eq!(options.highlight.separator, "<br><br>");

    let invalid: SearchOptions =
        serde_json::from_str(r#"{"highlight": {"chunk_size": 0}}"#).unwrap();
    assert!(matches!(
        invalid.validate(),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_match_serialization() {
    let json = serde_json::to_value(fuzzy(0, 5, "Python", 91)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "start": 0,
            "end": 5,
            "keyword": "Python",
            "type": "fuzzy",
            "similarity": 91
        })
    );
}

#[test]
fn test_session_navigation() {
    let mut session = Session::new("Python, Streamlit and Python again");
    let options = SearchOptions::default();
    let response = session.run(["Streamlit", "python", "python"], &options).unwrap();
    assert_eq!(response.outcome.matches.len(), 3);
    assert!(response.annotated.contains(r#"<span class="highlight-exact">Streamlit</span>"#));

    assert_eq!(session.position(), Some((1, 3)));
    assert_eq!(session.previous_match().map(|m| m.start), Some(0));
    assert_eq!(session.next_match().map(|m| m.keyword.as_str()), Some("Streamlit"));
    assert_eq!(session.next_match().map(|m| m.start), Some(22));
    assert_eq!(session.next_match().map(|m| m.start), Some(22));
    assert_eq!(session.position(), Some((3, 3)));

    assert_eq!(session.select_keyword("Streamlit"), Some(1));
    assert_eq!(session.selected_keyword(), Some("Streamlit"));
    assert_eq!(session.select_keyword("missing"), None);
    assert_eq!(session.position(), Some((2, 3)));
    assert_eq!(session.ranked_assets(), vec![("python", 2), ("Streamlit", 1)]);
}

#[test]
fn test_session_invalid_options_keep_previous_response() {
    let mut session = Session::new("fox");
    session.run(["fox"], &SearchOptions::default()).unwrap();

    let mut options = SearchOptions::default();
    options.highlight.chunk_size = 0;
    assert!(session.run(["fox"], &options).is_err());
    assert_eq!(session.response().unwrap().outcome.counts["fox"], 1);

    session.reset();
    assert!(session.response().is_none());
    assert_eq!(session.position(), None);
    assert!(session.text().is_empty());
}
