use crate::matches::display_order;
use crate::{Chunked, HighlightedSpan, Highlighter, Match, Segment};

impl Highlighter {
    /// Returns an **iterator** that yields interleaving [`Segment::Matched`]
    /// and [`Segment::Unmatched`] items covering all of `chunked`.
    ///
    /// Concatenating the segment texts reproduces the chunked text. Matches
    /// that overlap an earlier displayed match, or that lie outside the text,
    /// are not yielded.
    pub fn segments<'a>(
        &self,
        chunked: &'a Chunked,
        matches: &'a [Match],
    ) -> impl Iterator<Item = Segment<'a>> {
        let original_len = chunked.original_len();
        let mut segments = Vec::new();
        let mut last = 0;
        for m in display_order(matches) {
            if m.end > original_len {
                tracing::debug!(
                    keyword = %m.keyword,
                    end = m.end,
                    original_len,
                    "skipping match outside the text"
                );
                continue;
            }
            let range = chunked.remap_range(m.start..m.end);
            if range.start > last {
                segments.push(Segment::Unmatched(chunked.slice(last..range.start)));
            }
            last = range.end;
            segments.push(Segment::Matched(HighlightedSpan {
                source: m,
                text: chunked.slice(range.clone()),
                chunked: range,
            }));
        }
        if last < chunked.char_len() {
            segments.push(Segment::Unmatched(chunked.slice(last..chunked.char_len())));
        }
        segments.into_iter()
    }
}
