use crate::{Chunked, HighlightOptions, Match, Result, Segment};
use std::fmt::Write;
use tracing::debug;

/// Renders matches as kind-tagged markers over chunked text.
///
/// ```rust
/// use asset_highlighter::{HighlightOptions, Highlighter, search_keywords};
///
/// let text = "abcdef abc";
/// let outcome = search_keywords(text, ["abc"], true, false, 80);
/// let options = HighlightOptions::default().chunk_size(4).separator("|");
/// let highlighter = Highlighter::new(options).unwrap();
/// assert_eq!(
///     highlighter.highlight(text, &outcome.matches).unwrap(),
///     r#"<span class="highlight-exact">abc</span>d|ef <span class="highlight-exact">a|bc</span>"#,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighter {
    pub(crate) options: HighlightOptions,
}

impl Highlighter {
    /// Fails with [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// when the options do not validate.
    pub fn new(options: HighlightOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    #[must_use]
    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// Chunks `text` with this highlighter's chunk size and separator.
    pub fn chunk(&self, text: &str) -> Result<Chunked> {
        Chunked::new(text, self.options.chunk_size, &self.options.separator)
    }

    /// Produces the annotated text.
    ///
    /// With no matches `text` is returned as is, without chunking. Otherwise
    /// the chunked text is copied with every displayed match wrapped in a
    /// marker. Where matches overlap, the earliest (then longest) one is
    /// marked and the others are left out, so markers never nest.
    pub fn highlight(&self, text: &str, matches: &[Match]) -> Result<String> {
        if matches.is_empty() {
            return Ok(text.to_owned());
        }

        let chunked = self.chunk(text)?;
        let mut result = String::with_capacity(chunked.as_str().len() + matches.len() * 40);
        let mut marked = 0usize;
        for segment in self.segments(&chunked, matches) {
            match segment {
                Segment::Matched(span) => {
                    marked += 1;
                    let class = self.options.class_for(span.source.kind);
                    // writing into a String cannot fail
                    let _ = write!(result, r#"<span class="{class}">{}</span>"#, span.text);
                }
                Segment::Unmatched(s) => result.push_str(s),
            }
        }
        debug!(
            matches = matches.len(),
            marked,
            chunks = chunked.boundaries() + 1,
            "text highlighted"
        );
        Ok(result)
    }
}

/// [`Highlighter::highlight`] with the default markers and separator and the
/// given chunk size.
///
/// ```rust
/// use asset_highlighter::highlight;
///
/// assert_eq!(highlight("plain text", &[], 1000).unwrap(), "plain text");
/// assert!(highlight("plain text", &[], 0).is_err());
/// ```
pub fn highlight(text: &str, matches: &[Match], chunk_size: usize) -> Result<String> {
    Highlighter::new(HighlightOptions::default().chunk_size(chunk_size))?.highlight(text, matches)
}
