use crate::{Error, Result};
use std::ops::Range;

/// Text split into `chunk_size`-`char` pieces joined by a separator.
///
/// The separator goes between chunks, never after the last one. Offsets of the
/// original text are translated with [`remap`](Self::remap) and
/// [`remap_range`](Self::remap_range).
///
/// ```rust
/// use asset_highlighter::Chunked;
///
/// let chunked = Chunked::new("abcdefg", 3, "|").unwrap();
/// assert_eq!(chunked.as_str(), "abc|def|g");
/// assert_eq!(chunked.remap(3), 4);
/// assert_eq!(chunked.strip(), "abcdefg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunked {
    text: String,
    /// Byte offset of every `char` of `text`, plus `text.len()`.
    bounds: Vec<usize>,
    chunk_size: usize,
    separator_len: usize,
    original_len: usize,
}

impl Chunked {
    /// Fails with [`Error::InvalidConfiguration`] when `chunk_size` is zero.
    pub fn new(text: &str, chunk_size: usize, separator: &str) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidConfiguration(
                "chunk size must be at least 1".to_owned(),
            ));
        }

        let original_len = text.chars().count();
        let boundaries = original_len.saturating_sub(1) / chunk_size;
        let mut chunked = String::with_capacity(text.len() + boundaries * separator.len());
        for (i, c) in text.chars().enumerate() {
            if i > 0 && i % chunk_size == 0 {
                chunked.push_str(separator);
            }
            chunked.push(c);
        }

        let bounds = chunked
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(chunked.len()))
            .collect();

        Ok(Self {
            text: chunked,
            bounds,
            chunk_size,
            separator_len: separator.chars().count(),
            original_len,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    #[inline]
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of separators inserted.
    #[must_use]
    pub fn boundaries(&self) -> usize {
        self.original_len.saturating_sub(1) / self.chunk_size
    }

    /// Position in the chunked text of the original `char` at `offset`.
    /// `offset == len` maps to the end of the chunked text.
    #[must_use]
    pub fn remap(&self, offset: usize) -> usize {
        offset + (offset / self.chunk_size).min(self.boundaries()) * self.separator_len
    }

    /// Chunked-text range of an original range. A range crossing a chunk
    /// boundary keeps the separator inside it.
    #[must_use]
    pub fn remap_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self.remap(range.start);
        if range.end <= range.start {
            return start..start;
        }
        start..self.remap(range.end - 1) + 1
    }

    /// Slice of the chunked text by `char` range.
    ///
    /// # Panics
    /// When the range lies outside the chunked text.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.text[self.bounds[range.start]..self.bounds[range.end]]
    }

    /// Length of the original text in `char`s.
    #[inline]
    #[must_use]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Length of the chunked text in `char`s.
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// The chunks, without separators.
    pub fn chunks(&self) -> impl Iterator<Item = &str> + '_ {
        let stride = self.chunk_size + self.separator_len;
        (0..=self.boundaries())
            .filter(move |_| self.original_len > 0)
            .map(move |k| {
                let start = k * stride;
                let len = self.chunk_size.min(self.original_len - k * self.chunk_size);
                self.slice(start..start + len)
            })
    }

    /// The original text.
    #[must_use]
    pub fn strip(&self) -> String {
        self.chunks().collect()
    }
}
