//! Character view over a borrowed `&str`.
//!
//! [`Text`] is the value type every operation hangs off. It records the byte offset at which each
//! character unit starts, so that character-indexed access, slicing and search results are all
//! O(1) conversions instead of re-walking the string.
//!
//! ## Notes
//! - **Indexing model**: [`CharUnit::Scalar`] (default) indexes by Rust `char`, matching Python.
//!   [`CharUnit::Grapheme`] indexes by extended grapheme cluster.
//! - Substring search is delegated to `str::find`/`str::rfind`. A raw match that would start or end
//!   inside a character unit (only possible for graphemes) is skipped.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{CharUnit, StrConfig};

/// A match of a needle, as a half-open range of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// An immutable text viewed as a sequence of characters.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    source: &'a str,
    /// Byte offset of every character start, followed by `source.len()`.
    bounds: Vec<usize>,
    config: StrConfig,
}

impl<'a> Text<'a> {
    /// View `source` with the default configuration (Unicode scalar characters).
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, StrConfig::default())
    }

    /// View `source` with an explicit configuration.
    pub fn with_config(source: &'a str, config: StrConfig) -> Self {
        let mut bounds: Vec<usize> = match config.unit {
            CharUnit::Scalar => source.char_indices().map(|(i, _)| i).collect(),
            CharUnit::Grapheme => source.grapheme_indices(true).map(|(i, _)| i).collect(),
        };
        bounds.push(source.len());
        Self { source, bounds, config }
    }

    /// View another string with this text's configuration.
    pub(crate) fn sibling<'b>(&self, source: &'b str) -> Text<'b> {
        Text::with_config(source, self.config)
    }

    pub fn as_str(&self) -> &'a str {
        self.source
    }

    pub fn config(&self) -> StrConfig {
        self.config
    }

    /// `str.__len__()`: the number of characters.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Length as a signed index domain value.
    #[inline]
    pub(crate) fn size(&self) -> i64 {
        self.len() as i64
    }

    /// The characters in `[start, end)` as a borrowed slice of the source.
    ///
    /// Callers must pass `start <= end <= len()`.
    #[inline]
    pub(crate) fn substr(&self, start: usize, end: usize) -> &'a str {
        &self.source[self.bounds[start]..self.bounds[end]]
    }

    /// The character at `index`. Callers must pass `index < len()`.
    #[inline]
    pub(crate) fn unit(&self, index: usize) -> &'a str {
        self.substr(index, index + 1)
    }

    /// Iterate characters as string slices.
    pub fn units(&self) -> impl DoubleEndedIterator<Item = &'a str> + ExactSizeIterator + '_ {
        self.bounds.windows(2).map(|w| &self.source[w[0]..w[1]])
    }

    /// Iterate the base scalar of every character (the character itself in scalar mode).
    ///
    /// Unicode classification predicates are evaluated on this scalar.
    pub(crate) fn heads(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.units().filter_map(|u| u.chars().next())
    }

    #[inline]
    fn unit_at_byte(&self, byte: usize) -> Option<usize> {
        self.bounds.binary_search(&byte).ok()
    }

    fn aligned(&self, at: usize, len: usize) -> Option<Match> {
        let start = self.unit_at_byte(at)?;
        let end = self.unit_at_byte(at + len)?;
        Some(Match { start, end })
    }

    /// Find the first occurrence of `needle` lying entirely within characters `[from, to)`.
    ///
    /// Callers must pass `from <= to <= len()`.
    pub(crate) fn find_forward(&self, needle: &str, from: usize, to: usize) -> Option<Match> {
        let hi = self.bounds[to];
        let haystack = &self.source[..hi];
        let mut pos = self.bounds[from];
        while pos <= hi {
            let at = pos + haystack[pos..].find(needle)?;
            if let Some(found) = self.aligned(at, needle.len()) {
                return Some(found);
            }
            pos = at + haystack[at..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }

    /// Find the last occurrence of `needle` lying entirely within characters `[from, to)`.
    ///
    /// Callers must pass `from <= to <= len()`.
    pub(crate) fn find_backward(&self, needle: &str, from: usize, to: usize) -> Option<Match> {
        let lo = self.bounds[from];
        let mut hi = self.bounds[to];
        while hi >= lo {
            let at = lo + self.source[lo..hi].rfind(needle)?;
            if let Some(found) = self.aligned(at, needle.len()) {
                return Some(found);
            }
            // Retry with a window ending one scalar before this match's end.
            hi = self.source[..at + needle.len()].char_indices().next_back().map(|(b, _)| b)?;
        }
        None
    }

    /// Match `needle` at the very start of characters `[from, to)`.
    pub(crate) fn match_prefix(&self, needle: &str, from: usize, to: usize) -> Option<Match> {
        if !self.substr(from, to).starts_with(needle) {
            return None;
        }
        self.aligned(self.bounds[from], needle.len())
    }

    /// Match `needle` at the very end of characters `[from, to)`.
    pub(crate) fn match_suffix(&self, needle: &str, from: usize, to: usize) -> Option<Match> {
        if !self.substr(from, to).ends_with(needle) {
            return None;
        }
        self.aligned(self.bounds[to] - needle.len(), needle.len())
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(source: &'a str) -> Self {
        Text::new(source)
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}
