//! Partitioning, splitting, and joining.
//!
//! Every fragment returned here is a sub-slice of the input, so results borrow from it.

use crate::errors::{StrError, StrResult};
use crate::predicates::is_space;
use crate::search::limit;
use crate::text::Text;

/// Line boundaries recognised by `str.splitlines()`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl<'a> Text<'a> {
    fn is_space_at(&self, index: usize) -> bool {
        self.unit(index).chars().next().is_some_and(is_space)
    }

    /// `str.partition(sep)`: split around the first occurrence of `sep`.
    ///
    /// ## Returns
    /// - `Ok([head, sep, tail])`, or `[text, "", ""]` if `sep` does not occur.
    /// - `Err(StrError::EmptySeparator)`: if `sep` is empty.
    pub fn partition(&self, sep: &str) -> StrResult<[&'a str; 3]> {
        if sep.is_empty() {
            return Err(StrError::EmptySeparator);
        }
        let len = self.len();
        Ok(match self.find_forward(sep, 0, len) {
            Some(m) => [self.substr(0, m.start), self.substr(m.start, m.end), self.substr(m.end, len)],
            None => [self.as_str(), "", ""],
        })
    }

    /// `str.rpartition(sep)`: split around the last occurrence of `sep`.
    ///
    /// ## Returns
    /// - `Ok([head, sep, tail])`, or `["", "", text]` if `sep` does not occur.
    /// - `Err(StrError::EmptySeparator)`: if `sep` is empty.
    pub fn rpartition(&self, sep: &str) -> StrResult<[&'a str; 3]> {
        if sep.is_empty() {
            return Err(StrError::EmptySeparator);
        }
        let len = self.len();
        Ok(match self.find_backward(sep, 0, len) {
            Some(m) => [self.substr(0, m.start), self.substr(m.start, m.end), self.substr(m.end, len)],
            None => ["", "", self.as_str()],
        })
    }

    /// `str.split(sep, maxsplit)`.
    ///
    /// ## Parameters
    /// - `sep`: delimiter. `None` splits on runs of whitespace and drops empty fragments at the
    ///   edges; an explicit separator keeps every fragment, empty ones included.
    /// - `maxsplit`: maximum number of splits; `None` or negative means unlimited. The remainder is
    ///   returned unsplit as the last fragment.
    ///
    /// ## Returns
    /// - `Ok(Vec<&str>)`: the fragments, left to right.
    /// - `Err(StrError::EmptySeparator)`: if `sep` is `Some("")`.
    ///
    /// ## Examples
    /// ```rust
    /// use pystr_core::Text;
    /// assert_eq!(Text::new("  a  b  ").split(None, None).unwrap(), vec!["a", "b"]);
    /// assert_eq!(Text::new("1,2,,3").split(Some(","), None).unwrap(), vec!["1", "2", "", "3"]);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.len(), maxsplit = ?maxsplit))]
    pub fn split(&self, sep: Option<&str>, maxsplit: Option<i64>) -> StrResult<Vec<&'a str>> {
        let remaining = limit(maxsplit);
        match sep {
            None => Ok(self.split_whitespace(remaining)),
            Some("") => Err(StrError::EmptySeparator),
            Some(sep) => {
                let len = self.len();
                let mut parts = Vec::new();
                let mut pos = 0;
                while parts.len() < remaining {
                    let Some(m) = self.find_forward(sep, pos, len) else {
                        break;
                    };
                    parts.push(self.substr(pos, m.start));
                    pos = m.end;
                }
                parts.push(self.substr(pos, len));
                Ok(parts)
            }
        }
    }

    /// `str.rsplit(sep, maxsplit)`: like [`Text::split`], but splits are taken from the right.
    ///
    /// Fragments are still returned left to right.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.len(), maxsplit = ?maxsplit))]
    pub fn rsplit(&self, sep: Option<&str>, maxsplit: Option<i64>) -> StrResult<Vec<&'a str>> {
        let remaining = limit(maxsplit);
        match sep {
            None => Ok(self.rsplit_whitespace(remaining)),
            Some("") => Err(StrError::EmptySeparator),
            Some(sep) => {
                let mut parts = Vec::new();
                let mut end = self.len();
                while parts.len() < remaining {
                    let Some(m) = self.find_backward(sep, 0, end) else {
                        break;
                    };
                    parts.push(self.substr(m.end, end));
                    end = m.start;
                }
                parts.push(self.substr(0, end));
                parts.reverse();
                Ok(parts)
            }
        }
    }

    fn split_whitespace(&self, mut remaining: usize) -> Vec<&'a str> {
        let len = self.len();
        let mut parts = Vec::new();
        let mut i = 0;
        while remaining > 0 {
            while i < len && self.is_space_at(i) {
                i += 1;
            }
            if i == len {
                break;
            }
            let word = i;
            while i < len && !self.is_space_at(i) {
                i += 1;
            }
            parts.push(self.substr(word, i));
            remaining -= 1;
        }

        // Split limit reached: the rest is one fragment without its leading whitespace.
        while i < len && self.is_space_at(i) {
            i += 1;
        }
        if i < len {
            parts.push(self.substr(i, len));
        }
        parts
    }

    fn rsplit_whitespace(&self, mut remaining: usize) -> Vec<&'a str> {
        let mut parts = Vec::new();
        // `i` is the exclusive end of the unscanned prefix.
        let mut i = self.len();
        while remaining > 0 {
            while i > 0 && self.is_space_at(i - 1) {
                i -= 1;
            }
            if i == 0 {
                break;
            }
            let word_end = i;
            while i > 0 && !self.is_space_at(i - 1) {
                i -= 1;
            }
            parts.push(self.substr(i, word_end));
            remaining -= 1;
        }

        while i > 0 && self.is_space_at(i - 1) {
            i -= 1;
        }
        if i > 0 {
            parts.push(self.substr(0, i));
        }
        parts.reverse();
        parts
    }

    /// `str.splitlines(keepends)`.
    ///
    /// `\r\n` counts as a single line break. A trailing line break does not produce an empty
    /// final line.
    pub fn splitlines(&self, keepends: bool) -> Vec<&'a str> {
        let len = self.len();
        let mut lines = Vec::new();
        let mut i = 0;
        while i < len {
            let line = i;
            while i < len && !self.unit(i).chars().next().is_some_and(is_line_break) {
                i += 1;
            }
            let mut eol = i;
            if i < len {
                i += if self.unit(i) == "\r" && i + 1 < len && self.unit(i + 1) == "\n" { 2 } else { 1 };
                if keepends {
                    eol = i;
                }
            }
            lines.push(self.substr(line, eol));
        }
        lines
    }

    /// `sep.join(items)`: concatenate `items` with this text between them.
    pub fn join<I, S>(&self, items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out.push_str(self.as_str());
            }
            out.push_str(item.as_ref());
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{CharUnit, StrConfig};

    fn t(s: &str) -> Text<'_> {
        Text::new(s)
    }

    // ========================================
    // partition / rpartition
    // ========================================

    #[test]
    fn test_partition() {
        assert_eq!(t("key=value").partition("="), Ok(["key", "=", "value"]));
        assert_eq!(t("a=b=c").partition("="), Ok(["a", "=", "b=c"]));
        assert_eq!(t("noequals").partition("="), Ok(["noequals", "", ""]));
        assert_eq!(t("x").partition(""), Err(StrError::EmptySeparator));
    }

    #[test]
    fn test_rpartition() {
        assert_eq!(t("a=b=c").rpartition("="), Ok(["a=b", "=", "c"]));
        assert_eq!(t("noequals").rpartition("="), Ok(["", "", "noequals"]));
        assert_eq!(t("x").rpartition(""), Err(StrError::EmptySeparator));
    }

    // ========================================
    // split
    // ========================================

    #[test]
    fn test_split_whitespace() {
        assert_eq!(t("  a  b  ").split(None, None).unwrap(), vec!["a", "b"]);
        assert_eq!(t("a\tb\nc").split(None, None).unwrap(), vec!["a", "b", "c"]);
        assert!(t("   ").split(None, None).unwrap().is_empty());
        assert!(t("").split(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_split_whitespace_maxsplit() {
        assert_eq!(t("  a b  c ").split(None, Some(1)).unwrap(), vec!["a", "b  c "]);
        assert_eq!(t("a ").split(None, Some(1)).unwrap(), vec!["a"]);
        assert_eq!(t(" a b ").split(None, Some(0)).unwrap(), vec!["a b "]);
        assert_eq!(t("a\t\tb").split(None, Some(-1)).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_split_explicit() {
        assert_eq!(t("1,2,,3").split(Some(","), None).unwrap(), vec!["1", "2", "", "3"]);
        assert_eq!(t(",a,").split(Some(","), None).unwrap(), vec!["", "a", ""]);
        assert_eq!(t(" a  b ").split(Some(" "), None).unwrap(), vec!["", "a", "", "b", ""]);
        assert_eq!(t("a,b,c").split(Some(","), Some(1)).unwrap(), vec!["a", "b,c"]);
        assert_eq!(t("a::b").split(Some("::"), None).unwrap(), vec!["a", "b"]);
        assert_eq!(t("").split(Some(","), None).unwrap(), vec![""]);
        assert_eq!(t("a").split(Some(""), None), Err(StrError::EmptySeparator));
    }

    #[test]
    fn test_rsplit_whitespace() {
        assert_eq!(t("  a  b  ").rsplit(None, None).unwrap(), vec!["a", "b"]);
        assert_eq!(t("  a b  c ").rsplit(None, Some(1)).unwrap(), vec!["  a b", "c"]);
        assert_eq!(t(" a b ").rsplit(None, Some(0)).unwrap(), vec![" a b"]);
    }

    #[test]
    fn test_rsplit_explicit() {
        assert_eq!(t("a,b,c").rsplit(Some(","), Some(1)).unwrap(), vec!["a,b", "c"]);
        assert_eq!(t("1,2,,3").rsplit(Some(","), None).unwrap(), vec!["1", "2", "", "3"]);
        assert_eq!(t("aaa").rsplit(Some("aa"), None).unwrap(), vec!["a", ""]);
        assert_eq!(t("a").rsplit(Some(""), None), Err(StrError::EmptySeparator));
    }

    // ========================================
    // splitlines / join
    // ========================================

    #[test]
    fn test_splitlines() {
        assert_eq!(t("a\nb\r\nc\rd").splitlines(false), vec!["a", "b", "c", "d"]);
        assert_eq!(t("a\nb\r\n").splitlines(true), vec!["a\n", "b\r\n"]);
        assert_eq!(t("a\n\nb").splitlines(false), vec!["a", "", "b"]);
        assert_eq!(t("a\u{2028}b\x0cc").splitlines(false), vec!["a", "b", "c"]);
        assert!(t("").splitlines(false).is_empty());
    }

    #[test]
    fn test_splitlines_graphemes() {
        let text = Text::with_config("a\r\nb", StrConfig::new().with_unit(CharUnit::Grapheme));
        assert_eq!(text.splitlines(true), vec!["a\r\n", "b"]);
    }

    #[test]
    fn test_join() {
        assert_eq!(t("-").join(["a", "b", "c"]), "a-b-c");
        assert_eq!(t(", ").join(vec!["x".to_string()]), "x");
        assert_eq!(t("-").join(Vec::<String>::new()), "");
    }
}
