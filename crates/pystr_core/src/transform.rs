//! Case, width, fill, strip and repr transforms.

use crate::errors::{StrError, StrResult};
use crate::predicates::{is_cased, is_printable, is_space};
use crate::text::Text;

/// Repeat `s` `times` times; non-positive counts give the empty string.
fn repeat(s: &str, times: i64) -> String {
    usize::try_from(times).map_or_else(|_| String::new(), |n| s.repeat(n))
}

impl<'a> Text<'a> {
    /// Resolve and validate a fill character (defaults to a space).
    fn fill_char<'f>(&self, fillchar: Option<&'f str>) -> StrResult<&'f str> {
        let fill = fillchar.unwrap_or(" ");
        if self.sibling(fill).len() != 1 {
            return Err(StrError::FillCharLength);
        }
        Ok(fill)
    }

    /// Fill characters needed to reach `width`; negative when the text is already wider.
    fn padding(&self, width: i64) -> i64 {
        width.saturating_sub(self.size())
    }

    /// Fill characters placed left of the text by `center`, for a positive `padding`.
    fn center_left(&self, padding: i64) -> i64 {
        if padding % 2 != 0 && self.size() % 2 == 0 {
            padding / 2 + 1
        } else {
            padding / 2
        }
    }

    /// `str + other`
    pub fn add(&self, other: &str) -> String {
        let mut out = String::with_capacity(self.as_str().len() + other.len());
        out.push_str(self.as_str());
        out.push_str(other);
        out
    }

    /// `str * times`
    pub fn mul(&self, times: i64) -> String {
        repeat(self.as_str(), times)
    }

    pub fn lower(&self) -> String {
        self.as_str().to_lowercase()
    }

    pub fn upper(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// `str.casefold()`: lowercase plus the full case folds that lowercasing misses.
    pub fn casefold(&self) -> String {
        let mut out = String::with_capacity(self.as_str().len());
        for c in self.as_str().chars().flat_map(char::to_lowercase) {
            match c {
                'ß' => out.push_str("ss"),
                'ς' => out.push('σ'),
                'ſ' => out.push('s'),
                _ => out.push(c),
            }
        }
        out
    }

    /// `str.swapcase()`
    pub fn swapcase(&self) -> String {
        let mut out = String::with_capacity(self.as_str().len());
        for c in self.as_str().chars() {
            if c.is_lowercase() {
                out.extend(c.to_uppercase());
            } else if c.is_uppercase() {
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// `str.capitalize()`: first character uppercased, the rest lowercased.
    pub fn capitalize(&self) -> String {
        let mut units = self.units();
        let Some(first) = units.next() else {
            return String::new();
        };
        let mut out = first.to_uppercase();
        for unit in units {
            out.push_str(&unit.to_lowercase());
        }
        out
    }

    /// `str.title()`.
    ///
    /// A character starts a word when the previous character is uncased (the start of the text
    /// counts as uncased). Word starts are uppercased, continuations lowercased.
    pub fn title(&self) -> String {
        let mut out = String::with_capacity(self.as_str().len());
        let mut previous_is_cased = false;
        for unit in self.units() {
            if previous_is_cased {
                out.push_str(&unit.to_lowercase());
            } else {
                out.push_str(&unit.to_uppercase());
            }
            previous_is_cased = unit.chars().next().is_some_and(is_cased);
        }
        out
    }

    /// `str.center(width, fillchar)`.
    ///
    /// ## Returns
    /// - `Ok(String)`: the centered text, or the text unchanged if it is at least `width` long.
    /// - `Err(StrError::FillCharLength)`: if `fillchar` is not exactly one character.
    ///
    /// ## Notes
    /// - When the padding is odd and the text length is even, the extra fill character goes on the
    ///   left: `"ab".center(5) == "  ab "` but `"a".center(4) == " a  "`.
    pub fn center(&self, width: i64, fillchar: Option<&str>) -> StrResult<String> {
        let fill = self.fill_char(fillchar)?;
        let padding = self.padding(width);
        if padding <= 0 {
            return Ok(self.as_str().to_string());
        }

        let left = self.center_left(padding);
        let mut out = repeat(fill, left);
        out.push_str(self.as_str());
        out.push_str(&repeat(fill, padding - left));
        Ok(out)
    }

    /// `str.ljust(width, fillchar)`
    pub fn ljust(&self, width: i64, fillchar: Option<&str>) -> StrResult<String> {
        let fill = self.fill_char(fillchar)?;
        Ok(self.add(&repeat(fill, self.padding(width))))
    }

    /// `str.rjust(width, fillchar)`
    pub fn rjust(&self, width: i64, fillchar: Option<&str>) -> StrResult<String> {
        let fill = self.fill_char(fillchar)?;
        let mut out = repeat(fill, self.padding(width));
        out.push_str(self.as_str());
        Ok(out)
    }

    /// `str.zfill(width)`: left-pad with zeros, keeping a leading sign in front.
    pub fn zfill(&self, width: i64) -> String {
        let sign = usize::from(self.startswith_any(&["+", "-"], None, None));
        let mut out = String::with_capacity(self.as_str().len());
        out.push_str(self.substr(0, sign));
        out.push_str(&repeat("0", self.padding(width)));
        out.push_str(self.substr(sign, self.len()));
        out
    }

    /// `str.expandtabs(tabsize)`.
    ///
    /// ## Parameters
    /// - `tabsize`: column width of a tab stop; `None` uses the configured default. A value of zero
    ///   or less removes tabs.
    ///
    /// ## Notes
    /// - The column resets after `\r` and `\n`.
    pub fn expandtabs(&self, tabsize: Option<i64>) -> String {
        let tabsize = tabsize.unwrap_or(self.config().tab_size);
        if tabsize <= 0 {
            return self.as_str().replace('\t', "");
        }

        let mut out = String::with_capacity(self.as_str().len());
        let mut column: i64 = 0;
        for unit in self.units() {
            if unit == "\t" {
                let spaces = tabsize - column % tabsize;
                out.push_str(&repeat(" ", spaces));
                column += spaces;
            } else if unit.starts_with(['\r', '\n']) {
                out.push_str(unit);
                column = 0;
            } else {
                out.push_str(unit);
                column += 1;
            }
        }
        out
    }

    /// Character offsets left after trimming `chars` (whitespace if `None`) from either side.
    fn strip_bounds(&self, chars: Option<&str>, left: bool, right: bool) -> (usize, usize) {
        let set: Option<Vec<&str>> = chars.map(|chars| self.sibling(chars).units().collect());
        let strippable = |i: usize| {
            let unit = self.unit(i);
            match &set {
                Some(set) => set.contains(&unit),
                None => unit.chars().next().is_some_and(is_space),
            }
        };

        let mut start = 0;
        let mut end = self.len();
        if left {
            while start < end && strippable(start) {
                start += 1;
            }
        }
        if right {
            while end > start && strippable(end - 1) {
                end -= 1;
            }
        }
        (start, end)
    }

    /// `str.strip(chars)`: trim characters in `chars` (whitespace if `None`) from both ends.
    pub fn strip(&self, chars: Option<&str>) -> &'a str {
        let (start, end) = self.strip_bounds(chars, true, true);
        self.substr(start, end)
    }

    /// `str.lstrip(chars)`
    pub fn lstrip(&self, chars: Option<&str>) -> &'a str {
        let (start, end) = self.strip_bounds(chars, true, false);
        self.substr(start, end)
    }

    /// `str.rstrip(chars)`
    pub fn rstrip(&self, chars: Option<&str>) -> &'a str {
        let (start, end) = self.strip_bounds(chars, false, true);
        self.substr(start, end)
    }

    /// `repr(str)`: a quoted, escaped literal.
    ///
    /// Single quotes are used unless the text contains a single quote and no double quote.
    pub fn repr(&self) -> String {
        let s = self.as_str();
        let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

        let mut out = String::with_capacity(s.len() + 2);
        out.push(quote);
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if is_printable(c) => out.push(c),
                c if (c as u32) < 0x100 => out.push_str(&format!("\\x{:02x}", c as u32)),
                c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push_str(&format!("\\U{:08x}", c as u32)),
            }
        }
        out.push(quote);
        out
    }
}
