//! Search-composed operations: find, count, prefix/suffix tests, replace.
//!
//! All of these resolve a `(start, end)` window through [`adjust_indices`] (or the single-step rule
//! for `count("")`) and then delegate to the character view's search primitives. An empty needle
//! in `find`/`rfind` is placed from a single requested bound instead.

use crate::errors::{StrError, StrResult};
use crate::offsets::{adjust_indices, normalize};
use crate::text::Text;

/// Turn an optional Python-style count into an iteration limit (`None`/negative = unlimited).
pub(crate) fn limit(count: Option<i64>) -> usize {
    match count {
        Some(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => usize::MAX,
    }
}

impl<'a> Text<'a> {
    /// Resolve a search window, or `None` if it is empty because `start` is past `end`.
    fn search_window(&self, start: Option<i64>, end: Option<i64>) -> Option<(usize, usize)> {
        let (start, end) = adjust_indices(start, end, self.size());
        (start <= end).then_some((start as usize, end as usize))
    }

    /// Where the empty needle is found, judged on one requested bound alone.
    ///
    /// A bound in `[-size, size]` gives its clamped offset, one below `-size` gives `0` and one
    /// above `size` gives `-1`.
    fn empty_needle_at(&self, bound: Option<i64>, default: i64) -> i64 {
        let size = self.size();
        match bound {
            Some(i) if i > size => -1,
            Some(i) if i < -size => 0,
            _ => normalize(bound, default, size),
        }
    }

    /// `str.find(sub, start, end)`: lowest index of `sub` within the window, or `-1`.
    ///
    /// ## Notes
    /// - The empty string depends on `start` only: `"abc".find("", 3) == 3`,
    ///   `"abc".find("", 4) == -1` and `"abc".find("", 2, 1) == 2`.
    pub fn find(&self, sub: &str, start: Option<i64>, end: Option<i64>) -> i64 {
        if sub.is_empty() {
            return self.empty_needle_at(start, 0);
        }
        self.search_window(start, end)
            .and_then(|(from, to)| self.find_forward(sub, from, to))
            .map_or(-1, |m| m.start as i64)
    }

    /// `str.rfind(sub, start, end)`: highest index of `sub` within the window, or `-1`.
    ///
    /// The empty string depends on `end` only, mirroring [`Text::find`].
    pub fn rfind(&self, sub: &str, start: Option<i64>, end: Option<i64>) -> i64 {
        if sub.is_empty() {
            return self.empty_needle_at(end, self.size());
        }
        self.search_window(start, end)
            .and_then(|(from, to)| self.find_backward(sub, from, to))
            .map_or(-1, |m| m.start as i64)
    }

    /// `str.index(sub, start, end)`: like [`Text::find`] but fails when `sub` is absent.
    pub fn index(&self, sub: &str, start: Option<i64>, end: Option<i64>) -> StrResult<i64> {
        match self.find(sub, start, end) {
            -1 => Err(StrError::SubstringNotFound),
            found => Ok(found),
        }
    }

    /// `str.rindex(sub, start, end)`: like [`Text::rfind`] but fails when `sub` is absent.
    pub fn rindex(&self, sub: &str, start: Option<i64>, end: Option<i64>) -> StrResult<i64> {
        match self.rfind(sub, start, end) {
            -1 => Err(StrError::SubstringNotFound),
            found => Ok(found),
        }
    }

    /// `str.count(sub, start, end)`: number of non-overlapping occurrences.
    ///
    /// ## Notes
    /// - An empty `sub` matches in every gap between characters and at both ends of the
    ///   single-step slice: `len(slice_onestep(start, end)) + 1`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.len(), sub_len = sub.len()))]
    pub fn count(&self, sub: &str, start: Option<i64>, end: Option<i64>) -> i64 {
        if sub.is_empty() {
            let (start, end) = self.onestep_bounds(start, end);
            return (end - start) as i64 + 1;
        }

        let Some((mut pos, to)) = self.search_window(start, end) else {
            return 0;
        };
        let mut found = 0;
        while let Some(m) = self.find_forward(sub, pos, to) {
            found += 1;
            pos = m.end;
        }
        found
    }

    /// `sub in str`.
    pub fn contains(&self, sub: &str) -> bool {
        self.find_forward(sub, 0, self.len()).is_some()
    }

    /// `str.startswith(prefix, start, end)`.
    pub fn startswith(&self, prefix: &str, start: Option<i64>, end: Option<i64>) -> bool {
        self.search_window(start, end)
            .is_some_and(|(from, to)| self.match_prefix(prefix, from, to).is_some())
    }

    /// `str.startswith((p1, p2, ...), start, end)`.
    pub fn startswith_any<S: AsRef<str>>(&self, prefixes: &[S], start: Option<i64>, end: Option<i64>) -> bool {
        prefixes.iter().any(|p| self.startswith(p.as_ref(), start, end))
    }

    /// `str.endswith(suffix, start, end)`.
    pub fn endswith(&self, suffix: &str, start: Option<i64>, end: Option<i64>) -> bool {
        self.search_window(start, end)
            .is_some_and(|(from, to)| self.match_suffix(suffix, from, to).is_some())
    }

    /// `str.endswith((s1, s2, ...), start, end)`.
    pub fn endswith_any<S: AsRef<str>>(&self, suffixes: &[S], start: Option<i64>, end: Option<i64>) -> bool {
        suffixes.iter().any(|s| self.endswith(s.as_ref(), start, end))
    }

    /// `str.replace(old, new, count)`.
    ///
    /// ## Parameters
    /// - `old`: substring to replace. If empty, `new` is inserted before every character and once
    ///   at the end.
    /// - `new`: replacement string.
    /// - `count`: maximum number of replacements; `None` or negative means unlimited.
    ///
    /// ## Returns
    /// - (`String`): the text with replacements applied, left to right.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.len(), count = ?count))]
    pub fn replace(&self, old: &str, new: &str, count: Option<i64>) -> String {
        let limit = limit(count);
        let mut out = String::with_capacity(self.as_str().len());

        if old.is_empty() {
            let mut inserted = 0;
            for unit in self.units() {
                if inserted < limit {
                    out.push_str(new);
                    inserted += 1;
                }
                out.push_str(unit);
            }
            if inserted < limit {
                out.push_str(new);
            }
            return out;
        }

        let len = self.len();
        let mut pos = 0;
        let mut replaced = 0;
        while replaced < limit {
            let Some(m) = self.find_forward(old, pos, len) else {
                break;
            };
            out.push_str(self.substr(pos, m.start));
            out.push_str(new);
            pos = m.end;
            replaced += 1;
        }
        out.push_str(self.substr(pos, len));
        out
    }
}
