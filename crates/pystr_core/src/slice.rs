//! Range extraction: indexing and slicing over characters (Python-like semantics).
//!
//! ## Notes
//! - `slice` resolves its arguments through [`NormalizedRange::resolve`]; the single-step variant
//!   uses the simpler [`normalize`] rule and is what search-composed operations build on.
//! - A slice that selects the whole text in order returns the input unchanged (borrowed).

use std::borrow::Cow;

use crate::errors::{StrError, StrResult};
use crate::offsets::{NormalizedRange, normalize};
use crate::text::Text;

impl<'a> Text<'a> {
    /// `str.__getitem__(index)`: the character at `index`.
    ///
    /// ## Parameters
    /// - `index`: character index; negative values count from the end (once).
    ///
    /// ## Returns
    /// - `Ok(&str)`: the single character.
    /// - `Err(StrError::IndexOutOfRange)`: if the wrapped index is outside `[0, len)`.
    pub fn getitem(&self, index: i64) -> StrResult<&'a str> {
        let size = self.size();
        let index = if index < 0 { index + size } else { index };
        if !(0..size).contains(&index) {
            return Err(StrError::IndexOutOfRange);
        }
        Ok(self.unit(index as usize))
    }

    /// `str[start:end:step]`.
    ///
    /// ## Parameters
    /// - `start`: optional start index (inclusive).
    /// - `end`: optional end index (exclusive).
    /// - `step`: optional step; defaults to `1`. Negative steps slice backwards.
    ///
    /// ## Returns
    /// - `Ok(Cow<str>)`: the selected characters. Contiguous (`step == 1`) results borrow from the
    ///   input; stepped results are owned.
    /// - `Err(StrError::SliceStepZero)`: if `step == 0`.
    ///
    /// ## Notes
    /// - Out-of-range bounds clamp; slicing never fails for any `start`/`end`.
    ///
    /// ## Examples
    /// ```rust
    /// use pystr_core::Text;
    /// let t = Text::new("hello");
    /// assert_eq!(t.slice(Some(-3), None, None).unwrap(), "llo");
    /// assert_eq!(t.slice(None, None, Some(-1)).unwrap(), "olleh");
    /// assert_eq!(t.slice(None, None, Some(2)).unwrap(), "hlo");
    /// ```
    pub fn slice(&self, start: Option<i64>, end: Option<i64>, step: Option<i64>) -> StrResult<Cow<'a, str>> {
        let size = self.size();
        if start.is_none_or(|i| i == 0) && end.is_none_or(|i| i == size) && step.is_none_or(|i| i == 1) {
            return Ok(Cow::Borrowed(self.as_str()));
        }

        let range = NormalizedRange::resolve(start, end, step, size)?;
        if range.step == 1 {
            if range.start <= range.end {
                return Ok(Cow::Borrowed(self.substr(range.start as usize, range.end as usize)));
            }
            return Ok(Cow::Borrowed(""));
        }

        Ok(Cow::Owned(range.offsets().map(|i| self.unit(i)).collect()))
    }

    /// `str[start:end]` with the bounds-only rule: both bounds clamp to `[0, len]`.
    pub fn slice_onestep(&self, start: Option<i64>, end: Option<i64>) -> &'a str {
        let (start, end) = self.onestep_bounds(start, end);
        self.substr(start, end)
    }

    /// Character offsets selected by [`Text::slice_onestep`], with `start <= end`.
    pub(crate) fn onestep_bounds(&self, start: Option<i64>, end: Option<i64>) -> (usize, usize) {
        let size = self.size();
        let start = normalize(start, 0, size) as usize;
        let end = normalize(end, size, size) as usize;
        (start, end.max(start))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::config::{CharUnit, StrConfig};
    use crate::errors::StrError;
    use crate::text::Text;

    #[test]
    fn test_getitem() {
        let t = Text::new("héllo");
        assert_eq!(t.getitem(1), Ok("é"));
        assert_eq!(t.getitem(-1), Ok("o"));
        assert_eq!(t.getitem(-5), Ok("h"));
        assert_eq!(t.getitem(5), Err(StrError::IndexOutOfRange));
        assert_eq!(t.getitem(-6), Err(StrError::IndexOutOfRange));
        assert_eq!(Text::new("").getitem(0), Err(StrError::IndexOutOfRange));
    }

    #[test]
    fn test_slice_identity_borrows() {
        let t = Text::new("hello");
        for (start, end, step) in [(None, None, None), (Some(0), Some(5), Some(1)), (Some(0), None, None)] {
            let out = t.slice(start, end, step).unwrap();
            assert!(matches!(out, std::borrow::Cow::Borrowed("hello")));
        }
    }

    #[test]
    fn test_slice_forward() {
        let t = Text::new("hello");
        assert_eq!(t.slice(Some(1), Some(4), None).unwrap(), "ell");
        assert_eq!(t.slice(Some(-3), None, None).unwrap(), "llo");
        assert_eq!(t.slice(None, Some(-1), None).unwrap(), "hell");
        assert_eq!(t.slice(Some(3), Some(1), None).unwrap(), "");
        assert_eq!(t.slice(Some(-99), Some(99), None).unwrap(), "hello");
        assert_eq!(t.slice(Some(99), None, None).unwrap(), "");
    }

    #[test]
    fn test_slice_stepped() {
        let t = Text::new("abcdefg");
        assert_eq!(t.slice(None, None, Some(2)).unwrap(), "aceg");
        assert_eq!(t.slice(Some(1), None, Some(3)).unwrap(), "be");
        assert_eq!(t.slice(Some(1), Some(5), Some(2)).unwrap(), "bd");
        assert_eq!(t.slice(None, None, Some(100)).unwrap(), "a");
    }

    #[test]
    fn test_slice_reverse() {
        let t = Text::new("hello");
        assert_eq!(t.slice(None, None, Some(-1)).unwrap(), "olleh");
        assert_eq!(t.slice(Some(5), None, Some(-1)).unwrap(), "olleh");
        assert_eq!(t.slice(Some(3), Some(0), Some(-1)).unwrap(), "lle");
        assert_eq!(t.slice(None, Some(-99), Some(-1)).unwrap(), "olleh");
        assert_eq!(t.slice(Some(-99), None, Some(-1)).unwrap(), "");
        assert_eq!(t.slice(Some(4), Some(0), Some(-2)).unwrap(), "ol");
        assert_eq!(t.slice(Some(0), Some(3), Some(-1)).unwrap(), "");
    }

    #[test]
    fn test_slice_step_zero() {
        assert_eq!(Text::new("abc").slice(None, None, Some(0)), Err(StrError::SliceStepZero));
    }

    #[test]
    fn test_slice_unicode() {
        let t = Text::new("héllo");
        assert_eq!(t.slice(Some(0), Some(5), Some(2)).unwrap(), "hlo");
        assert_eq!(t.slice(Some(4), Some(0), Some(-2)).unwrap(), "ol");
        assert_eq!(t.slice(Some(-2), None, None).unwrap(), "lo");
    }

    #[test]
    fn test_slice_graphemes() {
        let t = Text::with_config("ae\u{301}b", StrConfig::new().with_unit(CharUnit::Grapheme));
        assert_eq!(t.slice(None, None, Some(-1)).unwrap(), "be\u{301}a");
        assert_eq!(t.getitem(1), Ok("e\u{301}"));
    }

    #[test]
    fn test_slice_onestep() {
        let t = Text::new("hello");
        assert_eq!(t.slice_onestep(None, None), "hello");
        assert_eq!(t.slice_onestep(Some(1), Some(-1)), "ell");
        assert_eq!(t.slice_onestep(Some(4), Some(2)), "");
        assert_eq!(t.slice_onestep(Some(-99), Some(99)), "hello");
        assert_eq!(t.onestep_bounds(Some(4), Some(2)), (4, 4));
    }
}
