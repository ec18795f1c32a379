//! Offset normalization (Python-style index resolution).
//!
//! Everything in this module is a pure function of `(index, size)`: no text is touched here. The
//! slicing engine and every search-composed operation resolve their bounds through these helpers.
//!
//! ## Notes
//! - Indices are signed. A negative index counts from the end and wraps **once** (`-1` is the last
//!   character, `-size` the first); anything further out clamps.
//! - `None` always means "use the default for this position", never a sentinel integer.
//! - There are three bound rules, and they differ on purpose:
//!   - [`normalize`]: wrap, then clamp to `[0, size]` (single-step slices, `count`).
//!   - [`adjust_indices`]: wrap, clamp negatives at `0`, but leave an oversized start alone so a
//!     search window can be "past the end" (`find`, `rfind`, `startswith`, `endswith`).
//!   - [`NormalizedRange::resolve`]: direction-aware clamp to `[0, size]` (step > 0) or
//!     `[-1, size - 1]` (step < 0) for stepped slicing.

use crate::errors::{StrError, StrResult};

#[inline]
fn wrap(index: i64, size: i64) -> i64 {
    if index < 0 { index + size } else { index }
}

/// Resolve an optional index into an offset within `[0, size]`.
///
/// ## Parameters
/// - `index`: the requested index (negative counts from the end), or `None`.
/// - `default`: value used when `index` is `None`.
/// - `size`: length of the text in characters.
///
/// ## Returns
/// - (`i64`): the clamped offset.
///
/// ## Examples
/// ```rust
/// use pystr_core::offsets::normalize;
/// assert_eq!(normalize(Some(-2), 0, 5), 3);
/// assert_eq!(normalize(None, 5, 5), 5);
/// assert_eq!(normalize(Some(-99), 0, 5), 0);
/// assert_eq!(normalize(Some(99), 0, 5), 5);
/// ```
pub fn normalize(index: Option<i64>, default: i64, size: i64) -> i64 {
    wrap(index.unwrap_or(default), size).clamp(0, size)
}

/// Resolve a `(start, end)` search window.
///
/// ## Parameters
/// - `start`: window start, defaults to `0`.
/// - `end`: window end (exclusive), defaults to `size`.
/// - `size`: length of the text in characters.
///
/// ## Returns
/// - `(i64, i64)`: the adjusted `(start, end)`. `end` lies in `[0, size]`; `start` is at least `0`
///   but may exceed `size` (and `end`), in which case the window is empty.
///
/// ## Notes
/// - Leaving `start` unclamped above is what makes `"abc".find("", 4) == -1` while
///   `"abc".find("", 3) == 3`.
pub fn adjust_indices(start: Option<i64>, end: Option<i64>, size: i64) -> (i64, i64) {
    let end = match end {
        Some(end) if end > size => size,
        Some(end) => wrap(end, size).max(0),
        None => size,
    };
    let start = start.map_or(0, |start| wrap(start, size).max(0));
    (start, end)
}

/// A fully resolved `(start, end, step)` slice.
///
/// For `step > 0`, `start` and `end` lie in `[0, size]`. For `step < 0` they lie in `[-1, size - 1]`,
/// where `-1` is the "before the first character" sentinel. Walking the range never visits an
/// out-of-bounds offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRange {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl NormalizedRange {
    /// Resolve optional slice arguments against a text of `size` characters.
    ///
    /// ## Parameters
    /// - `start`: optional start index (inclusive).
    /// - `end`: optional end index (exclusive).
    /// - `step`: optional step; defaults to `1`. Negative steps walk backwards.
    /// - `size`: length of the text in characters.
    ///
    /// ## Returns
    /// - `Ok(NormalizedRange)`: the clamped range.
    /// - `Err(StrError::SliceStepZero)`: if `step == 0`.
    pub fn resolve(start: Option<i64>, end: Option<i64>, step: Option<i64>, size: i64) -> StrResult<Self> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(StrError::SliceStepZero);
        }

        // A reverse walk needs `-1` to say "stop after index 0" without aliasing a real index.
        let (lower, upper, default_start, default_end) = if step > 0 {
            (0, size, 0, size)
        } else {
            (-1, size - 1, size - 1, -1)
        };
        let start = start.map_or(default_start, |i| wrap(i, size).clamp(lower, upper));
        let end = end.map_or(default_end, |i| wrap(i, size).clamp(lower, upper));

        let range = Self { start, end, step };
        tracing::trace!(?range, size, "resolved slice range");
        Ok(range)
    }

    /// Number of characters the walk emits.
    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.end - self.start
        } else {
            self.start - self.end
        };
        if span <= 0 {
            return 0;
        }
        ((span as u64 - 1) / self.step.unsigned_abs() + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the character offsets visited by the walk, in walk order.
    pub fn offsets(&self) -> impl Iterator<Item = usize> + use<> {
        let Self { start, step, .. } = *self;
        (0..self.len() as i64).map(move |k| (start + k * step) as usize)
    }
}
