//! Error taxonomy for string operations (Python-like exception kinds).
//!
//! Every fallible operation in this crate returns `Result<_, StrError>`. The `Display` form of a
//! [`StrError`] is the canonical `Kind: message` spelling, so callers that surface errors to users
//! (e.g. the CLI) never have to format them by hand.

use thiserror::Error;

/// Message for out-of-range single-character access.
pub const STRING_INDEX_OUT_OF_RANGE_MSG: &str = "IndexError: string index out of range";
/// Message for a slice with `step == 0`.
pub const STRING_SLICE_STEP_ZERO_MSG: &str = "ValueError: slice step cannot be zero";
/// Message for an empty separator passed to partition/split.
pub const EMPTY_SEPARATOR_MSG: &str = "ValueError: empty separator";
/// Message for `index`/`rindex` when the needle is absent.
pub const SUBSTRING_NOT_FOUND_MSG: &str = "ValueError: substring not found";
/// Message for a fill character that is not exactly one character long.
pub const FILL_CHAR_LENGTH_MSG: &str = "TypeError: The fill character must be exactly one character long";

/// Python exception kind an error maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ValueError,
    IndexError,
    TypeError,
}

impl ErrorKind {
    /// Return the canonical spelling (e.g. `"ValueError"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ValueError => "ValueError",
            ErrorKind::IndexError => "IndexError",
            ErrorKind::TypeError => "TypeError",
        }
    }
}

/// Errors produced by string operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrError {
    #[error("{}", STRING_INDEX_OUT_OF_RANGE_MSG)]
    IndexOutOfRange,

    #[error("{}", STRING_SLICE_STEP_ZERO_MSG)]
    SliceStepZero,

    #[error("{}", EMPTY_SEPARATOR_MSG)]
    EmptySeparator,

    #[error("{}", SUBSTRING_NOT_FOUND_MSG)]
    SubstringNotFound,

    #[error("{}", FILL_CHAR_LENGTH_MSG)]
    FillCharLength,
}

impl StrError {
    /// Classify this error as a Python exception kind.
    pub fn kind(self) -> ErrorKind {
        match self {
            StrError::IndexOutOfRange => ErrorKind::IndexError,
            StrError::SliceStepZero | StrError::EmptySeparator | StrError::SubstringNotFound => ErrorKind::ValueError,
            StrError::FillCharLength => ErrorKind::TypeError,
        }
    }

    /// Return the canonical `Kind: message` string for this error.
    pub fn message(self) -> &'static str {
        match self {
            StrError::IndexOutOfRange => STRING_INDEX_OUT_OF_RANGE_MSG,
            StrError::SliceStepZero => STRING_SLICE_STEP_ZERO_MSG,
            StrError::EmptySeparator => EMPTY_SEPARATOR_MSG,
            StrError::SubstringNotFound => SUBSTRING_NOT_FOUND_MSG,
            StrError::FillCharLength => FILL_CHAR_LENGTH_MSG,
        }
    }
}

/// Result alias used throughout the crate.
pub type StrResult<T> = Result<T, StrError>;
