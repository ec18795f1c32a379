#![forbid(unsafe_code)]
//! pystr: Python `str` operations for Rust strings
//!
//! This crate provides the `pystr` command-line tool on top of [`pystr_core`], which holds the
//! semantics (index normalization, slicing, search, split, predicates and transforms).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module and
//!   `pystr_core` enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use pystr_core::{CharUnit, ErrorKind, Match, NormalizedRange, StrConfig, StrError, StrResult, Text};
pub use pystr_core::{errors, offsets};
