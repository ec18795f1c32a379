//! Python `str` semantics on top of Rust's `str`.
//!
//! This crate is a pure "semantic core": **no IO**, no global state. It reproduces Python's
//! indexing, slicing, and string-method behavior, including the edge cases (negative indices,
//! stepped and reversed slices, out-of-range clamping, empty needles and separators).
//!
//! ## Layers
//!
//! - [`offsets`]: index normalization (`Option<i64>` indices → clamped offsets).
//! - [`Text`]: a character view over a borrowed `&str`; every operation is a method on it.
//!   - `slice`: `getitem`, `slice`, `slice_onestep`.
//!   - `search`: `find`, `rfind`, `index`, `rindex`, `count`, `startswith`, `endswith`, `replace`.
//!   - `split`: `partition`, `rpartition`, `split`, `rsplit`, `splitlines`, `join`.
//!   - `predicates` and `transform`: `is*` classification, case/width/fill/strip transforms.
//!
//! ## Notes
//!
//! - Fallible operations return [`StrResult`]; the error's `Display` is the Python-style
//!   `Kind: message` text.
//! - Indexing is by Unicode scalar by default. See [`CharUnit`] for grapheme-cluster indexing.
//!
//! ## Examples
//! ```rust
//! use pystr_core::Text;
//!
//! let text = Text::new("key=value");
//! assert_eq!(text.partition("=").unwrap(), ["key", "=", "value"]);
//! assert_eq!(text.slice(None, None, Some(-1)).unwrap(), "eulav=yek");
//! assert_eq!(text.find("=", None, None), 3);
//! ```

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod errors;
pub mod offsets;
mod predicates;
mod search;
mod slice;
mod split;
pub mod text;
mod transform;

pub use config::{CharUnit, StrConfig};
pub use errors::{ErrorKind, StrError, StrResult};
pub use offsets::NormalizedRange;
pub use text::{Match, Text};
