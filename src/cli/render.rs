//! Result values produced by CLI commands and how they are printed.

use pystr_core::Text;
use serde_json::{Value, json};

use super::{CliError, CliResult};

/// A command result, typed the way Python would type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Int(i64),
    Bool(bool),
    /// `list[str]`, from `split` and friends
    List(Vec<String>),
    /// `tuple[str, str, str]`, from `partition` and `rpartition`
    Tuple(Vec<String>),
}

impl Output {
    pub(crate) fn int(n: usize) -> Self {
        Output::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }

    pub(crate) fn strs<'s>(parts: impl IntoIterator<Item = &'s str>) -> Vec<String> {
        parts.into_iter().map(str::to_string).collect()
    }

    /// Render as a Python literal, the way the interactive interpreter echoes a value.
    pub fn to_python(&self) -> String {
        match self {
            Output::Str(s) => Text::new(s).repr(),
            Output::Int(n) => n.to_string(),
            Output::Bool(true) => "True".to_string(),
            Output::Bool(false) => "False".to_string(),
            Output::List(items) => format!("[{}]", repr_items(items)),
            Output::Tuple(items) => format!("({})", repr_items(items)),
        }
    }

    /// Render as a single line of JSON. Lists and tuples both become arrays.
    pub fn to_json(&self) -> CliResult<String> {
        let value: Value = match self {
            Output::Str(s) => json!(s),
            Output::Int(n) => json!(n),
            Output::Bool(b) => json!(b),
            Output::List(items) | Output::Tuple(items) => json!(items),
        };
        serde_json::to_string(&value).map_err(|e| CliError::failure(format!("failed to encode JSON: {e}")))
    }
}

fn repr_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| Text::new(item).repr())
        .collect::<Vec<_>>()
        .join(", ")
}
