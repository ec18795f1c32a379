//! CLI module for pystr
//!
//! Applies a single Python `str` operation to text given on the command line and prints the result.
//!
//! ## Modules
//!
//! - `commands` - Operation dispatch onto `pystr_core::Text`
//! - `render` - Result values and their Python-literal / JSON rendering
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod render;

use std::fmt;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pystr_core::{CharUnit, StrConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<pystr_core::StrError> for CliError {
    fn from(err: pystr_core::StrError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Apply Python str operations to text
#[derive(Parser, Debug)]
#[command(name = "pystr")]
#[command(version = VERSION)]
#[command(about = "Apply Python str operations to text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Index by grapheme cluster instead of Unicode scalar
    #[arg(long, global = true)]
    pub grapheme: bool,

    /// Default tab size for expandtabs
    #[arg(long, global = true, value_name = "N", default_value_t = 8, allow_hyphen_values = true)]
    pub tab_size: i64,

    /// Print the result as JSON instead of a Python literal
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Build the text configuration from the global flags.
    pub fn config(&self) -> StrConfig {
        let unit = if self.grapheme { CharUnit::Grapheme } else { CharUnit::Scalar };
        StrConfig::new().with_unit(unit).with_tab_size(self.tab_size)
    }
}

/// Optional `start`/`end` window shared by the search commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Window {
    /// Window start (negative counts from the end)
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i64>,
    /// Window end, exclusive (negative counts from the end)
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<i64>,
}

/// Classification predicates for the `is` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Alnum,
    Alpha,
    Ascii,
    Decimal,
    Digit,
    Lower,
    Numeric,
    Printable,
    Space,
    Title,
    Upper,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// text[start:end:step]
    Slice {
        text: String,
        #[command(flatten)]
        window: Window,
        /// Step (negative walks backwards)
        #[arg(long, allow_hyphen_values = true)]
        step: Option<i64>,
    },
    /// text[index]
    Getitem {
        text: String,
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },
    /// len(text)
    Len { text: String },
    /// text.find(sub, start, end)
    Find {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },
    /// text.rfind(sub, start, end)
    Rfind {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },
    /// text.index(sub, start, end)
    Index {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },
    /// text.rindex(sub, start, end)
    Rindex {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },
    /// text.count(sub, start, end)
    Count {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },
    /// sub in text
    Contains { text: String, sub: String },
    /// text.startswith((prefix, ...), start, end)
    Startswith {
        text: String,
        #[arg(required = true)]
        prefixes: Vec<String>,
        #[command(flatten)]
        window: Window,
    },
    /// text.endswith((suffix, ...), start, end)
    Endswith {
        text: String,
        #[arg(required = true)]
        suffixes: Vec<String>,
        #[command(flatten)]
        window: Window,
    },
    /// text.partition(sep)
    Partition { text: String, sep: String },
    /// text.rpartition(sep)
    Rpartition { text: String, sep: String },
    /// text.split(sep, maxsplit)
    Split {
        text: String,
        /// Separator (default: runs of whitespace)
        #[arg(long)]
        sep: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        maxsplit: Option<i64>,
    },
    /// text.rsplit(sep, maxsplit)
    Rsplit {
        text: String,
        /// Separator (default: runs of whitespace)
        #[arg(long)]
        sep: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        maxsplit: Option<i64>,
    },
    /// text.splitlines(keepends)
    Splitlines {
        text: String,
        #[arg(long)]
        keepends: bool,
    },
    /// sep.join(items)
    Join { sep: String, items: Vec<String> },
    /// text.replace(old, new, count)
    Replace {
        text: String,
        old: String,
        new: String,
        #[arg(long, allow_hyphen_values = true)]
        count: Option<i64>,
    },
    /// text.center(width, fillchar)
    Center {
        text: String,
        #[arg(allow_hyphen_values = true)]
        width: i64,
        #[arg(long)]
        fillchar: Option<String>,
    },
    /// text.ljust(width, fillchar)
    Ljust {
        text: String,
        #[arg(allow_hyphen_values = true)]
        width: i64,
        #[arg(long)]
        fillchar: Option<String>,
    },
    /// text.rjust(width, fillchar)
    Rjust {
        text: String,
        #[arg(allow_hyphen_values = true)]
        width: i64,
        #[arg(long)]
        fillchar: Option<String>,
    },
    /// text.zfill(width)
    Zfill {
        text: String,
        #[arg(allow_hyphen_values = true)]
        width: i64,
    },
    /// text.expandtabs(tabsize)
    Expandtabs {
        text: String,
        #[arg(long, allow_hyphen_values = true)]
        tabsize: Option<i64>,
    },
    /// text.strip(chars)
    Strip {
        text: String,
        #[arg(long)]
        chars: Option<String>,
    },
    /// text.lstrip(chars)
    Lstrip {
        text: String,
        #[arg(long)]
        chars: Option<String>,
    },
    /// text.rstrip(chars)
    Rstrip {
        text: String,
        #[arg(long)]
        chars: Option<String>,
    },
    /// text.title()
    Title { text: String },
    /// text.capitalize()
    Capitalize { text: String },
    /// text.casefold()
    Casefold { text: String },
    /// text.lower()
    Lower { text: String },
    /// text.upper()
    Upper { text: String },
    /// text.swapcase()
    Swapcase { text: String },
    /// repr(text)
    Repr { text: String },
    /// text * times
    Mul {
        text: String,
        #[arg(allow_hyphen_values = true)]
        times: i64,
    },
    /// text.is<predicate>()
    Is {
        #[arg(value_enum)]
        predicate: Predicate,
        text: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return the rendered result.
pub fn execute(cli: Cli) -> CliResult<String> {
    let config = cli.config();
    let json = cli.json;
    tracing::debug!(?config, json, "executing command");

    let output = commands::apply(cli.command, config)?;
    if json {
        return output.to_json();
    }
    Ok(output.to_python())
}

// ============================================================================
// Tests
// ============================================================================
