//! Dispatch of parsed CLI commands onto `pystr_core::Text`.

use pystr_core::{StrConfig, StrResult, Text};

use super::render::Output;
use super::{Command, Predicate};

/// Apply a single command to its text and collect the result.
///
/// ## Parameters
/// - `command`: the parsed subcommand with its arguments.
/// - `config`: character model and default tab size from the global flags.
///
/// ## Returns
/// - `Ok(Output)`: the Python-typed result of the operation.
/// - `Err(StrError)`: the Python exception the operation would raise.
pub fn apply(command: Command, config: StrConfig) -> StrResult<Output> {
    let output = match command {
        Command::Slice { text, window, step } => {
            Output::Str(view(&text, config).slice(window.start, window.end, step)?.into_owned())
        }
        Command::Getitem { text, index } => Output::Str(view(&text, config).getitem(index)?.to_string()),
        Command::Len { text } => Output::int(view(&text, config).len()),
        Command::Find { text, sub, window } => Output::Int(view(&text, config).find(&sub, window.start, window.end)),
        Command::Rfind { text, sub, window } => Output::Int(view(&text, config).rfind(&sub, window.start, window.end)),
        Command::Index { text, sub, window } => Output::Int(view(&text, config).index(&sub, window.start, window.end)?),
        Command::Rindex { text, sub, window } => Output::Int(view(&text, config).rindex(&sub, window.start, window.end)?),
        Command::Count { text, sub, window } => Output::Int(view(&text, config).count(&sub, window.start, window.end)),
        Command::Contains { text, sub } => Output::Bool(view(&text, config).contains(&sub)),
        Command::Startswith { text, prefixes, window } => {
            Output::Bool(view(&text, config).startswith_any(prefixes.as_slice(), window.start, window.end))
        }
        Command::Endswith { text, suffixes, window } => {
            Output::Bool(view(&text, config).endswith_any(suffixes.as_slice(), window.start, window.end))
        }
        Command::Partition { text, sep } => Output::Tuple(Output::strs(view(&text, config).partition(&sep)?)),
        Command::Rpartition { text, sep } => Output::Tuple(Output::strs(view(&text, config).rpartition(&sep)?)),
        Command::Split { text, sep, maxsplit } => {
            Output::List(Output::strs(view(&text, config).split(sep.as_deref(), maxsplit)?))
        }
        Command::Rsplit { text, sep, maxsplit } => {
            Output::List(Output::strs(view(&text, config).rsplit(sep.as_deref(), maxsplit)?))
        }
        Command::Splitlines { text, keepends } => Output::List(Output::strs(view(&text, config).splitlines(keepends))),
        Command::Join { sep, items } => Output::Str(view(&sep, config).join(&items)),
        Command::Replace { text, old, new, count } => Output::Str(view(&text, config).replace(&old, &new, count)),
        Command::Center { text, width, fillchar } => Output::Str(view(&text, config).center(width, fillchar.as_deref())?),
        Command::Ljust { text, width, fillchar } => Output::Str(view(&text, config).ljust(width, fillchar.as_deref())?),
        Command::Rjust { text, width, fillchar } => Output::Str(view(&text, config).rjust(width, fillchar.as_deref())?),
        Command::Zfill { text, width } => Output::Str(view(&text, config).zfill(width)),
        Command::Expandtabs { text, tabsize } => Output::Str(view(&text, config).expandtabs(tabsize)),
        Command::Strip { text, chars } => Output::Str(view(&text, config).strip(chars.as_deref()).to_string()),
        Command::Lstrip { text, chars } => Output::Str(view(&text, config).lstrip(chars.as_deref()).to_string()),
        Command::Rstrip { text, chars } => Output::Str(view(&text, config).rstrip(chars.as_deref()).to_string()),
        Command::Title { text } => Output::Str(view(&text, config).title()),
        Command::Capitalize { text } => Output::Str(view(&text, config).capitalize()),
        Command::Casefold { text } => Output::Str(view(&text, config).casefold()),
        Command::Lower { text } => Output::Str(view(&text, config).lower()),
        Command::Upper { text } => Output::Str(view(&text, config).upper()),
        Command::Swapcase { text } => Output::Str(view(&text, config).swapcase()),
        Command::Repr { text } => Output::Str(view(&text, config).repr()),
        Command::Mul { text, times } => Output::Str(view(&text, config).mul(times)),
        Command::Is { predicate, text } => Output::Bool(classify(&view(&text, config), predicate)),
    };
    Ok(output)
}

fn view(text: &str, config: StrConfig) -> Text<'_> {
    Text::with_config(text, config)
}

fn classify(text: &Text<'_>, predicate: Predicate) -> bool {
    match predicate {
        Predicate::Alnum => text.isalnum(),
        Predicate::Alpha => text.isalpha(),
        Predicate::Ascii => text.isascii(),
        Predicate::Decimal => text.isdecimal(),
        Predicate::Digit => text.isdigit(),
        Predicate::Lower => text.islower(),
        Predicate::Numeric => text.isnumeric(),
        Predicate::Printable => text.isprintable(),
        Predicate::Space => text.isspace(),
        Predicate::Title => text.istitle(),
        Predicate::Upper => text.isupper(),
    }
}
