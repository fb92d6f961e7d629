//! Typed one-shot asks.
//!
//! Each function prompts exactly once. Defaults only cover an empty answer;
//! text that fails to parse is an error even when a default exists. Nothing
//! here retries. For a retrying prompt, see [`OptionPrompt`](crate::OptionPrompt).

use crate::parse::{parse_bool, parse_int, unescape_path};
use crate::prompt::{prompt, title_prompt};
use crate::terminal::TerminalIO;
use crate::AskError;

/// Ask for a non-empty string.
///
/// # Errors
///
/// [`AskError::EmptyInput`] on an empty line, or a read failure.
pub fn ask_string(title: &str, term: &mut impl TerminalIO) -> Result<String, AskError> {
    let answer = prompt(term, &title_prompt(title, None))?;
    if answer.is_empty() {
        return Err(AskError::EmptyInput);
    }
    Ok(answer)
}

/// Ask for a string, returning `default` on an empty line.
///
/// An empty default is returned as-is; it still counts as an answer.
pub fn ask_string_with_default(
    title: &str,
    default: &str,
    term: &mut impl TerminalIO,
) -> Result<String, AskError> {
    let answer = prompt(term, &title_prompt(title, Some(default)))?;
    if answer.is_empty() {
        log::debug!("{:?}: empty answer, using default", title);
        return Ok(default.to_string());
    }
    Ok(answer)
}

/// Ask for a filesystem path.
///
/// Shell-escaped spaces (`my\ dir`) are unescaped, so paths pasted from a
/// shell work as typed.
pub fn ask_path(title: &str, term: &mut impl TerminalIO) -> Result<String, AskError> {
    ask_string(title, term).map(|path| unescape_path(&path))
}

/// Ask for a filesystem path, returning `default` on an empty line.
pub fn ask_path_with_default(
    title: &str,
    default: &str,
    term: &mut impl TerminalIO,
) -> Result<String, AskError> {
    ask_string_with_default(title, default, term).map(|path| unescape_path(&path))
}

/// Ask for a base-10 integer.
pub fn ask_int(title: &str, term: &mut impl TerminalIO) -> Result<i64, AskError> {
    let answer = ask_string(title, term)?;
    parse_int(&answer)
}

/// Ask for an integer, returning `default` on an empty line.
pub fn ask_int_with_default(
    title: &str,
    default: i64,
    term: &mut impl TerminalIO,
) -> Result<i64, AskError> {
    let answer = prompt(term, &title_prompt(title, Some(&default.to_string())))?;
    if answer.is_empty() {
        log::debug!("{:?}: empty answer, using default", title);
        return Ok(default);
    }
    parse_int(&answer)
}

/// Ask a yes/no question. See [`parse_bool`] for accepted answers.
pub fn ask_bool(title: &str, term: &mut impl TerminalIO) -> Result<bool, AskError> {
    let answer = ask_string(title, term)?;
    parse_bool(&answer)
}

/// Ask a yes/no question, returning `default` on an empty line.
///
/// The prompt marks the default as `[Y/n]` or `[y/N]`.
pub fn ask_bool_with_default(
    title: &str,
    default: bool,
    term: &mut impl TerminalIO,
) -> Result<bool, AskError> {
    let suffix = if default { "Y/n" } else { "y/N" };
    let answer = prompt(term, &title_prompt(title, Some(suffix)))?;
    if answer.is_empty() {
        log::debug!("{:?}: empty answer, using default", title);
        return Ok(default);
    }
    parse_bool(&answer)
}
