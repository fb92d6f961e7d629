//! Parsers from a line of text to typed values.

use crate::error::{InvalidOption, OutOfRange};
use crate::AskError;

/// Parse a yes/no style answer.
///
/// Surrounding whitespace is ignored and matching is case-insensitive.
/// `yes`, `y`, `1` and `true` are `true`; `no`, `n`, `0` and `false` are
/// `false`.
///
/// ```
/// assert_eq!(askit::parse_bool(" YeS \n").unwrap(), true);
/// assert_eq!(askit::parse_bool("n").unwrap(), false);
/// assert!(askit::parse_bool("-1").is_err());
/// ```
pub fn parse_bool(text: &str) -> Result<bool, AskError> {
    let lowered = text.trim().to_lowercase();
    match lowered.as_str() {
        "yes" | "y" | "1" | "true" => return Ok(true),
        "no" | "n" | "0" | "false" => return Ok(false),
        _ => {}
    }

    lowered
        .parse::<bool>()
        .map_err(|e| AskError::parse(text, e.to_string()))
}

/// Parse a base-10 signed 64-bit integer.
pub fn parse_int(text: &str) -> Result<i64, AskError> {
    text.parse::<i64>()
        .map_err(|e| AskError::parse(text, e.to_string()))
}

/// Turn shell-escaped spaces (`\ `) into plain spaces.
pub fn unescape_path(text: &str) -> String {
    text.replace("\\ ", " ")
}

/// Parse a 1-based option number no greater than `max`.
pub fn parse_option_number(text: &str, max: usize) -> Result<usize, InvalidOption> {
    let number = text
        .parse::<i64>()
        .map_err(|e| InvalidOption::NotANumber {
            input: text.to_string(),
            reason: e.to_string(),
        })?;

    if number < 1 {
        return Err(InvalidOption::OutOfRange(OutOfRange::BelowFirst));
    }
    match usize::try_from(number) {
        Ok(n) if n <= max => Ok(n),
        _ => Err(InvalidOption::OutOfRange(OutOfRange::AboveLast)),
    }
}
