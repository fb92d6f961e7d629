//! Error types for prompting.

use std::fmt;
use std::io;

/// Errors that can occur while asking for input.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// A required value was not provided.
    #[error("no value provided")]
    EmptyInput,

    /// Input was present but could not be converted to the requested type.
    #[error("failed to parse \"{input}\": {reason}")]
    ParseFailure { input: String, reason: String },

    /// A menu option number outside the listed options.
    #[error("invalid option: {0}")]
    OutOfRange(OutOfRange),

    /// Reading from the input source failed.
    #[error("failed to read input: {0}")]
    ReadFailure(#[source] io::Error),

    /// The input source has no more lines.
    #[error("failed to read input: end of input")]
    EndOfInput,
}

/// Which side of the option list an out-of-range number fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRange {
    /// Zero or negative.
    BelowFirst,
    /// Past the last listed option.
    AboveLast,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowFirst => write!(f, "You entered a number less than 1"),
            Self::AboveLast => write!(
                f,
                "You entered a number greater than the last option's number"
            ),
        }
    }
}

impl AskError {
    /// Create a parse error.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether the input source is exhausted or broken.
    ///
    /// These errors are never retried.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadFailure(_) | Self::EndOfInput)
    }
}

/// Why an answer is not a listed option number.
///
/// Both cases are recoverable by asking again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOption {
    /// The answer is not a number at all.
    #[error("failed to parse \"{input}\": {reason}")]
    NotANumber { input: String, reason: String },

    /// The number is outside the listed options.
    #[error("invalid option: {0}")]
    OutOfRange(OutOfRange),
}

impl InvalidOption {
    /// The message shown before re-prompting.
    ///
    /// `max` is the highest valid option number.
    pub fn hint(&self, max: usize) -> String {
        match self {
            Self::NotANumber { .. } => format!(
                "failed to parse option number, pick a number from 1-{}",
                max
            ),
            Self::OutOfRange(_) => format!("invalid option number, pick a number 1-{}", max),
        }
    }
}

impl From<InvalidOption> for AskError {
    fn from(e: InvalidOption) -> Self {
        match e {
            InvalidOption::NotANumber { input, reason } => Self::ParseFailure { input, reason },
            InvalidOption::OutOfRange(kind) => Self::OutOfRange(kind),
        }
    }
}

impl From<io::Error> for AskError {
    fn from(e: io::Error) -> Self {
        Self::ReadFailure(e)
    }
}
