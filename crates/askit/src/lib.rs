//! Typed, validated line prompts for CLI applications.
//!
//! `askit` reads strings, paths, integers, booleans and list selections from
//! a line-oriented input, applies defaults, and re-prompts on invalid menu
//! choices. It draws no TUI; every question is one line out and one line in.
//!
//! # Quick Start
//!
//! ```no_run
//! use askit::{ask_bool_with_default, ask_string, OptionPrompt, StdTerminal};
//!
//! let mut term = StdTerminal::new(true);
//! let name = ask_string("Project name", &mut term)?;
//! let license = OptionPrompt::new("license")
//!     .options(["MIT", "Apache-2.0"])
//!     .optional(true)
//!     .ask(&mut term)?;
//! let publish = ask_bool_with_default("Publish now?", false, &mut term)?;
//! # Ok::<(), askit::AskError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! OptionPrompt / select_from_strings   selection, retry loop
//! ask_string, ask_int, ask_bool, ...   typed one-shot asks
//! prompt                               write once, read one line
//! TerminalIO                           injected input and output
//! ```
//!
//! Only the [`OptionPrompt`] selector retries. The typed asks report the
//! first invalid answer to the caller. End of input is never retried.
//!
//! # Testing
//!
//! Every function takes its terminal as a parameter, so tests can script
//! the input and inspect the output:
//!
//! ```
//! use askit::{ask_int_with_default, MockTerminal};
//!
//! let mut term = MockTerminal::with_input("\n");
//! assert_eq!(ask_int_with_default("Port", 8080, &mut term).unwrap(), 8080);
//! assert_eq!(term.output(), "Port [8080]: ");
//! ```

mod ask;
mod error;
mod parse;
mod prompt;
mod select;
mod terminal;

pub use ask::{
    ask_bool, ask_bool_with_default, ask_int, ask_int_with_default, ask_path,
    ask_path_with_default, ask_string, ask_string_with_default,
};
pub use error::{AskError, InvalidOption, OutOfRange};
pub use parse::{parse_bool, parse_int, parse_option_number, unescape_path};
pub use prompt::{prompt, title_prompt};
pub use select::{ask_options, select_from_strings, select_from_strings_with_default, OptionPrompt};
pub use terminal::{MockTerminal, StdTerminal, StreamTerminal, TerminalIO};
