//! Choosing a value from a list of options.
//!
//! [`OptionPrompt`] is the interactive selector: it renders a numbered menu
//! and keeps asking until it gets a valid option number, re-issuing only the
//! trailing prompt line after each mistake. [`select_from_strings`] is the
//! one-shot variant that reports the first invalid answer as an error.

use crate::parse::parse_option_number;
use crate::prompt::{prompt, write_hint};
use crate::terminal::TerminalIO;
use crate::AskError;

const NUMBER_PROMPT: &str = "Type in the option's number, then hit Enter: ";
const CUSTOM_VALUE_LABEL: &str = "<custom value>";
const VALUE_REQUIRED_HINT: &str = "value must be specified";

/// An interactive question answered by picking an option or typing a value.
///
/// # Behaviour
///
/// - No options: free text entry. An empty answer yields the default, or
///   `""` when optional; a required question asks again.
/// - One option, not optional: that option is returned without any
///   output or input.
/// - Otherwise a numbered menu is shown. Optional questions get an extra
///   last entry for typing a custom value.
///
/// Invalid option numbers are reported inline and asked again. Only an
/// exhausted or failing input stops the loop.
///
/// # Example
///
/// ```
/// use askit::{MockTerminal, OptionPrompt};
///
/// let mut term = MockTerminal::with_input("5\n2\n");
/// let answer = OptionPrompt::new("env")
///     .options(["staging", "production"])
///     .ask(&mut term)
///     .unwrap();
/// assert_eq!(answer, "production");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPrompt {
    title: String,
    default: Option<String>,
    optional: bool,
    options: Vec<String>,
}

impl OptionPrompt {
    /// Create a required question with no options.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default: None,
            optional: false,
            options: Vec::new(),
        }
    }

    /// Set the value returned for an empty answer.
    ///
    /// An empty string means no default.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = if default.is_empty() {
            None
        } else {
            Some(default)
        };
        self
    }

    /// Allow an empty answer, or a custom value when options are listed.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Replace the option list.
    pub fn options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Append one option.
    pub fn option(mut self, label: impl Into<String>) -> Self {
        self.options.push(label.into());
        self
    }

    /// Run the question against a terminal.
    ///
    /// # Errors
    ///
    /// Only read failures; everything else is retried.
    pub fn ask(&self, term: &mut impl TerminalIO) -> Result<String, AskError> {
        match self.options.as_slice() {
            [] => self.ask_value(term, self.optional),
            [only] if !self.optional => {
                log::debug!("{:?}: auto-selected the only option", self.title);
                Ok(only.clone())
            }
            _ => self.ask_selection(term),
        }
    }

    /// Highest option number shown in the menu.
    fn max_choice(&self) -> usize {
        if self.optional {
            self.options.len() + 1
        } else {
            self.options.len()
        }
    }

    fn ask_selection(&self, term: &mut impl TerminalIO) -> Result<String, AskError> {
        term.write(&format!("Select {:?} from the list:\n", self.title))?;
        let custom = self.optional.then_some(CUSTOM_VALUE_LABEL);
        term.write(&render_menu(&self.options, custom))?;

        let max = self.max_choice();
        loop {
            let answer = prompt(term, NUMBER_PROMPT)?;
            if answer.is_empty() {
                if let Some(default) = &self.default {
                    log::debug!("{:?}: empty answer, using default", self.title);
                    return Ok(default.clone());
                }
            }

            match parse_option_number(&answer, max) {
                Ok(n) if n <= self.options.len() => return Ok(self.options[n - 1].clone()),
                // The only number past the options is the custom value entry.
                Ok(_) => return self.ask_value(term, false),
                Err(e) => {
                    log::debug!("{:?}: rejected option {:?}: {}", self.title, answer, e);
                    write_hint(term, &e.hint(max))?;
                }
            }
        }
    }

    fn ask_value(&self, term: &mut impl TerminalIO, optional: bool) -> Result<String, AskError> {
        let text = match &self.default {
            Some(default) => format!("Enter value for {:?} [{}]: ", self.title, default),
            None => format!("Enter value for {:?}: ", self.title),
        };

        loop {
            let answer = prompt(term, &text)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            if let Some(default) = &self.default {
                return Ok(default.clone());
            }
            if optional {
                return Ok(answer);
            }
            log::debug!("{:?}: empty answer for a required value", self.title);
            write_hint(term, VALUE_REQUIRED_HINT)?;
        }
    }
}

/// Ask a question with the given options. See [`OptionPrompt`].
pub fn ask_options<S: Into<String>>(
    title: &str,
    default: &str,
    optional: bool,
    term: &mut impl TerminalIO,
    options: impl IntoIterator<Item = S>,
) -> Result<String, AskError> {
    OptionPrompt::new(title)
        .default(default)
        .optional(optional)
        .options(options)
        .ask(term)
}

/// Show a numbered menu and read one option number.
///
/// Unlike [`OptionPrompt`], an invalid answer is returned as an error.
///
/// # Errors
///
/// - [`AskError::EmptyInput`] on an empty answer
/// - [`AskError::ParseFailure`] when the answer is not a number
/// - [`AskError::OutOfRange`] when the number is not listed
pub fn select_from_strings<S: AsRef<str>>(
    title: &str,
    options: &[S],
    term: &mut impl TerminalIO,
) -> Result<String, AskError> {
    let answer = prompt_menu(title, options, term)?;
    if answer.is_empty() {
        return Err(AskError::EmptyInput);
    }
    pick(&answer, options)
}

/// Like [`select_from_strings`], but an empty answer picks the option at
/// the 1-based `default_index`.
pub fn select_from_strings_with_default<S: AsRef<str>>(
    title: &str,
    default_index: usize,
    options: &[S],
    term: &mut impl TerminalIO,
) -> Result<String, AskError> {
    let answer = prompt_menu(title, options, term)?;
    if answer.is_empty() {
        log::debug!("{:?}: empty answer, using option {}", title, default_index);
        return pick(&default_index.to_string(), options);
    }
    pick(&answer, options)
}

fn prompt_menu<S: AsRef<str>>(
    title: &str,
    options: &[S],
    term: &mut impl TerminalIO,
) -> Result<String, AskError> {
    term.write(&format!("Select {:?} from the list:\n", title))?;
    term.write(&render_menu(options, None))?;
    prompt(term, NUMBER_PROMPT)
}

fn pick<S: AsRef<str>>(answer: &str, options: &[S]) -> Result<String, AskError> {
    let n = parse_option_number(answer, options.len())?;
    Ok(options[n - 1].as_ref().to_string())
}

/// Render `[i] : label` lines, with an optional trailing extra entry.
fn render_menu<S: AsRef<str>>(options: &[S], extra: Option<&str>) -> String {
    options
        .iter()
        .map(AsRef::<str>::as_ref)
        .chain(extra)
        .enumerate()
        .map(|(i, label)| format!("[{}] : {}\n", i + 1, label))
        .collect()
}
