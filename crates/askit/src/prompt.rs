//! The prompt primitive: write once, read one line.

use console::style;

use crate::terminal::TerminalIO;
use crate::AskError;

/// Write `text` and read one line of input.
///
/// The trailing newline (and a preceding carriage return) is stripped. A
/// final line without a newline is returned as-is.
///
/// # Errors
///
/// [`AskError::EndOfInput`] when the source is exhausted and
/// [`AskError::ReadFailure`] when writing or reading fails.
pub fn prompt<T: TerminalIO + ?Sized>(term: &mut T, text: &str) -> Result<String, AskError> {
    term.write(text)?;

    let line = term.read_line()?;
    if line.is_empty() {
        log::debug!("input exhausted while prompting {:?}", text);
        return Err(AskError::EndOfInput);
    }
    log::trace!("read {} bytes", line.len());

    Ok(strip_line_ending(&line).to_string())
}

/// Build the prompt text for a titled question.
///
/// A non-empty default is shown in brackets: `Name [anonymous]: `.
pub fn title_prompt(title: &str, default: Option<&str>) -> String {
    match default {
        Some(default) if !default.is_empty() => format!("{} [{}]: ", title, default),
        _ => format!("{}: ", title),
    }
}

/// Write a hint line before a retried prompt, styled when supported.
pub(crate) fn write_hint<T: TerminalIO + ?Sized>(
    term: &mut T,
    hint: &str,
) -> Result<(), AskError> {
    let line = if term.supports_styling() {
        format!("{}\n", style(hint).red().bold().force_styling(true))
    } else {
        format!("{}\n", hint)
    };
    term.write(&line)?;
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ask_options, MockTerminal};
    use std::io;

    /// Accepts writes, fails every read.
    #[derive(Default)]
    struct BrokenInput {
        output: String,
    }

    impl TerminalIO for BrokenInput {
        fn supports_styling(&self) -> bool {
            false
        }

        fn write(&mut self, text: &str) -> io::Result<()> {
            self.output.push_str(text);
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        }
    }

    #[test]
    fn prompt_writes_once_and_strips_newline() {
        let mut term = MockTerminal::with_input("hello\n");
        assert_eq!(prompt(&mut term, "Say: ").unwrap(), "hello");
        assert_eq!(term.output(), "Say: ");
    }

    #[test]
    fn prompt_strips_crlf() {
        let mut term = MockTerminal::with_input("hello\r\n");
        assert_eq!(prompt(&mut term, "Say: ").unwrap(), "hello");
    }

    #[test]
    fn prompt_keeps_inner_whitespace() {
        let mut term = MockTerminal::with_input("  spaced out  \n");
        assert_eq!(prompt(&mut term, "Say: ").unwrap(), "  spaced out  ");
    }

    #[test]
    fn prompt_returns_last_line_without_newline() {
        let mut term = MockTerminal::with_input("no newline");
        assert_eq!(prompt(&mut term, "Say: ").unwrap(), "no newline");
    }

    #[test]
    fn prompt_empty_line_is_not_eof() {
        let mut term = MockTerminal::with_input("\n");
        assert_eq!(prompt(&mut term, "Say: ").unwrap(), "");
    }

    #[test]
    fn prompt_eof_fails() {
        let mut term = MockTerminal::eof();
        let result = prompt(&mut term, "Say: ");
        assert!(matches!(result, Err(AskError::EndOfInput)));
        assert_eq!(term.output(), "Say: ");
    }

    #[test]
    fn prompt_io_error_is_read_failure() {
        let mut term = BrokenInput::default();
        let err = prompt(&mut term, "Say: ").unwrap_err();
        assert!(matches!(&err, AskError::ReadFailure(e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(term.output, "Say: ");
    }

    #[test]
    fn selector_does_not_retry_io_errors() {
        let mut term = BrokenInput::default();
        let result = ask_options("title", "", false, &mut term, ["a", "b"]);
        assert!(matches!(result, Err(AskError::ReadFailure(_))));
        assert_eq!(
            term.output
                .matches("Type in the option's number, then hit Enter: ")
                .count(),
            1
        );
        assert!(!term.output.contains("pick a number"));
    }

    #[test]
    fn title_prompt_formats() {
        assert_eq!(title_prompt("Name", None), "Name: ");
        assert_eq!(title_prompt("Name", Some("")), "Name: ");
        assert_eq!(title_prompt("Name", Some("anon")), "Name [anon]: ");
    }

    #[test]
    fn hint_is_plain_without_styling() {
        let mut term = MockTerminal::eof();
        write_hint(&mut term, "try again").unwrap();
        assert_eq!(term.output(), "try again\n");
    }

    #[test]
    fn hint_is_styled_when_supported() {
        let mut term = MockTerminal::eof().styled(true);
        write_hint(&mut term, "try again").unwrap();
        let out = term.output();
        assert!(out.starts_with('\u{1b}'));
        assert!(out.contains("try again"));
        assert!(out.ends_with("\u{1b}[0m\n"));
    }
}
