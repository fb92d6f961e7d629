//! Terminal I/O capability.
//!
//! Every ask takes its input and output through [`TerminalIO`], so the same
//! code drives the real console, arbitrary streams, and scripted tests.

use std::io::{self, BufRead, Cursor, Write};

/// Abstraction over line-oriented terminal I/O.
pub trait TerminalIO {
    /// Whether hint messages may carry ANSI styling.
    fn supports_styling(&self) -> bool;

    /// Write text to the output. It must be visible before the next read blocks.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read one raw line, including its terminator.
    ///
    /// Returns an empty string once the input is exhausted.
    fn read_line(&mut self) -> io::Result<String>;
}

impl<T: TerminalIO + ?Sized> TerminalIO for &mut T {
    fn supports_styling(&self) -> bool {
        (**self).supports_styling()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}

/// The process's stdin and stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTerminal {
    styled: bool,
}

impl StdTerminal {
    /// Create a terminal over the standard streams.
    ///
    /// Styling is decided by the caller; the core never inspects file
    /// descriptors.
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }
}

impl TerminalIO for StdTerminal {
    fn supports_styling(&self) -> bool {
        self.styled
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        read_lossy_line(&mut io::stdin().lock())
    }
}

/// A terminal over any buffered reader and writer.
///
/// # Example
///
/// ```
/// use askit::{ask_string, StreamTerminal};
///
/// let mut out = Vec::new();
/// let mut term = StreamTerminal::new("Ada\n".as_bytes(), &mut out);
/// assert_eq!(ask_string("Name", &mut term).unwrap(), "Ada");
/// drop(term);
/// assert_eq!(String::from_utf8(out).unwrap(), "Name: ");
/// ```
#[derive(Debug)]
pub struct StreamTerminal<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> StreamTerminal<R, W> {
    /// Create an unstyled terminal over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    /// Control whether hint messages are styled.
    ///
    /// Default is `false`.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Consume the terminal and return its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> TerminalIO for StreamTerminal<R, W> {
    fn supports_styling(&self) -> bool {
        self.styled
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        read_lossy_line(&mut self.reader)
    }
}

/// Mock terminal for testing prompts.
///
/// Input is a fixed script; everything written is captured and available
/// through [`output`](Self::output).
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    input: Cursor<Vec<u8>>,
    output: String,
    styled: bool,
}

impl MockTerminal {
    /// Create a mock that reads the given raw input.
    ///
    /// Lines are split on `\n`; a trailing line without a newline is still
    /// returned as a line.
    pub fn with_input(input: impl Into<String>) -> Self {
        Self::with_bytes(input.into().into_bytes())
    }

    /// Create a mock that reads raw bytes, which need not be valid UTF-8.
    pub fn with_bytes(input: impl Into<Vec<u8>>) -> Self {
        Self {
            input: Cursor::new(input.into()),
            output: String::new(),
            styled: false,
        }
    }

    /// Create a mock that returns the given lines in sequence, then EOF.
    ///
    /// Useful for testing retry scenarios.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut input = String::new();
        for response in responses {
            input.push_str(&response.into());
            input.push('\n');
        }
        Self::with_input(input)
    }

    /// Create a mock that simulates EOF (Ctrl+D) on the first read.
    pub fn eof() -> Self {
        Self::with_input("")
    }

    /// Control whether the mock reports styling support.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Whether any input is left unread.
    pub fn has_remaining_input(&self) -> bool {
        (self.input.position() as usize) < self.input.get_ref().len()
    }
}

impl TerminalIO for MockTerminal {
    fn supports_styling(&self) -> bool {
        self.styled
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        read_lossy_line(&mut self.input)
    }
}

/// Read up to and including the next `\n`.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is still
/// a line and only real I/O errors fail.
fn read_lossy_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_reads_lines_in_order() {
        let mut term = MockTerminal::with_input("one\ntwo");
        assert_eq!(term.read_line().unwrap(), "one\n");
        assert_eq!(term.read_line().unwrap(), "two");
        assert_eq!(term.read_line().unwrap(), "");
    }

    #[test]
    fn mock_responses_are_newline_terminated() {
        let mut term = MockTerminal::with_responses(["a", ""]);
        assert_eq!(term.read_line().unwrap(), "a\n");
        assert_eq!(term.read_line().unwrap(), "\n");
        assert!(!term.has_remaining_input());
        assert_eq!(term.read_line().unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut term = MockTerminal::with_bytes(b"caf\xe9\nnext\n".to_vec());
        assert_eq!(term.read_line().unwrap(), "caf\u{fffd}\n");
        assert_eq!(term.read_line().unwrap(), "next\n");

        let mut term = StreamTerminal::new(&b"\xff\n"[..], Vec::new());
        assert_eq!(term.read_line().unwrap(), "\u{fffd}\n");
    }

    #[test]
    fn mock_eof_reads_nothing() {
        let mut term = MockTerminal::eof();
        assert_eq!(term.read_line().unwrap(), "");
    }

    #[test]
    fn mock_captures_output() {
        let mut term = MockTerminal::eof();
        term.write("Name: ").unwrap();
        term.write("again").unwrap();
        assert_eq!(term.output(), "Name: again");
    }

    #[test]
    fn mock_styling_defaults_off() {
        assert!(!MockTerminal::eof().supports_styling());
        assert!(MockTerminal::eof().styled(true).supports_styling());
    }

    #[test]
    fn stream_terminal_round_trip() {
        let mut term = StreamTerminal::new("line\n".as_bytes(), Vec::new());
        term.write("prompt: ").unwrap();
        assert_eq!(term.read_line().unwrap(), "line\n");
        let (_, out) = term.into_inner();
        assert_eq!(out, b"prompt: ");
    }

    #[test]
    fn mutable_reference_is_a_terminal() {
        fn write_through(mut term: impl TerminalIO) {
            term.write("x").unwrap();
        }

        let mut term = MockTerminal::eof();
        write_through(&mut term);
        assert_eq!(term.output(), "x");
    }
}
