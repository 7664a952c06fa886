//! Line-oriented prompt handling over arbitrary reader/writer pairs.
//!
//! The menu talks to stdin/stdout in production and to in-memory buffers in
//! tests; everything goes through [`Console`].

use std::io::{BufRead, Write};

use crate::menu::CommandError;

/// A prompting terminal.
pub struct Console<R, W> {
    input: R,
    pub(crate) output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its trailing newline. Returns `None` at end of
    /// input.
    ///
    /// The whole line is consumed even when it is not valid UTF-8, so a bad
    /// line is reported once and the next read starts cleanly.
    pub fn read_line(&mut self) -> Result<Option<String>, CommandError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with(b"\n") || buf.ends_with(b"\r") {
            buf.pop();
        }
        let line = String::from_utf8(buf).map_err(|_| CommandError::InvalidEncoding)?;
        Ok(Some(line))
    }

    /// Print `prompt` and read the reply. End of input mid-command is an error.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, CommandError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(CommandError::InputClosed)
    }

    /// Prompt for a decimal integer. Surrounding whitespace is ignored.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, CommandError> {
        let raw = self.prompt(prompt)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| CommandError::InputFormat(raw))
    }

    /// Prompt for a 1-indexed planner position.
    pub fn prompt_position(&mut self) -> Result<usize, CommandError> {
        let value = self.prompt_int("Enter position: ")?;
        usize::try_from(value).map_err(|_| CommandError::NegativePosition(value))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_strips_line_endings() {
        let mut c = console("first\r\nsecond\n");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_rejects_invalid_utf8_and_recovers() {
        let mut c = Console::new(Cursor::new(b"M\xfcller\nnext\n".to_vec()), Vec::new());
        assert!(matches!(c.read_line(), Err(CommandError::InvalidEncoding)));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn prompt_writes_the_prompt_text() {
        let mut c = console("CSE\n");
        assert_eq!(c.prompt("Enter department: ").unwrap(), "CSE");
        assert_eq!(c.into_output(), b"Enter department: ");
    }

    #[test]
    fn prompt_int_trims_whitespace() {
        let mut c = console("  42 \n");
        assert_eq!(c.prompt_int("n: ").unwrap(), 42);
    }

    #[test]
    fn prompt_int_rejects_non_integers() {
        let mut c = console("4.5\n");
        match c.prompt_int("n: ") {
            Err(CommandError::InputFormat(raw)) => assert_eq!(raw, "4.5"),
            other => panic!("expected InputFormat, got {other:?}"),
        }
    }

    #[test]
    fn prompt_position_rejects_negative_values() {
        let mut c = console("-3\n");
        assert!(matches!(
            c.prompt_position(),
            Err(CommandError::NegativePosition(-3))
        ));
    }

    #[test]
    fn prompt_at_end_of_input_is_input_closed() {
        let mut c = console("");
        assert!(matches!(c.prompt("x: "), Err(CommandError::InputClosed)));
    }
}
