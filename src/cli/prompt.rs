//! Line-oriented prompting and input validation.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::display::clear_screen;
use crate::error::{SalaryError, SalaryResult};
use crate::models::MaritalStatus;

/// Parses a non-negative whole number, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use salary_calculator::cli::parse_number;
///
/// assert_eq!(parse_number::<u64>(" 5000000 ").unwrap(), 5_000_000);
/// assert!(parse_number::<u64>("-1").is_err());
/// assert!(parse_number::<u64>("5.000.000").is_err());
/// ```
pub fn parse_number<T: FromStr>(input: &str) -> SalaryResult<T> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| SalaryError::InvalidNumber {
            input: input.to_string(),
        })
}

/// Parses a `y`/`n` marital status answer.
pub fn parse_marital_status(input: &str) -> SalaryResult<MaritalStatus> {
    MaritalStatus::from_answer(input).ok_or_else(|| SalaryError::InvalidMaritalStatus {
        token: input.to_string(),
    })
}

/// Asks questions on a writer and reads the answers from a reader.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter. With `clear_screen` set, invalid numbers clear the
    /// terminal before the error message is shown.
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    /// The writer prompts are written to.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the prompter and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Clears the terminal if clearing is enabled.
    pub fn clear(&mut self) -> SalaryResult<()> {
        if self.clear_screen {
            clear_screen(&mut self.writer)?;
        }
        Ok(())
    }

    /// Writes `prompt` and returns the next line without its line ending.
    ///
    /// Returns [`SalaryError::EndOfInput`] once the reader is exhausted.
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so such
    /// answers fail validation instead of failing the read.
    pub fn read_line(&mut self, prompt: &str) -> SalaryResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(SalaryError::EndOfInput);
        }

        let answer = String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        debug!(prompt = prompt.trim_end(), answer = %answer, "read answer");
        Ok(answer)
    }

    /// Asks for a non-negative whole number until one is given.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> SalaryResult<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse_number(&answer) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    debug!(input = %answer, "rejected number");
                    self.clear()?;
                    writeln!(self.writer, "{error}")?;
                }
            }
        }
    }

    /// Asks for a marital status once.
    ///
    /// An answer other than `y` or `n` is returned as
    /// [`SalaryError::InvalidMaritalStatus`] for the caller to handle.
    pub fn read_marital_status(&mut self, prompt: &str) -> SalaryResult<MaritalStatus> {
        let answer = self.read_line(prompt)?;
        parse_marital_status(&answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }

    #[test]
    fn test_parse_number_accepts_plus_sign() {
        assert_eq!(parse_number::<u32>("+12").unwrap(), 12);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for input in ["", "abc", "1e6", "12 000", "-5", "3.5"] {
            let error = parse_number::<u64>(input).unwrap_err();
            assert!(matches!(error, SalaryError::InvalidNumber { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_number_rejects_overflow() {
        assert!(parse_number::<u32>("4294967296").is_err());
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut p = prompter("hello\r\n");
        assert_eq!(p.read_line("? ").unwrap(), "hello");
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\n".to_vec()), Vec::new(), false);
        assert_eq!(p.read_line("? ").unwrap(), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_read_number_reprompts_after_invalid_utf8() {
        let mut p = Prompter::new(Cursor::new(b"\xff\n7\n".to_vec()), Vec::new(), false);
        let value: u32 = p.read_number("? ").unwrap();
        assert_eq!(value, 7);
        assert!(output(p).contains("Please enter a valid number!"));
    }

    #[test]
    fn test_read_line_at_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.read_line("? "), Err(SalaryError::EndOfInput)));
    }

    #[test]
    fn test_read_number_reprompts_until_valid() {
        let mut p = prompter("abc\n-3\n42\n");
        let value: u64 = p.read_number("Basic salary: ").unwrap();
        assert_eq!(value, 42);

        let out = output(p);
        assert_eq!(out.matches("Basic salary: ").count(), 3);
        assert_eq!(out.matches("Please enter a valid number!").count(), 2);
    }

    #[test]
    fn test_read_number_propagates_end_of_input() {
        let mut p = prompter("abc\n");
        let result: SalaryResult<u64> = p.read_number("Basic salary: ");
        assert!(matches!(result, Err(SalaryError::EndOfInput)));
    }

    #[test]
    fn test_read_number_clears_screen_when_enabled() {
        let mut p = Prompter::new(Cursor::new(b"x\n1\n".to_vec()), Vec::new(), true);
        let _: u32 = p.read_number("? ").unwrap();
        assert!(String::from_utf8(p.into_writer()).unwrap().contains("\u{1b}["));
    }

    #[test]
    fn test_read_marital_status() {
        let mut p = prompter("y\nn\nmaybe\n");
        assert_eq!(p.read_marital_status("? ").unwrap(), MaritalStatus::Married);
        assert_eq!(p.read_marital_status("? ").unwrap(), MaritalStatus::Unmarried);
        assert!(matches!(
            p.read_marital_status("? "),
            Err(SalaryError::InvalidMaritalStatus { token }) if token == "maybe"
        ));
    }
}
