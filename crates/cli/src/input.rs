//! Line-oriented prompting over any reader/writer pair.
//!
//! Every prompt consumes exactly one input line, so a malformed answer never
//! leaks into the next prompt.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Result of reading one typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<T> {
    Value(T),
    /// Line did not parse as the expected type
    Malformed,
    /// Input stream closed
    Eof,
}

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print the prompt and read a line without its line terminator.
    /// Bytes that are not valid UTF-8 are replaced, never rejected.
    /// Returns None at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a line and parse its leading integer; the rest of the line is discarded
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Input<T>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(Input::Eof);
        };

        match leading_integer(&line).and_then(|digits| digits.parse().ok()) {
            Some(value) => Ok(Input::Value(value)),
            None => {
                debug!(input = %line, "malformed numeric input");
                Ok(Input::Malformed)
            }
        }
    }

    /// Yes/no question; anything other than y/Y counts as no
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Input<bool>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(Input::Eof);
        };
        let yes = matches!(line.trim_start().chars().next(), Some('y' | 'Y'));
        Ok(Input::Value(yes))
    }
}

/// Optional sign followed by at least one digit, after leading whitespace
fn leading_integer(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    (digits > 0).then(|| &trimmed[..sign_len + digits])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut p = prompter("Alice Smith\r\n");
        assert_eq!(p.read_line("> ").unwrap(), Some("Alice Smith".to_string()));
        assert_eq!(p.read_line("> ").unwrap(), None);
        assert_eq!(String::from_utf8(p.into_writer()).unwrap(), "> > ");
    }

    #[test]
    fn test_read_number_discards_rest_of_line() {
        let mut p = prompter("2 extra words\n7\n");
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Value(2));
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Value(7));
    }

    #[test]
    fn test_read_number_malformed_consumes_line() {
        let mut p = prompter("abc\n\n-4\n");
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Malformed);
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Malformed);
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Value(-4));
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Eof);
    }

    #[test]
    fn test_read_number_takes_leading_digits() {
        let mut p = prompter("3abc\n  +12, please\n-7x\n- 5\nabc3\n");
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Value(3));
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Value(12));
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Value(-7));
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Malformed);
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Malformed);
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut p = Prompter::new(Cursor::new(b"Jos\xe9\n\xff\xfe\n".to_vec()), Vec::new());
        assert_eq!(p.read_line("").unwrap(), Some("Jos\u{FFFD}".to_string()));
        assert_eq!(p.read_number::<i64>("").unwrap(), Input::Malformed);
        assert_eq!(p.read_line("").unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("Y\nyes\nn\n\n");
        assert_eq!(p.confirm("").unwrap(), Input::Value(true));
        assert_eq!(p.confirm("").unwrap(), Input::Value(true));
        assert_eq!(p.confirm("").unwrap(), Input::Value(false));
        assert_eq!(p.confirm("").unwrap(), Input::Value(false));
        assert_eq!(p.confirm("").unwrap(), Input::Eof);
    }
}
