//! Whitespace-delimited token reading.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::CalcError;

/// Reads whitespace-delimited tokens from a buffered reader.
///
/// Input is pulled one line at a time and only when no token is pending, so
/// an interactive reader is never asked for more than the current answer.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}

/// Parse an operand token.
///
/// Accepts anything `f64::from_str` accepts except non-finite values, so
/// `inf` and `NaN` are rejected along with non-numeric text.
pub fn parse_number(token: &str) -> Result<f64, CalcError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<String> {
        let mut tokens = Tokens::new(input.as_bytes());
        let mut out = Vec::new();
        while let Some(token) = tokens.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(collect("eq\n2\n+\n3\n"), ["eq", "2", "+", "3"]);
        assert_eq!(collect("  eq 2\t+\r\n\n 3"), ["eq", "2", "+", "3"]);
    }

    #[test]
    fn empty_input() {
        assert!(collect("").is_empty());
        assert!(collect(" \n\t\n").is_empty());
    }

    #[test]
    fn reads_lazily() {
        let mut reader = io::Cursor::new(b"a b\nc\n".to_vec());
        let mut tokens = Tokens::new(&mut reader);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(reader_position(&tokens), 4);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("b"));
        assert_eq!(reader_position(&tokens), 4);
    }

    fn reader_position(tokens: &Tokens<&mut io::Cursor<Vec<u8>>>) -> u64 {
        tokens.reader.position()
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut tokens = Tokens::new(&b"\xff\xfe 1\n"[..]);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn parse_number_accepts_decimal_forms() {
        assert_eq!(parse_number("2"), Ok(2.0));
        assert_eq!(parse_number("-1.5"), Ok(-1.5));
        assert_eq!(parse_number("+.5"), Ok(0.5));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
    }

    #[test]
    fn parse_number_rejects_garbage_and_non_finite() {
        for token in ["abc", "2+", "1,5", "inf", "-infinity", "NaN", "1e400"] {
            assert_eq!(
                parse_number(token),
                Err(CalcError::InvalidNumber(token.to_string())),
                "{token} should be rejected"
            );
        }
    }
}
