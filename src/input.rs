//! Whitespace tokenizer shared by every batch program.
//!
//! [`Scanner`] reads a fully-buffered input in two modes that can be mixed:
//! token mode skips any whitespace (spaces, tabs, newlines) and returns the
//! next run of non-whitespace; line mode returns the rest of the current
//! line. After a token read, [`next_line`](Scanner::next_line) returns what
//! follows the token on the same line (often the empty string), which is how
//! line-oriented instances (DFS adjacency lines) skip past their header.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::input::Scanner;
//!
//! let mut scanner = Scanner::new("1\n2\nA B\nB\n");
//! assert_eq!(scanner.next_count("graph count"), Ok(1));
//! assert_eq!(scanner.next_count("node count"), Ok(2));
//! assert_eq!(scanner.next_line(), Some(""));
//! assert_eq!(scanner.next_line(), Some("A B"));
//! assert_eq!(scanner.next_line(), Some("B"));
//! assert!(scanner.expect_end().is_ok());
//! ```

use crate::error::{InputError, InputErrorKind};
use std::str::FromStr;

/// Cursor over batch input text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            self.pos = self.input.len();
            return None;
        }
        let start = self.pos + (rest.len() - trimmed.len());
        let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        self.pos = start + len;
        Some(&self.input[start..start + len])
    }

    /// Parses the next token as an integer of type `T`.
    ///
    /// Tokens that are not integers, or do not fit `T`, are
    /// [`InvalidInteger`](InputErrorKind::InvalidInteger).
    pub fn next_int<T>(&mut self) -> Result<T, InputError>
    where
        T: FromStr,
    {
        self.next_value("integer")
    }

    fn next_value<T>(&mut self, expected: &'static str) -> Result<T, InputError>
    where
        T: FromStr,
    {
        let token = self
            .next_token()
            .ok_or_else(|| InputError::new(InputErrorKind::UnexpectedEof { expected }))?;
        token.parse().map_err(|_| {
            InputError::new(InputErrorKind::InvalidInteger {
                token: token.to_owned(),
            })
        })
    }

    /// Reads a declared element count; `what` names it in end-of-input errors.
    ///
    /// Negative counts are malformed input, not an empty collection.
    pub fn next_count(&mut self, what: &'static str) -> Result<usize, InputError> {
        let value: i64 = self.next_value(what)?;
        usize::try_from(value)
            .map_err(|_| InputError::new(InputErrorKind::NegativeCount { value }))
    }

    /// Returns the rest of the current line and moves to the start of the next.
    ///
    /// A trailing `\r` is stripped. Returns `None` only when the cursor is
    /// already at the end of input.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let (line, consumed) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Like [`next_line`](Self::next_line), but end of input is an error.
    pub fn require_line(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        self.next_line()
            .ok_or_else(|| InputError::new(InputErrorKind::UnexpectedEof { expected }))
    }

    /// Succeeds if only whitespace remains.
    pub fn expect_end(&mut self) -> Result<(), InputError> {
        match self.next_token() {
            None => Ok(()),
            Some(token) => Err(InputError::new(InputErrorKind::TrailingInput {
                token: token.to_owned(),
            })),
        }
    }

    /// Returns `true` if only whitespace remains. Does not consume input.
    pub fn is_exhausted(&self) -> bool {
        self.input[self.pos..].trim_start().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines_and_tabs() {
        let mut scanner = Scanner::new("  3\t4\n\n  5 ");
        assert_eq!(scanner.next_token(), Some("3"));
        assert_eq!(scanner.next_token(), Some("4"));
        assert_eq!(scanner.next_token(), Some("5"));
        assert_eq!(scanner.next_token(), None);
        assert!(scanner.is_exhausted());
    }

    #[test]
    fn next_int_parses_signed_values() {
        let mut scanner = Scanner::new("-7 +8 0");
        assert_eq!(scanner.next_int::<i64>(), Ok(-7));
        assert_eq!(scanner.next_int::<i64>(), Ok(8));
        assert_eq!(scanner.next_int::<i32>(), Ok(0));
    }

    #[test]
    fn next_int_rejects_non_integers() {
        let mut scanner = Scanner::new("1.5");
        let err = scanner.next_int::<i64>().unwrap_err();
        assert_eq!(
            err.kind(),
            &InputErrorKind::InvalidInteger {
                token: "1.5".to_string()
            }
        );
    }

    #[test]
    fn next_int_rejects_out_of_range() {
        let mut scanner = Scanner::new("99999999999999999999");
        assert!(matches!(
            scanner.next_int::<i64>().unwrap_err().kind(),
            InputErrorKind::InvalidInteger { .. }
        ));
    }

    #[test]
    fn next_int_at_end_of_input() {
        let mut scanner = Scanner::new("   \n");
        assert_eq!(
            scanner.next_int::<i64>().unwrap_err().kind(),
            &InputErrorKind::UnexpectedEof {
                expected: "integer"
            }
        );
    }

    #[test]
    fn next_count_rejects_negative() {
        let mut scanner = Scanner::new("-1");
        assert_eq!(
            scanner.next_count("request count").unwrap_err().kind(),
            &InputErrorKind::NegativeCount { value: -1 }
        );
    }

    #[test]
    fn next_count_names_missing_value() {
        let mut scanner = Scanner::new("");
        assert_eq!(
            scanner.next_count("request count").unwrap_err().kind(),
            &InputErrorKind::UnexpectedEof {
                expected: "request count"
            }
        );
    }

    #[test]
    fn next_line_after_token_returns_remainder() {
        let mut scanner = Scanner::new("2 tail\r\nnext");
        assert_eq!(scanner.next_token(), Some("2"));
        assert_eq!(scanner.next_line(), Some(" tail"));
        assert_eq!(scanner.next_line(), Some("next"));
        assert_eq!(scanner.next_line(), None);
    }

    #[test]
    fn next_line_returns_empty_lines() {
        let mut scanner = Scanner::new("\n\nx");
        assert_eq!(scanner.next_line(), Some(""));
        assert_eq!(scanner.next_line(), Some(""));
        assert_eq!(scanner.require_line("node line"), Ok("x"));
        assert_eq!(
            scanner.require_line("node line").unwrap_err().kind(),
            &InputErrorKind::UnexpectedEof {
                expected: "node line"
            }
        );
    }

    #[test]
    fn expect_end_reports_first_trailing_token() {
        let mut scanner = Scanner::new("1 junk more");
        scanner.next_token();
        assert_eq!(
            scanner.expect_end().unwrap_err().kind(),
            &InputErrorKind::TrailingInput {
                token: "junk".to_string()
            }
        );
    }

    #[test]
    fn handles_multibyte_whitespace_and_labels() {
        let mut scanner = Scanner::new("α\u{00A0}β");
        assert_eq!(scanner.next_token(), Some("α"));
        assert_eq!(scanner.next_token(), Some("β"));
    }
}
