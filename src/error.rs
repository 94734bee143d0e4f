//! Error types for reading, writing and validating documents.
//!
//! Parsing a `&str` never fails: every input splits into some set of rows and
//! tokens. Errors come from the I/O boundary and from the opt-in strict mode.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: File or stream reading/writing failures
//! - **Invalid Tokens**: A token that cannot survive a round-trip, reported only
//!   by [`TokenRow::validate`](crate::TokenRow::validate),
//!   [`Document::validate`](crate::Document::validate) or strict options
//! - **Invalid Separators**: A separator containing a line break, reported by the
//!   same strict checks
//! - **Invalid UTF-8**: Raw bytes or file contents that do not decode as text
//!
//! ## Examples
//!
//! ```rust
//! use simple_db_format::{Document, Error};
//!
//! let result = Document::load("/definitely/not/here.db", ";");
//! assert!(matches!(result, Err(Error::Io { .. })));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Why a token was rejected by strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenProblem {
    /// The token is the empty string and would vanish on re-parse.
    Empty,
    /// The token contains the active separator.
    ContainsSeparator,
    /// The token contains `\r` or `\n`.
    ContainsLineBreak,
    /// The separator is empty, so the token would merge with the one before it.
    Unseparated,
}

impl fmt::Display for TokenProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenProblem::Empty => f.write_str("token is empty"),
            TokenProblem::ContainsSeparator => f.write_str("token contains the separator"),
            TokenProblem::ContainsLineBreak => f.write_str("token contains a line break"),
            TokenProblem::Unseparated => f.write_str("token follows another with no separator"),
        }
    }
}

/// All errors this crate reports.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {msg}")]
    Io { kind: io::ErrorKind, msg: String },

    /// A token that would not round-trip (strict mode only)
    #[error("Invalid token at row {row}, column {column}: {problem}")]
    InvalidToken {
        row: usize,
        column: usize,
        problem: TokenProblem,
    },

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// A separator containing a line break (strict mode only)
    #[error("Invalid separator {0:?}: separator contains a line break")]
    InvalidSeparator(String),
}

impl Error {
    /// Wraps an [`io::Error`], prefixing the message with `context` (usually a path).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::Error;
    /// use std::io;
    ///
    /// let err = Error::io("data.db", &io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.to_string().contains("data.db"));
    /// assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    /// ```
    pub fn io(context: &str, err: &io::Error) -> Self {
        let msg = if context.is_empty() {
            err.to_string()
        } else {
            format!("{}: {}", context, err)
        };
        Error::Io {
            kind: err.kind(),
            msg,
        }
    }

    /// Creates an invalid token error. `row` and `column` are zero-based.
    pub fn invalid_token(row: usize, column: usize, problem: TokenProblem) -> Self {
        Error::InvalidToken {
            row,
            column,
            problem,
        }
    }

    /// The underlying [`io::ErrorKind`] for I/O failures.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Io { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io("", &err)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
