//! Text output.
//!
//! This module provides the [`Serializer`] that writes rows and documents back
//! into their textual form.
//!
//! Most users should call [`Document::serialize`](crate::Document::serialize) or
//! the crate-root [`to_string`](crate::to_string) family instead.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use simple_db_format::{row, FormatOptions, LineEnding, Serializer};
//!
//! let options = FormatOptions::new().with_line_ending(LineEnding::Unix);
//! let mut serializer = Serializer::new(&options);
//! serializer.write_row(&row!["a", "b"]).unwrap();
//! serializer.write_row(&row!["c"]).unwrap();
//! assert_eq!(serializer.into_inner(), "a;b\nc");
//! ```

use crate::error::TokenProblem;
use crate::{Error, FormatOptions, Result, TokenRow};

/// Writes rows into a single string, one per line.
///
/// Terminators go between rows, never after the last one.
pub struct Serializer<'o> {
    output: String,
    options: &'o FormatOptions,
    rows_written: usize,
}

impl<'o> Serializer<'o> {
    pub fn new(options: &'o FormatOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            rows_written: 0,
        }
    }

    /// Appends one row, preceded by a line terminator unless it is the first.
    ///
    /// # Errors
    ///
    /// With strict options, returns [`Error::InvalidSeparator`] for a separator
    /// containing a line break, or [`Error::InvalidToken`] for a token that
    /// would not survive a round-trip. Nothing is written in either case.
    pub fn write_row(&mut self, row: &TokenRow) -> Result<()> {
        if self.options.strict {
            check_separator(&self.options.separator).map_err(|err| {
                tracing::warn!(%err, "strict serialization rejected separator");
                err
            })?;
            if let Err((column, problem)) = check_tokens(row, &self.options.separator) {
                tracing::warn!(
                    row = self.rows_written,
                    column,
                    %problem,
                    "strict serialization rejected token"
                );
                return Err(Error::invalid_token(self.rows_written, column, problem));
            }
        }
        if self.rows_written > 0 {
            self.output.push_str(self.options.line_ending.as_str());
        }
        write_tokens(&mut self.output, &row.tokens, &self.options.separator);
        self.rows_written += 1;
        Ok(())
    }

    /// Number of rows written so far.
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

/// Joins `tokens` with `separator` onto the end of `out`.
pub(crate) fn write_tokens(out: &mut String, tokens: &[String], separator: &str) {
    let mut iter = tokens.iter();
    if let Some(first) = iter.next() {
        out.push_str(first);
        for token in iter {
            out.push_str(separator);
            out.push_str(token);
        }
    }
}

/// Rejects a separator that would split one row across several lines.
pub(crate) fn check_separator(separator: &str) -> Result<()> {
    if separator.contains(['\r', '\n'].as_slice()) {
        return Err(Error::InvalidSeparator(separator.to_string()));
    }
    Ok(())
}

/// First token of `row` that would not re-parse to itself.
pub(crate) fn check_tokens(
    row: &TokenRow,
    separator: &str,
) -> std::result::Result<(), (usize, TokenProblem)> {
    for (column, token) in row.tokens.iter().enumerate() {
        if let Some(problem) = token_problem(token, separator) {
            return Err((column, problem));
        }
    }
    // Nothing is written between tokens, so they fuse into one
    if separator.is_empty() && row.tokens.len() > 1 {
        return Err((1, TokenProblem::Unseparated));
    }
    Ok(())
}

fn token_problem(token: &str, separator: &str) -> Option<TokenProblem> {
    if token.is_empty() {
        Some(TokenProblem::Empty)
    } else if token.contains(['\r', '\n'].as_slice()) {
        Some(TokenProblem::ContainsLineBreak)
    } else if separator.is_empty() {
        token
            .contains(char::is_whitespace)
            .then_some(TokenProblem::ContainsSeparator)
    } else if token.contains(separator) {
        Some(TokenProblem::ContainsSeparator)
    } else {
        None
    }
}
