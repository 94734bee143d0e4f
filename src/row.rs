//! A single record: an ordered list of string tokens.
//!
//! ```rust
//! use simple_db_format::TokenRow;
//!
//! let mut row = TokenRow::parse("alice;admin;;active", ";");
//! assert_eq!(row.tokens, vec!["alice", "admin", "active"]);
//!
//! row.tokens[1] = "owner".to_string();
//! assert_eq!(row.serialize("|"), "alice|owner|active");
//! ```

use crate::de::split_tokens;
use crate::error::{Error, Result};
use crate::options::DEFAULT_SEPARATOR;
use crate::ser::{check_separator, check_tokens, write_tokens};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// One line of a [`Document`](crate::Document).
///
/// The token list is public and can be edited freely; nothing is checked on
/// mutation. Tokens are expected to be non-empty and free of the separator and
/// of line breaks, otherwise a serialize/parse cycle will not reproduce them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenRow {
    pub tokens: Vec<String>,
}

impl TokenRow {
    /// Creates a row with no tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `line` on every literal occurrence of `separator`.
    ///
    /// Empty pieces are dropped, so `"a;;b"` gives two tokens and `""` gives none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::TokenRow;
    ///
    /// assert_eq!(TokenRow::parse("a;;b", ";").tokens, vec!["a", "b"]);
    /// assert_eq!(TokenRow::parse("no separator", ";").len(), 1);
    /// assert!(TokenRow::parse("", ";").is_empty());
    /// ```
    #[must_use]
    pub fn parse(line: &str, separator: &str) -> Self {
        TokenRow {
            tokens: split_tokens(line, separator),
        }
    }

    /// Wraps `tokens` as they are, keeping order, duplicates and empty strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::TokenRow;
    ///
    /// let row = TokenRow::from_tokens(["x", "", "x"]);
    /// assert_eq!(row.tokens, vec!["x", "", "x"]);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenRow {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Joins the tokens with `separator`. A row with no tokens gives `""`.
    #[must_use]
    pub fn serialize(&self, separator: &str) -> String {
        let mut out = String::new();
        write_tokens(&mut out, &self.tokens, separator);
        out
    }

    /// Checks that every token would survive a round-trip with `separator`.
    ///
    /// The reported row index is always 0; [`Document::validate`](crate::Document::validate)
    /// fills in the real one.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSeparator`] when `separator` contains a line break.
    /// [`Error::InvalidToken`] for the first empty token, token containing
    /// `separator`, or token containing a line break, and for a second token
    /// when `separator` is empty.
    pub fn validate(&self, separator: &str) -> Result<()> {
        check_separator(separator)?;
        check_tokens(self, separator)
            .map_err(|(column, problem)| Error::invalid_token(0, column, problem))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, String> {
        self.tokens.iter_mut()
    }
}

impl fmt::Display for TokenRow {
    /// Writes the row joined with the default `;` separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(DEFAULT_SEPARATOR))
    }
}

impl FromStr for TokenRow {
    type Err = Infallible;

    /// Parses with the default `;` separator.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TokenRow::parse(s, DEFAULT_SEPARATOR))
    }
}

impl From<Vec<String>> for TokenRow {
    fn from(tokens: Vec<String>) -> Self {
        TokenRow { tokens }
    }
}

impl From<TokenRow> for Vec<String> {
    fn from(row: TokenRow) -> Self {
        row.tokens
    }
}

impl<S: Into<String>> FromIterator<S> for TokenRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TokenRow::from_tokens(iter)
    }
}

impl<S: Into<String>> Extend<S> for TokenRow {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for TokenRow {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenRow {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenRow {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.tokens[index]
    }
}
