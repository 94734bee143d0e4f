//! The full parsed representation of a text blob.
//!
//! A [`Document`] owns an ordered list of [`TokenRow`]s, one per non-empty source
//! line. It can be built from text, from a file or reader, or by hand, and written
//! back out with any separator and line ending.
//!
//! ```rust
//! use simple_db_format::Document;
//!
//! let mut doc = Document::parse("alice;admin\r\n\r\nbob;user", ";");
//! assert_eq!(doc.len(), 2);
//!
//! doc.rows.remove(0);
//! doc.rows[0].push("inactive");
//! assert_eq!(doc.rows[0].tokens, vec!["bob", "user", "inactive"]);
//! ```

use crate::de::Lines;
use crate::error::{Error, Result};
use crate::options::{FormatOptions, DEFAULT_SEPARATOR};
use crate::ser::{check_separator, check_tokens, Serializer};
use crate::TokenRow;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::str::FromStr;

/// An ordered list of rows, in source line order.
///
/// Rows are public and can be inserted, removed and edited without any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub rows: Vec<TokenRow>,
}

impl Document {
    /// Creates a document with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`, one row per non-empty line.
    ///
    /// Lines may end in `\r\n`, `\r` or `\n`, mixed freely. Each line is split
    /// with [`TokenRow::parse`] using `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::Document;
    ///
    /// let doc = Document::parse("a;b\nc;d\r\ne;f", ";");
    /// assert_eq!(doc.len(), 3);
    /// assert!(Document::parse("\n\r\n", ";").is_empty());
    /// ```
    #[must_use]
    pub fn parse(text: &str, separator: &str) -> Self {
        let rows: Vec<TokenRow> = Lines::new(text)
            .map(|line| TokenRow::parse(line, separator))
            .collect();
        tracing::trace!(rows = rows.len(), bytes = text.len(), "parsed document");
        Document { rows }
    }

    /// Parses `text` using the separator from `options`.
    #[must_use]
    pub fn parse_with_options(text: &str, options: &FormatOptions) -> Self {
        Self::parse(text, &options.separator)
    }

    /// Reads the whole file at `path` and parses it.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be read, e.g. it does not exist or
    /// permission is denied. [`Error::InvalidUtf8`] when it is not text.
    pub fn load(path: impl AsRef<Path>, separator: &str) -> Result<Self> {
        let path = path.as_ref();
        let text = read_text(path)?;
        let doc = Self::parse(&text, separator);
        tracing::debug!(
            path = %path.display(),
            rows = doc.len(),
            bytes = text.len(),
            "loaded document"
        );
        Ok(doc)
    }

    /// Like [`Document::load`], taking the separator from `options`.
    ///
    /// # Errors
    ///
    /// Same as [`Document::load`].
    pub fn load_with_options(path: impl AsRef<Path>, options: &FormatOptions) -> Result<Self> {
        Self::load(path, &options.separator)
    }

    /// Loads `path` and returns options whose line ending matches the file,
    /// so that saving with them keeps the file's terminators.
    ///
    /// # Errors
    ///
    /// Same as [`Document::load`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use simple_db_format::Document;
    ///
    /// let (mut doc, options) = Document::load_preserving("records.db", ";")?;
    /// doc.rows.push(simple_db_format::row!["new", "entry"]);
    /// doc.save_with_options("records.db", &options)?;
    /// # Ok::<(), simple_db_format::Error>(())
    /// ```
    pub fn load_preserving(
        path: impl AsRef<Path>,
        separator: &str,
    ) -> Result<(Self, FormatOptions)> {
        let path = path.as_ref();
        let text = read_text(path)?;
        let options = FormatOptions::detected(&text).with_separator(separator);
        let doc = Self::parse_with_options(&text, &options);
        tracing::debug!(
            path = %path.display(),
            rows = doc.len(),
            line_ending = ?options.line_ending,
            "loaded document"
        );
        Ok((doc, options))
    }

    /// Joins the rows with the platform line ending, each row joined with `separator`.
    ///
    /// Returns `None` when there are no rows, which is distinct from
    /// `Some("")` (one row with no tokens).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::{Document, TokenRow};
    ///
    /// assert_eq!(Document::new().serialize(";"), None);
    ///
    /// let doc = Document::from(vec![TokenRow::new()]);
    /// assert_eq!(doc.serialize(";"), Some(String::new()));
    /// ```
    #[must_use]
    pub fn serialize(&self, separator: &str) -> Option<String> {
        // Lenient options never reject a token
        self.serialize_with_options(&FormatOptions::new().with_separator(separator))
            .ok()
            .flatten()
    }

    /// Serializes with full control over separator, line ending and strictness.
    ///
    /// # Errors
    ///
    /// Only with `options.strict`: [`Error::InvalidSeparator`] for a separator
    /// containing a line break, or [`Error::InvalidToken`] for the first token
    /// that would not survive a round-trip.
    pub fn serialize_with_options(&self, options: &FormatOptions) -> Result<Option<String>> {
        if self.rows.is_empty() {
            return Ok(None);
        }
        let mut serializer = Serializer::new(options);
        for row in &self.rows {
            serializer.write_row(row)?;
        }
        Ok(Some(serializer.into_inner()))
    }

    /// Writes [`Document::serialize`] to `path`, replacing its contents.
    ///
    /// A document with no rows produces an empty file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>, separator: &str) -> Result<()> {
        self.save_with_options(path, &FormatOptions::new().with_separator(separator))
    }

    /// Like [`Document::save`], with explicit options.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on write failure; [`Error::InvalidSeparator`] or
    /// [`Error::InvalidToken`] under strict options, in which case the file is
    /// left untouched.
    pub fn save_with_options(&self, path: impl AsRef<Path>, options: &FormatOptions) -> Result<()> {
        let path = path.as_ref();
        let text = self.serialize_with_options(options)?.unwrap_or_default();
        fs::write(path, &text).map_err(|e| Error::io(&path.display().to_string(), &e))?;
        tracing::debug!(
            path = %path.display(),
            rows = self.len(),
            bytes = text.len(),
            "saved document"
        );
        Ok(())
    }

    /// Checks every token of every row against `separator`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSeparator`] when `separator` contains a line break,
    /// otherwise [`Error::InvalidToken`] with the position of the first
    /// offending token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::{document, Error};
    ///
    /// let doc = document![["a", "b"], ["c", "d;e"]];
    /// assert!(matches!(
    ///     doc.validate(";"),
    ///     Err(Error::InvalidToken { row: 1, column: 1, .. })
    /// ));
    /// ```
    pub fn validate(&self, separator: &str) -> Result<()> {
        check_separator(separator)?;
        for (index, row) in self.rows.iter().enumerate() {
            check_tokens(row, separator)
                .map_err(|(column, problem)| Error::invalid_token(index, column, problem))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TokenRow> {
        self.rows.get(index)
    }

    pub fn push(&mut self, row: impl Into<TokenRow>) {
        self.rows.push(row.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenRow> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TokenRow> {
        self.rows.iter_mut()
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(&path.display().to_string(), &e))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidUtf8(format!("{}: {}", path.display(), e)))
}

impl fmt::Display for Document {
    /// Writes the document with the default `;` separator; no rows writes nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.serialize(DEFAULT_SEPARATOR) {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl FromStr for Document {
    type Err = Infallible;

    /// Parses with the default `;` separator.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Document::parse(s, DEFAULT_SEPARATOR))
    }
}

impl From<Vec<TokenRow>> for Document {
    fn from(rows: Vec<TokenRow>) -> Self {
        Document { rows }
    }
}

impl FromIterator<TokenRow> for Document {
    fn from_iter<I: IntoIterator<Item = TokenRow>>(iter: I) -> Self {
        Document {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<TokenRow> for Document {
    fn extend<I: IntoIterator<Item = TokenRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl IntoIterator for Document {
    type Item = TokenRow;
    type IntoIter = std::vec::IntoIter<TokenRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a TokenRow;
    type IntoIter = std::slice::Iter<'a, TokenRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Index<usize> for Document {
    type Output = TokenRow;

    fn index(&self, index: usize) -> &TokenRow {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Document {
    fn index_mut(&mut self, index: usize) -> &mut TokenRow {
        &mut self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenProblem;
    use crate::{document, row, LineEnding};

    fn tokens(doc: &Document) -> Vec<Vec<String>> {
        doc.iter().map(|row| row.tokens.clone()).collect()
    }

    fn unix() -> FormatOptions {
        FormatOptions::new().with_line_ending(LineEnding::Unix)
    }

    #[test]
    fn test_parse_multiline_mixed_terminators() {
        let doc = Document::parse("a;b\nc;d\r\ne;f", ";");
        assert_eq!(
            tokens(&doc),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Document::parse("", ";").is_empty());
        assert!(Document::parse("\r\n\n\r", ";").is_empty());
    }

    #[test]
    fn test_parse_line_of_separators_gives_empty_row() {
        let doc = Document::parse("a\n;;\nb", ";");
        assert_eq!(doc.len(), 3);
        assert!(doc[1].is_empty());
    }

    #[test]
    fn test_parse_uses_given_separator_for_every_line() {
        let doc = Document::parse("a|b\nc|d;e", "|");
        assert_eq!(tokens(&doc), vec![vec!["a", "b"], vec!["c", "d;e"]]);
    }

    #[test]
    fn test_from_str_uses_default_separator() {
        let doc: Document = "a;b;c".parse().unwrap();
        assert_eq!(doc, Document::parse("a;b;c", ";"));
        assert_eq!(tokens(&doc), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_serialize_no_rows_is_none() {
        assert_eq!(Document::new().serialize(";"), None);
        assert_eq!(Document::new().to_string(), "");
    }

    #[test]
    fn test_serialize_single_empty_row_is_empty_string() {
        let doc = Document::from(vec![TokenRow::new()]);
        assert_eq!(doc.serialize(";"), Some(String::new()));
    }

    #[test]
    fn test_serialize_uses_system_line_ending() {
        let doc = document![["a", "b"], ["c"]];
        let expected = format!("a;b{}c", LineEnding::system_default().as_str());
        assert_eq!(doc.serialize(";"), Some(expected));
    }

    #[test]
    fn test_serialize_with_options() {
        let doc = document![["a", "b"], ["c"]];
        let options = unix().with_separator(", ");
        assert_eq!(
            doc.serialize_with_options(&options).unwrap().as_deref(),
            Some("a, b\nc")
        );
    }

    #[test]
    fn test_serialize_normalizes_input() {
        let doc = Document::parse("\r\n;a;;b;\r\rc\n\n", ";");
        let text = doc.serialize_with_options(&unix()).unwrap().unwrap();
        assert_eq!(text, "a;b\nc");
    }

    #[test]
    fn test_strict_serialize_reports_position() {
        let doc = document![["a"], ["b", "c\nd"]];
        let err = doc
            .serialize_with_options(&unix().with_strict(true))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidToken {
                row: 1,
                column: 1,
                problem: TokenProblem::ContainsLineBreak
            }
        ));
        // Lenient mode writes it anyway
        assert!(doc.serialize(";").is_some());
    }

    #[test]
    fn test_strict_serialize_rejects_separators_that_break_rows() {
        let doc = document![["a", "b"]];

        let fused = unix().with_separator("").with_strict(true);
        assert!(matches!(
            doc.serialize_with_options(&fused),
            Err(Error::InvalidToken {
                row: 0,
                column: 1,
                problem: TokenProblem::Unseparated
            })
        ));

        let newline = unix().with_separator("\n").with_strict(true);
        assert!(matches!(
            doc.serialize_with_options(&newline),
            Err(Error::InvalidSeparator(_))
        ));
        assert!(matches!(
            doc.validate("\r\n"),
            Err(Error::InvalidSeparator(_))
        ));

        // Lenient mode still writes both, and they read back differently
        let text = doc.serialize_with_options(&unix().with_separator("\n")).unwrap();
        assert_eq!(Document::parse(text.as_deref().unwrap(), "\n").len(), 2);
    }

    #[test]
    fn test_validate_empty_token() {
        let doc = Document::from(vec![TokenRow::from_tokens(["", "x"])]);
        assert!(matches!(
            doc.validate(";"),
            Err(Error::InvalidToken {
                row: 0,
                column: 0,
                problem: TokenProblem::Empty
            })
        ));
        assert!(document![["x"]].validate(";").is_ok());
    }

    #[test]
    fn test_direct_mutation() {
        let mut doc = Document::parse("a;b\nc;d", ";");
        doc.rows.insert(0, row!["header"]);
        doc[1].tokens.clear();
        doc.push(vec!["e".to_string()]);
        doc.rows.retain(|row| !row.is_empty());
        assert_eq!(
            tokens(&doc),
            vec![vec!["header"], vec!["c", "d"], vec!["e"]]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");
        let err = Document::load(&path, ";").unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("missing.db"));
    }

    #[test]
    fn test_load_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.db");
        fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            Document::load(&path, ";"),
            Err(Error::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");
        let doc = document![["alice", "admin"], ["bob", "user", "extra"]];

        doc.save(&path, ";").unwrap();
        assert_eq!(Document::load(&path, ";").unwrap(), doc);
    }

    #[test]
    fn test_save_overwrites_and_empty_document_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");
        fs::write(&path, "old;content\nmore").unwrap();

        Document::new().save(&path, ";").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(Document::load(&path, ";").unwrap().is_empty());
    }

    #[test]
    fn test_strict_save_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");
        fs::write(&path, "keep").unwrap();

        let doc = document![["a;b"]];
        let result = doc.save_with_options(&path, &unix().with_strict(true));
        assert!(matches!(result, Err(Error::InvalidToken { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/records.db");
        let err = document![["a"]].save(&path, ";").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_preserving_keeps_line_ending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");
        fs::write(&path, "a|b\r\nc|d").unwrap();

        let (mut doc, options) = Document::load_preserving(&path, "|").unwrap();
        assert_eq!(options.line_ending, LineEnding::Windows);
        assert_eq!(options.separator, "|");

        doc.push(row!["e"]);
        doc.save_with_options(&path, &options).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a|b\r\nc|d\r\ne");
    }

    #[test]
    fn test_serde_as_nested_sequence() {
        let doc = document![["a", "b"], ["c"]];
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"[["a","b"],["c"]]"#);
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
