//! # simple_db_format
//!
//! A parser and serializer for a minimal line/token-delimited text format.
//!
//! ## What is it?
//!
//! A lightweight, human-editable data store for small configuration or
//! record-style data. Each non-empty line is a record, and each record is a list of
//! string tokens joined by a separator (`;` by default). Think of it as CSV
//! without quoting, escaping or headers.
//!
//! ```text
//! alice;admin;active
//! bob;user
//! ```
//!
//! ## Key Features
//!
//! - **Simple**: Two plain types, [`Document`] and [`TokenRow`], with public fields
//! - **Forgiving**: Any mix of `\n`, `\r\n` and `\r`; empty lines and tokens are skipped
//! - **Configurable**: Any literal separator, any output line ending
//! - **Optional strictness**: Detect tokens that would not survive a round-trip
//! - **Serde Compatible**: Documents serialize as nested string sequences
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_db_format::{from_str, Document};
//!
//! let mut doc = from_str("alice;admin\nbob;user");
//! assert_eq!(doc[1].tokens, vec!["bob", "user"]);
//!
//! doc.rows[1].tokens[1] = "admin".to_string();
//! doc.push(simple_db_format::row!["carol", "user"]);
//!
//! let text = doc.serialize(";").unwrap();
//! assert_eq!(Document::parse(&text, ";"), doc);
//! ```
//!
//! ### Files
//!
//! ```rust,no_run
//! use simple_db_format::Document;
//!
//! let doc = Document::load("users.db", ";")?;
//! doc.save("users.backup.db", "|")?;
//! # Ok::<(), simple_db_format::Error>(())
//! ```
//!
//! ## Limitations
//!
//! Tokens cannot contain the separator or line breaks; there is no escaping. Such
//! tokens are written as-is and read back split. See [`format`] for the exact
//! rules and [`FormatOptions::with_strict`] to have them reported instead.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`basic.rs`** - Parsing, editing and writing a document
//! - **`custom_options.rs`** - Separators, line endings and strict mode
//! - **`editing.rs`** - Load, modify and save a file
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod row;
pub mod ser;

pub use document::Document;
pub use error::{Error, Result, TokenProblem};
pub use options::{FormatOptions, LineEnding, DEFAULT_SEPARATOR};
pub use row::TokenRow;
pub use ser::Serializer;

use std::io;
use std::path::Path;

/// Parse a document using the default `;` separator.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::from_str;
///
/// let doc = from_str("a;b;c");
/// assert_eq!(doc[0].tokens, vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn from_str(s: &str) -> Document {
    Document::parse(s, DEFAULT_SEPARATOR)
}

/// Parse a document using the separator from `options`.
#[must_use]
pub fn from_str_with_options(s: &str, options: &FormatOptions) -> Document {
    Document::parse_with_options(s, options)
}

/// Parse a document from bytes of text using the default separator.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v)?;
    Ok(from_str(s))
}

/// Read everything from `reader` and parse it with the default separator.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"x;y\r\nz")).unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::InvalidUtf8`] if the
/// content is not valid UTF-8.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Document> {
    from_reader_with_options(reader, &FormatOptions::default())
}

/// Read everything from `reader` and parse it with `options`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::InvalidUtf8`] if the
/// content is not valid UTF-8.
pub fn from_reader_with_options<R: io::Read>(
    mut reader: R,
    options: &FormatOptions,
) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = std::str::from_utf8(&bytes)?;
    Ok(Document::parse_with_options(text, options))
}

/// Load and parse the file at `path` with the default separator.
///
/// # Errors
///
/// See [`Document::load`].
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    Document::load(path, DEFAULT_SEPARATOR)
}

/// Serialize with the default separator and native line ending.
///
/// Returns `None` for a document with no rows.
#[must_use]
pub fn to_string(doc: &Document) -> Option<String> {
    doc.serialize(DEFAULT_SEPARATOR)
}

/// Serialize with custom options.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::{document, to_string_with_options, FormatOptions, LineEnding};
///
/// let doc = document![["a", "b"], ["c"]];
/// let options = FormatOptions::new()
///     .with_separator("\t")
///     .with_line_ending(LineEnding::Unix);
/// let text = to_string_with_options(&doc, &options).unwrap();
/// assert_eq!(text.as_deref(), Some("a\tb\nc"));
/// ```
///
/// # Errors
///
/// Only with strict options: [`Error::InvalidToken`].
pub fn to_string_with_options(doc: &Document, options: &FormatOptions) -> Result<Option<String>> {
    doc.serialize_with_options(options)
}

/// Serialize with default options into `writer`. No rows writes nothing.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write>(writer: W, doc: &Document) -> Result<()> {
    to_writer_with_options(writer, doc, &FormatOptions::default())
}

/// Serialize with `options` into `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails, or [`Error::InvalidToken`] under
/// strict options (nothing is written then).
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    doc: &Document,
    options: &FormatOptions,
) -> Result<()> {
    if let Some(text) = doc.serialize_with_options(options)? {
        writer.write_all(text.as_bytes())?;
    }
    Ok(())
}

/// Serialize with the default separator and write it to `path`, replacing its contents.
///
/// # Errors
///
/// See [`Document::save`].
pub fn to_path(path: impl AsRef<Path>, doc: &Document) -> Result<()> {
    doc.save(path, DEFAULT_SEPARATOR)
}
