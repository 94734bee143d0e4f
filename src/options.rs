//! Configuration options for parsing and serialization.
//!
//! This module provides types to customize how documents are read and written:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`LineEnding`]: Terminator placed between rows on output
//!
//! ## Examples
//!
//! ```rust
//! use simple_db_format::{Document, FormatOptions, LineEnding};
//!
//! let doc = Document::parse("a|b\nc|d", "|");
//!
//! let options = FormatOptions::new()
//!     .with_separator(",")
//!     .with_line_ending(LineEnding::Windows);
//! let text = doc.serialize_with_options(&options).unwrap();
//! assert_eq!(text.as_deref(), Some("a,b\r\nc,d"));
//! ```

/// Separator used when none is supplied.
pub const DEFAULT_SEPARATOR: &str = ";";

/// Line terminator written between rows.
///
/// Reading always accepts all three variants; this only controls output.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::LineEnding;
///
/// assert_eq!(LineEnding::Unix.as_str(), "\n");
/// assert_eq!(LineEnding::Windows.as_str(), "\r\n");
/// assert_eq!(LineEnding::Mac.as_str(), "\r");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Unix,
    /// `\r\n`
    Windows,
    /// `\r`
    Mac,
}

impl LineEnding {
    /// The terminator characters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Unix => "\n",
            LineEnding::Windows => "\r\n",
            LineEnding::Mac => "\r",
        }
    }

    /// The platform's native terminator: `\r\n` on Windows, `\n` elsewhere.
    #[must_use]
    pub fn system_default() -> Self {
        if cfg!(windows) {
            LineEnding::Windows
        } else {
            LineEnding::Unix
        }
    }

    /// Guesses the terminator used by `text`.
    ///
    /// Any `\r\n` means [`LineEnding::Windows`]; otherwise any `\r` means
    /// [`LineEnding::Mac`]; everything else is [`LineEnding::Unix`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::LineEnding;
    ///
    /// assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::Windows);
    /// assert_eq!(LineEnding::detect("a\rb"), LineEnding::Mac);
    /// assert_eq!(LineEnding::detect("a"), LineEnding::Unix);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::Windows
        } else if text.contains('\r') {
            LineEnding::Mac
        } else {
            LineEnding::Unix
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::system_default()
    }
}

/// Configuration for reading and writing documents.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::{FormatOptions, LineEnding};
///
/// // Defaults: ";" separator, native line ending, lenient
/// let options = FormatOptions::new();
/// assert_eq!(options.separator, ";");
/// assert!(!options.strict);
///
/// // Custom configuration
/// let options = FormatOptions::new()
///     .with_separator("\t")
///     .with_line_ending(LineEnding::Unix)
///     .with_strict(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub separator: String,
    pub line_ending: LineEnding,
    /// Reject tokens and separators that would not survive a round-trip on output.
    pub strict: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            separator: DEFAULT_SEPARATOR.to_string(),
            line_ending: LineEnding::default(),
            strict: false,
        }
    }
}

impl FormatOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options whose line ending matches the one detected in `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_db_format::{FormatOptions, LineEnding};
    ///
    /// let options = FormatOptions::detected("a;b\r\nc;d");
    /// assert_eq!(options.line_ending, LineEnding::Windows);
    /// ```
    #[must_use]
    pub fn detected(text: &str) -> Self {
        Self::default().with_line_ending(LineEnding::detect(text))
    }

    /// Sets the token separator. It is matched literally, never as a pattern.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the terminator written between rows.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Enables or disables strict token validation on output.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
