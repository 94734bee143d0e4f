//! Text splitting.
//!
//! This module holds the two splitting primitives every parse goes through:
//!
//! - [`Lines`]: iterates the non-empty lines of a blob, accepting `\r\n`, `\r`
//!   and `\n` interchangeably
//! - [`split_tokens`]: splits one line on a literal separator
//!
//! Both discard empty pieces. Neither can fail.
//!
//! ```rust
//! use simple_db_format::de::{split_tokens, Lines};
//!
//! let lines: Vec<&str> = Lines::new("a;b\r\n\r\nc").collect();
//! assert_eq!(lines, vec!["a;b", "c"]);
//!
//! assert_eq!(split_tokens("a;;b;", ";"), vec!["a", "b"]);
//! ```

/// Iterator over the non-empty lines of a text blob.
///
/// A `\r` immediately followed by `\n` counts as one terminator.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lines<'a> {
    pub fn new(input: &'a str) -> Self {
        Lines { input, position: 0 }
    }

    /// Returns the next line including empty ones, or `None` at end of input.
    fn next_raw(&mut self) -> Option<&'a str> {
        if self.position >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.position..];
        match rest.find(&['\r', '\n'][..]) {
            Some(end) => {
                let bytes = rest.as_bytes();
                let width = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.position += end + width;
                Some(&rest[..end])
            }
            None => {
                self.position = self.input.len();
                Some(rest)
            }
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.next_raw() {
            if !line.is_empty() {
                return Some(line);
            }
        }
        None
    }
}

/// Splits `line` on every literal occurrence of `separator`, dropping empty pieces.
///
/// An empty separator splits on whitespace instead.
#[must_use]
pub fn split_tokens(line: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return line.split_whitespace().map(str::to_string).collect();
    }
    line.split(separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
