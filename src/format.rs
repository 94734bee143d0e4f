//! Text Format Reference
//!
//! This module documents the line/token text format read and written by this library.
//!
//! # Overview
//!
//! A document is plain text. Each non-empty line is one record; each record is a
//! list of opaque string tokens joined by a separator. There is no header, no
//! footer, no type information and no escaping.
//!
//! ```text
//! alice;admin;active
//! bob;user
//! carol;user;inactive;2024
//! ```
//!
//! # Lines
//!
//! - Lines end in `\n`, `\r\n` or `\r`. All three are accepted on read and may be
//!   mixed within one document
//! - A `\r` directly followed by `\n` is one terminator; `\n\r` is two
//! - Empty lines are skipped. They never produce a record
//! - Output places one terminator between records and none after the last.
//!   The terminator defaults to the platform's native one
//!   ([`LineEnding::system_default`](crate::LineEnding::system_default)) and can be
//!   chosen with [`FormatOptions::with_line_ending`](crate::FormatOptions::with_line_ending)
//!
//! # Tokens
//!
//! - The separator defaults to `;` and may be any string, including multi-character
//!   ones such as `::` or `\t`. It is matched literally, never as a pattern
//! - Empty tokens are skipped: `a;;b`, `;a;b` and `a;b;` all read as `a`, `b`
//! - A line made only of separators reads as a record with no tokens
//! - Leading and trailing whitespace is part of the token
//! - An empty separator splits on runs of whitespace
//!
//! | Input line | Separator | Tokens |
//! |------------|-----------|--------|
//! | `a;b;c` | `;` | `a`, `b`, `c` |
//! | `a;;b` | `;` | `a`, `b` |
//! | `single` | `;` | `single` |
//! | `;;` | `;` | (none) |
//! | `k::v:w` | `::` | `k`, `v:w` |
//! | ` x  y ` | (empty) | `x`, `y` |
//!
//! # Round-Trip Guarantee
//!
//! Serializing a document and parsing the result with the same separator gives
//! back an equal document when:
//!
//! 1. No token is empty
//! 2. No token contains the separator
//! 3. No token contains `\r` or `\n`
//! 4. No record has zero tokens (such a record serializes to an empty line, which
//!    is skipped on read)
//! 5. The separator contains no `\r` or `\n`
//! 6. With an empty separator, no record has more than one token (nothing is
//!    written between tokens, so they fuse)
//!
//! Breaking these rules is not reported by default; the text is written as-is and
//! reads back differently. Strict options
//! ([`FormatOptions::with_strict`](crate::FormatOptions::with_strict)) and the
//! `validate` methods report rules 1–3 and 6 as
//! [`Error::InvalidToken`](crate::Error::InvalidToken) and rule 5 as
//! [`Error::InvalidSeparator`](crate::Error::InvalidSeparator).
//!
//! Parsing and serializing text normalizes it: terminators are unified and empty
//! lines and tokens removed. A second cycle leaves the result unchanged, unless the
//! input had lines made only of separators. Those become records with no tokens,
//! written as empty lines, and disappear on the next cycle.
//!
//! # Empty Documents
//!
//! A document with no records serializes to `None` rather than `Some("")`. The
//! latter means one record with no tokens. Saving an empty document writes an
//! empty file.
