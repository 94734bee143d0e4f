/// Builds a [`TokenRow`](crate::TokenRow) from a list of expressions convertible into `String`.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::row;
///
/// let row = row!["alice", "admin", String::from("active")];
/// assert_eq!(row.to_string(), "alice;admin;active");
///
/// assert!(row![].is_empty());
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::TokenRow::new()
    };

    ($($token:expr),+ $(,)?) => {
        $crate::TokenRow {
            tokens: vec![$(::std::string::String::from($token)),+],
        }
    };
}

/// Builds a [`Document`](crate::Document) from bracketed rows.
///
/// # Examples
///
/// ```rust
/// use simple_db_format::document;
///
/// let doc = document![
///     ["alice", "admin"],
///     ["bob"],
///     [],
/// ];
/// assert_eq!(doc.len(), 3);
/// assert_eq!(doc[0].tokens, vec!["alice", "admin"]);
/// assert!(doc[2].is_empty());
/// ```
#[macro_export]
macro_rules! document {
    () => {
        $crate::Document::new()
    };

    ($([ $($token:expr),* $(,)? ]),+ $(,)?) => {
        $crate::Document {
            rows: vec![$($crate::row![$($token),*]),+],
        }
    };
}
