//! Property-based tests for the round-trip and normalization guarantees.

use proptest::prelude::*;
use simple_db_format::{Document, FormatOptions, LineEnding, TokenRow};

/// Tokens that can round-trip: non-empty, no `;`, `|`, `\r` or `\n`.
fn arb_token() -> impl Strategy<Value = String> {
    "[^;|\r\n]{1,12}"
}

fn arb_row() -> impl Strategy<Value = TokenRow> {
    prop::collection::vec(arb_token(), 1..8).prop_map(TokenRow::from)
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(arb_row(), 0..16).prop_map(Document::from)
}

fn arb_line_ending() -> impl Strategy<Value = LineEnding> {
    prop_oneof![
        Just(LineEnding::Unix),
        Just(LineEnding::Windows),
        Just(LineEnding::Mac),
    ]
}

proptest! {
    #[test]
    fn prop_document_roundtrip(
        doc in arb_document(),
        separator in prop_oneof![Just(";"), Just("|")],
    ) {
        match doc.serialize(separator) {
            Some(text) => prop_assert_eq!(Document::parse(&text, separator), doc),
            None => prop_assert!(doc.is_empty()),
        }
    }

    #[test]
    fn prop_roundtrip_any_line_ending(doc in arb_document(), ending in arb_line_ending()) {
        let options = FormatOptions::new().with_line_ending(ending).with_strict(true);
        let text = doc.serialize_with_options(&options).unwrap().unwrap_or_default();
        prop_assert_eq!(Document::parse(&text, ";"), doc);
    }

    #[test]
    fn prop_row_roundtrip(row in arb_row()) {
        let line = row.serialize(";");
        prop_assert_eq!(TokenRow::parse(&line, ";"), row);
    }

    #[test]
    fn prop_normalization_is_idempotent(text in "[a-c;\r\n]{0,64}") {
        let options = FormatOptions::new().with_line_ending(LineEnding::Unix);
        let cycle = |input: &str| {
            Document::parse(input, ";")
                .serialize_with_options(&options)
                .unwrap()
                .unwrap_or_default()
        };
        // A line made only of separators becomes an empty row, which the
        // next cycle drops; from then on the text is fixed.
        let twice = cycle(&cycle(&text));
        prop_assert_eq!(cycle(&twice), twice);
    }

    #[test]
    fn prop_single_cycle_is_stable_without_separator_only_lines(
        lines in prop::collection::vec("[a-c;]{0,6}[a-c][a-c;]{0,6}", 0..10),
        ending in arb_line_ending(),
    ) {
        let text = lines.join(ending.as_str());
        let options = FormatOptions::new().with_line_ending(ending);
        let once = Document::parse(&text, ";")
            .serialize_with_options(&options)
            .unwrap()
            .unwrap_or_default();
        let twice = Document::parse(&once, ";")
            .serialize_with_options(&options)
            .unwrap()
            .unwrap_or_default();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_parse_never_yields_empty_tokens(text in "[a-c;|\r\n ]{0,64}") {
        let doc = Document::parse(&text, ";");
        for row in &doc {
            prop_assert!(row.iter().all(|token| !token.is_empty()));
            prop_assert!(row.iter().all(|token| !token.contains(['\r', '\n'].as_slice())));
        }
    }
}
