//! Separators, line endings and strict mode.
//!
//! Run with: cargo run --example custom_options

use simple_db_format::{document, FormatOptions, LineEnding};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = document![
        ["id", "name", "price"],
        ["1", "Widget", "9.99"],
        ["2", "Gadget", "14.99"],
    ];

    println!("Tab separated:");
    let tsv = FormatOptions::new()
        .with_separator("\t")
        .with_line_ending(LineEnding::Unix);
    println!("{}\n", doc.serialize_with_options(&tsv)?.unwrap_or_default());

    println!("Pipe separated, CRLF line endings:");
    let piped = FormatOptions::new()
        .with_separator(" | ")
        .with_line_ending(LineEnding::Windows);
    let text = doc.serialize_with_options(&piped)?.unwrap_or_default();
    println!("{:?}\n", text);

    // A token containing the separator is written as-is by default...
    let broken = document![["key", "a;b"]];
    println!("Lenient: {:?}", broken.serialize(";"));

    // ...and reported in strict mode
    let strict = FormatOptions::new().with_strict(true);
    match broken.serialize_with_options(&strict) {
        Ok(text) => println!("Strict: {:?}", text),
        Err(err) => println!("Strict: {}", err),
    }

    Ok(())
}
