//! Parsing, editing and writing a document.
//!
//! Run with: cargo run --example basic

use simple_db_format::{row, Document};

fn main() {
    let text = "alice;admin;active\r\nbob;user\n\ncarol;user;;inactive";

    let mut doc = Document::parse(text, ";");
    println!("Parsed {} rows:", doc.len());
    for (i, row) in doc.iter().enumerate() {
        println!("  {}: {:?}", i, row.tokens);
    }

    // Rows and tokens are plain vectors
    doc.rows[1].push("active");
    doc.rows.retain(|row| row.get(0) != Some("carol"));
    doc.push(row!["dave", "admin", "active"]);

    println!("\nSerialized:");
    println!("{}", doc);

    let empty = Document::new();
    println!("\nEmpty document serializes to: {:?}", empty.serialize(";"));
}
