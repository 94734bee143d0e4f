//! Load a file, modify it and save it back with its own line endings.
//!
//! Run with: cargo run --example editing

use simple_db_format::{row, Document};
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("simple_db_format_demo.db");
    fs::write(&path, "host;localhost\r\nport;8080\r\ndebug;false\r\n")?;

    let (mut doc, options) = Document::load_preserving(&path, ";")?;
    println!("Loaded {} rows ({:?} line endings)", doc.len(), options.line_ending);

    for row in doc.iter_mut() {
        if row.get(0) == Some("debug") {
            row.tokens[1] = "true".to_string();
        }
    }
    doc.push(row!["timeout", "30"]);

    doc.save_with_options(&path, &options)?;
    println!("Saved:\n{}", fs::read_to_string(&path)?);

    let reloaded = Document::load(&path, ";")?;
    assert_eq!(reloaded, doc);

    fs::remove_file(&path)?;
    Ok(())
}
