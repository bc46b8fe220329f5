//! Basic StructuredText extraction and serialization.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use stext::{from_str, to_string};

fn main() -> Result<(), Box<dyn Error>> {
    let input = "\
# Seeking Dharma, transcript metadata
PROJECT_NAME: Seeking Dharma
DATESTAMP: 02/06/1957 02:00:00
LOCATION: Bali

DESCRIPTION: \"\"\"
Multi-line values are enclosed in triple quotes.
Blank lines inside them are preserved.
\"\"\"
";

    let doc = from_str(input)?;
    for (key, value) in doc.iter() {
        println!("{key} = {value:?}");
    }

    // Render back to StructuredText
    let rendered = to_string(&doc);
    println!("\nRendered:\n{rendered}");

    let doc_back = from_str(&rendered)?;
    assert_eq!(doc, doc_back);
    println!("✓ Round-trip successful");

    Ok(())
}
