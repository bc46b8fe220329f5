//! Lenient extraction: free text, comments, and diagnostics.
//!
//! Run with: cargo run --example freetext

use std::error::Error;
use stext::from_str;

fn main() -> Result<(), Box<dyn Error>> {
    // A messy input: a comment, a valid pair, a duplicate, and a line
    // that is not key/value at all.
    let input = "\
# imported from legacy system
TITLE: field notes
TITLE: field notes, revised
this line has no key
";

    let doc = from_str(input)?;

    println!("TITLE     = {:?}", doc.get("TITLE"));
    println!("_FREETEXT_ = {:?}", doc.get("_FREETEXT_"));
    println!("_ERRORS_:");
    for line in doc.errors().unwrap_or("").lines() {
        println!("  {line}");
    }

    // An input with no key/value pairs at all degrades to a free-text
    // dump of the whole content.
    let prose = from_str("just prose\nnothing structured here")?;
    println!("\nProse fallback: {:?}", prose.get("_FREETEXT_"));
    assert_eq!(prose.len(), 1);

    Ok(())
}
