//! Customizing extraction and output with ExtractOptions/WriteOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use stext::{
    from_str_with_options, to_string_with_options, ExtractOptions, WriteOptions,
};

fn main() -> Result<(), Box<dyn Error>> {
    let input = "NAME = Alice\nROLE = admin\nNOTE = needs review\n";

    // Parse with '=' as the key/value separator
    let options = ExtractOptions::new().with_separator("=");
    let doc = from_str_with_options(input, options)?;
    println!("Parsed {} entries", doc.len());

    // Extract a subset only (enables early termination)
    let options = ExtractOptions::new().with_separator("=").with_keys(["ROLE"]);
    let role_only = from_str_with_options(input, options)?;
    println!("ROLE only: {:?}\n", role_only.get("ROLE"));

    // Compact output: no padding, one linefeed per entry
    println!("Compact:");
    let compact = WriteOptions::new().with_pad(0).with_linefeeds(1);
    print!("{}", to_string_with_options(&doc, &compact));

    // Single-line escaped rendering instead of triple-quoted blocks
    println!("\nSingle-line mode:");
    let single = WriteOptions::new().with_multiline(false);
    print!("{}", to_string_with_options(&doc, &single));

    Ok(())
}
