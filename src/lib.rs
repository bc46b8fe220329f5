//! # stext
//!
//! Parser and serializer for the StructuredText format: a line-oriented,
//! human-readable text format for key/value pairs, comments, and
//! free-form text.
//!
//! ## What is StructuredText?
//!
//! ```text
//! # Each comment line is stored under _COMMENT_<n>.
//! PROJECT_NAME: Seeking Dharma
//! DATESTAMP: 02/06/1957 02:00:00
//!
//! DESCRIPTION: """
//! Multi-line values are enclosed in triple quotes
//! and stored verbatim, blank lines included.
//! """
//! ```
//!
//! Extraction produces an ordered [`Document`] (a key-to-value mapping
//! preserving input order); serialization renders such a mapping back to
//! text. Content that does not fit the key/value model is carried by a
//! small set of synthetic keys: comments under `_COMMENT_<n>`,
//! unstructured text under `_FREETEXT_` (configurable), and diagnostics
//! under `_ERRORS_`. The full format is described in [`spec`].
//!
//! ## Quick Start
//!
//! ```rust
//! use stext::{from_str, to_string};
//!
//! let doc = from_str("NAME: Alice\nROLE: admin").unwrap();
//! assert_eq!(doc.get("NAME"), Some("Alice"));
//!
//! let rendered = to_string(&doc);
//! assert_eq!(rendered, "NAME: Alice\n\nROLE: admin\n\n");
//! ```
//!
//! ## Lenient by default, strict on demand
//!
//! In the default mode every format violation (duplicate key, malformed
//! line, missing requested key) degrades to a best-effort result with the
//! diagnostic recorded under `_ERRORS_`; even an input with no key/value
//! pairs at all degrades to a free-text dump. Strict mode trades that
//! recovery for fail-fast behavior:
//!
//! ```rust
//! use stext::{from_lines, from_lines_with_options, ExtractOptions};
//!
//! let lines = ["A: 1", "not a key value line"];
//!
//! let doc = from_lines(lines).unwrap();
//! assert_eq!(doc.get("_FREETEXT_"), Some("not a key value line"));
//! assert!(doc.errors().is_some());
//!
//! let strict = from_lines_with_options(lines, ExtractOptions::new().strict(true));
//! assert!(strict.is_err());
//! ```
//!
//! ## Input sources
//!
//! The extraction boundary accepts a text buffer ([`from_str`]), a file
//! ([`from_file`]), a pre-split line sequence ([`from_lines`]), or a
//! key/value table ([`from_table`], flattened into canonical line form
//! first) — all four share identical parsing semantics. See [`Source`].
//!
//! ## Concurrency
//!
//! The core is purely synchronous and shares no state across calls: each
//! extraction owns its parse state, and a returned [`Document`] is plain
//! data with no further relationship to the parser.

pub mod document;
pub mod error;
pub mod extract;
pub mod line;
pub mod macros;
pub mod options;
pub mod source;
pub mod spec;
pub mod write;

pub use document::{
    Document, COMMENT_PREFIX, DEFAULT_FREETEXT_KEY, ERRORS_KEY, LEGACY_TEXT_KEY,
};
pub use error::{Error, Result};
pub use extract::extract;
pub use line::MULTILINE_DELIMITER;
pub use options::{ExtractOptions, WriteOptions};
pub use source::Source;
pub use write::{
    to_file, to_json_string, to_string, to_string_with_options, to_writer,
    to_writer_with_options,
};

use indexmap::IndexMap;
use std::path::Path;

/// Extracts a [`Document`] from a complete text buffer with default
/// options.
///
/// # Examples
///
/// ```rust
/// use stext::from_str;
///
/// let doc = from_str("KEY: value").unwrap();
/// assert_eq!(doc.get("KEY"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error on an invalid free-text key name or, in strict mode,
/// on any format violation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Document> {
    from_str_with_options(text, ExtractOptions::default())
}

/// Extracts a [`Document`] from a complete text buffer with custom
/// options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(text: &str, options: ExtractOptions) -> Result<Document> {
    let lines = text.lines().map(str::to_string).collect();
    extract(Source::Lines(lines), &options)
}

/// Extracts a [`Document`] from a file with default options.
///
/// The file is read whole, in one read, before parsing starts.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if `path` does not name a file, and
/// [`Error::Io`] if it cannot be read.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    from_file_with_options(path, ExtractOptions::default())
}

/// Extracts a [`Document`] from a file with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Document> {
    extract(Source::File(path.as_ref().to_path_buf()), &options)
}

/// Extracts a [`Document`] from a pre-split sequence of lines with
/// default options.
///
/// # Examples
///
/// ```rust
/// use stext::from_lines;
///
/// let doc = from_lines(["# note", "KEY: value"]).unwrap();
/// assert_eq!(doc.get("_COMMENT_1"), Some("note"));
/// assert_eq!(doc.get("KEY"), Some("value"));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines<I, S>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    from_lines_with_options(lines, ExtractOptions::default())
}

/// Extracts a [`Document`] from a pre-split sequence of lines with
/// custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines_with_options<I, S>(lines: I, options: ExtractOptions) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lines = lines.into_iter().map(Into::into).collect();
    extract(Source::Lines(lines), &options)
}

/// Extracts a [`Document`] from a key/value table with default options.
///
/// The table is flattened into canonical line form first (multi-line
/// values become triple-quoted blocks), which guarantees table input and
/// file input share identical parsing semantics.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use stext::from_table;
///
/// let mut table = IndexMap::new();
/// table.insert("KEY".to_string(), "value".to_string());
/// let doc = from_table(table).unwrap();
/// assert_eq!(doc.get("KEY"), Some("value"));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_table(table: IndexMap<String, String>) -> Result<Document> {
    from_table_with_options(table, ExtractOptions::default())
}

/// Extracts a [`Document`] from a key/value table with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_table_with_options(
    table: IndexMap<String, String>,
    options: ExtractOptions,
) -> Result<Document> {
    extract(Source::Table(table), &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let doc = from_str("NAME: test\nROLE: admin").unwrap();
        assert_eq!(doc.get("NAME"), Some("test"));
        assert_eq!(doc.get("ROLE"), Some("admin"));

        let rendered = to_string(&doc);
        let doc_back = from_str(&rendered).unwrap();
        assert_eq!(doc, doc_back);
    }

    #[test]
    fn test_table_and_text_inputs_agree() {
        let mut table = IndexMap::new();
        table.insert("A".to_string(), "one".to_string());
        table.insert("B".to_string(), "first\nsecond".to_string());

        let from_table_doc = from_table(table).unwrap();
        let from_text_doc =
            from_str("A:one\nB:\"\"\"\nfirst\nsecond\n\"\"\"").unwrap();
        assert_eq!(from_table_doc, from_text_doc);
    }

    #[test]
    fn test_multiline_roundtrip() {
        let doc = stext! { "DESC" => "one\ntwo\nthree" };
        let doc_back = from_str(&to_string(&doc)).unwrap();
        assert_eq!(doc, doc_back);
    }

    #[test]
    fn test_strict_mode_surfaces_errors() {
        let result = from_str_with_options("???", ExtractOptions::new().strict(true));
        assert!(result.is_err());
    }
}
