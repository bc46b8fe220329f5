//! StructuredText serialization.
//!
//! Renders an ordered [`Document`] back to text, choosing single-line,
//! multi-line, or comment rendering per entry. The serializer is a
//! separate pipeline from extraction and never mutates its input; it only
//! consumes the mapping shape.
//!
//! ## Usage
//!
//! ```rust
//! use stext::{from_str, to_string};
//!
//! let doc = from_str("NAME: Alice\n\n# note").unwrap();
//! let rendered = to_string(&doc);
//! assert_eq!(rendered, "NAME: Alice\n\n# note\n");
//! ```
//!
//! Values containing newlines render as triple-quoted blocks by default;
//! with [`WriteOptions::with_multiline`]`(false)` they render on one
//! logical line with escaped newlines instead. A value containing the
//! literal `"""` token is not re-escaped on write; see
//! [`crate::spec`] for this round-trip limitation.

use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::document::{Document, COMMENT_PREFIX};
use crate::error::{Error, Result};
use crate::line::MULTILINE_DELIMITER;
use crate::options::WriteOptions;

/// Renders `doc` with default options (`:` separator, one space of
/// padding, two linefeeds per entry, multi-line blocks).
///
/// # Examples
///
/// ```rust
/// use stext::{stext, to_string};
///
/// let doc = stext! { "A" => "1", "B" => "2" };
/// assert_eq!(to_string(&doc), "A: 1\n\nB: 2\n\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, &WriteOptions::default())
}

/// Renders `doc` with custom options.
///
/// With a single-key filter set, exactly that entry is rendered (or
/// nothing, if the key is absent).
#[must_use]
pub fn to_string_with_options(doc: &Document, options: &WriteOptions) -> String {
    let mut out = String::with_capacity(256);
    let pad = " ".repeat(options.pad);
    let tail = "\n".repeat(options.linefeeds);

    for (key, value) in doc.iter() {
        if let Some(only) = &options.key {
            if only != key {
                continue;
            }
            render_entry(&mut out, key, value, options, &pad, &tail);
            break;
        }
        render_entry(&mut out, key, value, options, &pad, &tail);
    }
    out
}

/// Writes `doc` to `writer` with default options.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, doc: &Document) -> Result<()> {
    to_writer_with_options(writer, doc, &WriteOptions::default())
}

/// Writes `doc` to `writer` with custom options.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    doc: &Document,
    options: &WriteOptions,
) -> Result<()> {
    let rendered = to_string_with_options(doc, options);
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Writes `doc` to a fresh file at `path`, overwriting any existing
/// content. The file is never appended to.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P: AsRef<Path>>(path: P, doc: &Document, options: &WriteOptions) -> Result<()> {
    let mut file = File::create(path.as_ref()).map_err(|e| {
        Error::io(&format!(
            "file '{}' could not be created: {e}",
            path.as_ref().display()
        ))
    })?;
    to_writer_with_options(&mut file, doc, options)?;
    file.flush().map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Renders `doc` as a JSON object.
///
/// `indent` of `None` produces compact output; `Some(n)` pretty-prints
/// with `n` spaces per level.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
///
/// # Examples
///
/// ```rust
/// use stext::{stext, to_json_string};
///
/// let doc = stext! { "KEY" => "value" };
/// assert_eq!(to_json_string(&doc, None).unwrap(), r#"{"KEY":"value"}"#);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(doc: &Document, indent: Option<usize>) -> Result<String> {
    match indent {
        None => serde_json::to_string(doc).map_err(|e| Error::Json(e.to_string())),
        Some(n) => {
            let indent = " ".repeat(n);
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            doc.serialize(&mut ser)
                .map_err(|e| Error::Json(e.to_string()))?;
            String::from_utf8(buf).map_err(|e| Error::Json(e.to_string()))
        }
    }
}

fn render_entry(
    out: &mut String,
    key: &str,
    value: &str,
    options: &WriteOptions,
    pad: &str,
    tail: &str,
) {
    let sep = &options.separator;

    if value.contains('\n') {
        if options.multiline {
            out.push_str(&format!(
                "{key}{sep}{pad}{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}{tail}"
            ));
        } else {
            let escaped = value.replace('\n', "\\\n").replace('"', "\\\"");
            out.push_str(&format!("{key}{sep}{pad}\"{escaped}\"{tail}"));
        }
    } else if key.starts_with(COMMENT_PREFIX) {
        // Comments are kept together: one linefeed, not the configured
        // count, unless entries run together entirely.
        let comment_tail = if tail.is_empty() { "" } else { "\n" };
        out.push_str(&format!("#{pad}{value}{comment_tail}"));
    } else if !options.multiline && value.contains(' ') {
        let escaped = value.replace('"', "\\\"");
        out.push_str(&format!("{key}{sep}{pad}\"{escaped}\"{tail}"));
    } else {
        out.push_str(&format!("{key}{sep}{pad}{value}{tail}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stext;

    #[test]
    fn test_default_rendering() {
        let doc = stext! { "A" => "1", "B" => "2" };
        assert_eq!(to_string(&doc), "A: 1\n\nB: 2\n\n");
    }

    #[test]
    fn test_multiline_block() {
        let doc = stext! { "DESC" => "x\ny" };
        assert_eq!(to_string(&doc), "DESC: \"\"\"\nx\ny\n\"\"\"\n\n");
    }

    #[test]
    fn test_comment_rendering_ignores_separator() {
        let doc = stext! { "_COMMENT_1" => "a note" };
        let options = WriteOptions::new().with_separator("=");
        assert_eq!(to_string_with_options(&doc, &options), "# a note\n");
    }

    #[test]
    fn test_single_line_escaped_mode() {
        let doc = stext! { "DESC" => "say \"hi\"\nbye" };
        let options = WriteOptions::new().with_multiline(false);
        assert_eq!(
            to_string_with_options(&doc, &options),
            "DESC: \"say \\\"hi\\\"\\\nbye\"\n\n"
        );
    }

    #[test]
    fn test_single_line_mode_quotes_spaced_values() {
        let doc = stext! { "KEY" => "two words" };
        let options = WriteOptions::new().with_multiline(false);
        assert_eq!(
            to_string_with_options(&doc, &options),
            "KEY: \"two words\"\n\n"
        );
    }

    #[test]
    fn test_zero_linefeeds_run_together() {
        let doc = stext! { "A" => "1", "B" => "2" };
        let options = WriteOptions::new().with_linefeeds(0);
        assert_eq!(to_string_with_options(&doc, &options), "A: 1B: 2");
    }

    #[test]
    fn test_single_key_filter() {
        let doc = stext! { "A" => "1", "B" => "2", "C" => "3" };
        let options = WriteOptions::new().with_key("B");
        assert_eq!(to_string_with_options(&doc, &options), "B: 2\n\n");
    }

    #[test]
    fn test_json_compact_and_indented() {
        let doc = stext! { "KEY" => "value" };
        assert_eq!(
            to_json_string(&doc, None).unwrap(),
            r#"{"KEY":"value"}"#
        );
        assert_eq!(
            to_json_string(&doc, Some(2)).unwrap(),
            "{\n  \"KEY\": \"value\"\n}"
        );
    }
}
