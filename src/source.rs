//! Input sources accepted by the extraction boundary.
//!
//! A [`Source`] is one of three shapes: a file path, a pre-split sequence
//! of lines, or a key/value table. Normalization converts any of them
//! into the canonical line sequence before the state machine runs, so all
//! three share identical parsing semantics. All I/O happens here, once,
//! before parsing starts.

use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::line::MULTILINE_DELIMITER;

/// Where the input text comes from.
///
/// # Examples
///
/// ```rust
/// use stext::{extract, ExtractOptions, Source};
///
/// let lines = vec!["KEY: value".to_string()];
/// let doc = extract(Source::Lines(lines), &ExtractOptions::new()).unwrap();
/// assert_eq!(doc.get("KEY"), Some("value"));
/// ```
#[derive(Debug, Clone)]
pub enum Source {
    /// A file to read whole, in one read.
    File(PathBuf),
    /// An ordered sequence of lines (no embedded newlines expected).
    Lines(Vec<String>),
    /// A key/value table, flattened into canonical line form before
    /// parsing. Values containing newlines become multi-line blocks.
    Table(IndexMap<String, String>),
}

impl Source {
    /// Human-readable descriptor used in diagnostic messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => format!("file '{}'", path.display()),
            Source::Lines(_) => "list".to_string(),
            Source::Table(_) => "dictionary".to_string(),
        }
    }

    /// Normalizes the source into the canonical line sequence.
    ///
    /// Table flattening uses the configured separator so that dictionary
    /// input parses identically to file input under any separator.
    pub(crate) fn into_lines(self, separator: &str) -> Result<Vec<String>> {
        match self {
            Source::File(path) => {
                if !path.is_file() {
                    return Err(Error::FileNotFound(path.display().to_string()));
                }
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::io(&format!("file '{}' could not be read: {e}", path.display()))
                })?;
                Ok(content.lines().map(str::to_string).collect())
            }
            Source::Lines(lines) => Ok(lines),
            Source::Table(table) => {
                let mut lines = Vec::with_capacity(table.len());
                for (key, value) in table {
                    if value.contains('\n') {
                        lines.push(format!("{key}{separator}{MULTILINE_DELIMITER}"));
                        lines.extend(value.lines().map(str::to_string));
                        lines.push(MULTILINE_DELIMITER.to_string());
                    } else {
                        lines.push(format!("{key}{separator}{value}"));
                    }
                }
                Ok(lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(Source::Lines(vec![]).describe(), "list");
        assert_eq!(Source::Table(IndexMap::new()).describe(), "dictionary");
        assert_eq!(
            Source::File(PathBuf::from("x.st")).describe(),
            "file 'x.st'"
        );
    }

    #[test]
    fn test_missing_file() {
        let source = Source::File(PathBuf::from("definitely/not/here.st"));
        assert!(matches!(
            source.into_lines(":"),
            Err(Error::FileNotFound(_))
        ));
    }

    #[test]
    fn test_table_flattening() {
        let mut table = IndexMap::new();
        table.insert("A".to_string(), "one".to_string());
        table.insert("B".to_string(), "first\nsecond".to_string());

        let lines = Source::Table(table).into_lines(":").unwrap();
        assert_eq!(
            lines,
            vec!["A:one", "B:\"\"\"", "first", "second", "\"\"\""]
        );
    }

    #[test]
    fn test_table_flattening_uses_configured_separator() {
        let mut table = IndexMap::new();
        table.insert("A".to_string(), "one".to_string());

        let lines = Source::Table(table).into_lines("=").unwrap();
        assert_eq!(lines, vec!["A=one"]);
    }
}
