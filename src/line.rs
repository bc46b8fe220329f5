//! Line classification for the StructuredText parser.
//!
//! The classifier is the leaf of the parsing pipeline: given one input
//! line and the current [`Mode`], it decides what the line *is*. Policy
//! (duplicate keys, comment suppression, strictness) belongs to the
//! document builder in [`crate::extract`]; nothing here mutates state.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token opening and closing a multi-line value block.
pub const MULTILINE_DELIMITER: &str = "\"\"\"";

/// Escaped form of the delimiter, applied to unstructured lines before
/// they are aggregated into free text.
pub(crate) const ESCAPED_DELIMITER: &str = "\\\"\\\"\\\"";

static KEY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

static TERMINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s*"""\s*$"#).unwrap());

/// Parser mode: outside or inside a multi-line value block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    InMultiline,
}

/// What a single input line is, given the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or all-whitespace line between entries; discarded.
    Blank,
    /// Comment text with leading whitespace and `#` markers stripped.
    Comment(&'a str),
    /// A `key<sep>rest` declaration; `rest` is untrimmed.
    KeyValue { key: &'a str, rest: &'a str },
    /// A normal-mode line that is none of the above.
    Unstructured,
    /// A line consisting solely of the multi-line delimiter.
    Terminator,
    /// Any other line inside a multi-line block, kept verbatim.
    Continuation(&'a str),
}

/// Returns `true` if `name` satisfies key-name syntax
/// (`[A-Za-z_][A-Za-z0-9_]*`).
///
/// # Examples
///
/// ```rust
/// use stext::line::is_valid_key;
///
/// assert!(is_valid_key("PROJECT_NAME"));
/// assert!(is_valid_key("_note"));
/// assert!(!is_valid_key("2nd"));
/// assert!(!is_valid_key("with-dash"));
/// ```
#[must_use]
pub fn is_valid_key(name: &str) -> bool {
    KEY_NAME.is_match(name)
}

/// Builds the `^(key)\s*<sep>\s*(rest)$` pattern for a literal separator.
///
/// The separator is escaped, so characters that are regex metacharacters
/// (`|`, `.`, …) match literally.
#[must_use]
pub fn key_value_pattern(separator: &str) -> Regex {
    let pattern = format!(
        r"^([A-Za-z_][A-Za-z0-9_]*)\s*{}\s*(.*)$",
        regex::escape(separator)
    );
    // The only variable part is escaped, so compilation cannot fail.
    Regex::new(&pattern).unwrap()
}

/// Classifies one line under the given mode.
///
/// `pattern` must be the compiled key/value pattern for the configured
/// separator (see [`key_value_pattern`]).
///
/// # Examples
///
/// ```rust
/// use stext::line::{classify, key_value_pattern, LineKind, Mode};
///
/// let pattern = key_value_pattern(":");
/// assert_eq!(
///     classify("NAME: Alice", Mode::Normal, &pattern),
///     LineKind::KeyValue { key: "NAME", rest: "Alice" }
/// );
/// assert_eq!(classify("   ", Mode::Normal, &pattern), LineKind::Blank);
/// assert_eq!(classify("\"\"\"", Mode::InMultiline, &pattern), LineKind::Terminator);
/// ```
#[must_use]
pub fn classify<'a>(line: &'a str, mode: Mode, pattern: &Regex) -> LineKind<'a> {
    if mode == Mode::InMultiline {
        if TERMINATOR.is_match(line) {
            return LineKind::Terminator;
        }
        return LineKind::Continuation(line);
    }

    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    let stripped = line.trim_start();
    if stripped.starts_with('#') {
        return LineKind::Comment(stripped.trim_start_matches('#').trim_start());
    }

    if let Some(caps) = pattern.captures(line) {
        if let (Some(key), Some(rest)) = (caps.get(1), caps.get(2)) {
            return LineKind::KeyValue {
                key: key.as_str(),
                rest: rest.as_str(),
            };
        }
    }

    LineKind::Unstructured
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kv<'a>(line: &'a str) -> LineKind<'a> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| key_value_pattern(":"));
        classify(line, Mode::Normal, &PATTERN)
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(kv(""), LineKind::Blank);
        assert_eq!(kv("   \t  "), LineKind::Blank);
    }

    #[test]
    fn test_comment_stripping() {
        assert_eq!(kv("# hello"), LineKind::Comment("hello"));
        assert_eq!(kv("   ## double"), LineKind::Comment("double"));
        assert_eq!(kv("#bare"), LineKind::Comment("bare"));
    }

    #[test]
    fn test_key_value_lines() {
        assert_eq!(
            kv("KEY: value"),
            LineKind::KeyValue { key: "KEY", rest: "value" }
        );
        // whitespace around the separator is absorbed by the pattern
        assert_eq!(
            kv("KEY  :   spaced"),
            LineKind::KeyValue { key: "KEY", rest: "spaced" }
        );
        assert_eq!(kv("KEY:"), LineKind::KeyValue { key: "KEY", rest: "" });
        assert_eq!(
            kv("_under: ok"),
            LineKind::KeyValue { key: "_under", rest: "ok" }
        );
    }

    #[test]
    fn test_unstructured_lines() {
        assert_eq!(kv("no separator here"), LineKind::Unstructured);
        assert_eq!(kv("9KEY: starts with digit"), LineKind::Unstructured);
        assert_eq!(kv("bad-key: dash"), LineKind::Unstructured);
    }

    #[test]
    fn test_custom_separator_is_literal() {
        let pattern = key_value_pattern("|");
        assert_eq!(
            classify("KEY| value", Mode::Normal, &pattern),
            LineKind::KeyValue { key: "KEY", rest: "value" }
        );
        // ':' is not a separator for this pattern
        assert_eq!(
            classify("KEY: value", Mode::Normal, &pattern),
            LineKind::Unstructured
        );
    }

    #[test]
    fn test_multiline_mode() {
        let pattern = key_value_pattern(":");
        assert_eq!(
            classify("\"\"\"", Mode::InMultiline, &pattern),
            LineKind::Terminator
        );
        assert_eq!(
            classify("  \"\"\"  ", Mode::InMultiline, &pattern),
            LineKind::Terminator
        );
        assert_eq!(
            classify("KEY: looks structured", Mode::InMultiline, &pattern),
            LineKind::Continuation("KEY: looks structured")
        );
        assert_eq!(
            classify("", Mode::InMultiline, &pattern),
            LineKind::Continuation("")
        );
    }

    #[test]
    fn test_key_name_syntax() {
        assert!(is_valid_key("A"));
        assert!(is_valid_key("_FREETEXT_"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("A B"));
    }
}
