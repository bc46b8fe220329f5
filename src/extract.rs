//! StructuredText extraction.
//!
//! [`extract`] drives the line classifier over the normalized line
//! sequence, building the ordered key/value mapping and collecting
//! diagnostics on the side. It is a pure function from (source, options)
//! to a [`Document`]; the only I/O is the one file read inside
//! [`Source`] normalization.
//!
//! ## Policy
//!
//! Format violations (duplicate key, malformed line, no keys found,
//! requested key missing) are non-fatal by default: each is recorded as a
//! diagnostic and the run produces a best-effort result, with the
//! collected messages stored under `_ERRORS_`. In strict mode the first
//! violation aborts the whole extraction with no partial mapping. One
//! code path decides which side of the `Result` a violation maps to.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use stext::from_str;
//!
//! let doc = from_str("# intro\nNAME: test\nDESC: \"\"\"\nline one\nline two\n\"\"\"").unwrap();
//! assert_eq!(doc.get("_COMMENT_1"), Some("intro"));
//! assert_eq!(doc.get("NAME"), Some("test"));
//! assert_eq!(doc.get("DESC"), Some("line one\nline two"));
//! ```

use log::warn;

use crate::document::{
    Document, COMMENT_PREFIX, DEFAULT_FREETEXT_KEY, ERRORS_KEY, LEGACY_TEXT_KEY,
};
use crate::error::{Error, Result};
use crate::line::{
    classify, is_valid_key, key_value_pattern, LineKind, Mode, ESCAPED_DELIMITER,
    MULTILINE_DELIMITER,
};
use crate::options::ExtractOptions;
use crate::source::Source;

/// Transient parse state, owned by one extraction call and destroyed
/// when it finishes.
struct ParseState {
    mode: Mode,
    pending_key: String,
    pending_lines: Vec<String>,
    comment_n: usize,
    freetext: String,
    diagnostics: Vec<String>,
}

impl ParseState {
    fn new() -> Self {
        ParseState {
            mode: Mode::Normal,
            pending_key: String::new(),
            pending_lines: Vec::new(),
            comment_n: 0,
            freetext: String::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Routes a format violation: `Err` in strict mode, a recorded
    /// diagnostic otherwise. `echo` additionally mirrors the message to
    /// the log at the moment it occurs.
    fn violation(&mut self, err: Error, strict: bool, echo: bool) -> Result<()> {
        if echo || strict {
            warn!("{err}");
        }
        if strict {
            return Err(err);
        }
        self.diagnostics.push(err.to_string());
        Ok(())
    }
}

/// Inserts a committed value, honoring an active allow-list.
///
/// Returns `true` when the allow-list has just been exhausted, which
/// lets the caller stop early; lines after that point have no effect on
/// the result.
fn commit(
    doc: &mut Document,
    key: &str,
    value: String,
    wanted: &mut Vec<String>,
    selecting: bool,
) -> bool {
    if selecting {
        if let Some(pos) = wanted.iter().position(|k| k == key) {
            doc.insert(key.to_string(), value);
            wanted.remove(pos);
            return wanted.is_empty();
        }
        return false;
    }
    doc.insert(key.to_string(), value);
    false
}

/// Extracts an ordered key/value [`Document`] from `source`.
///
/// Single-line values are stored trimmed; multi-line bodies are stored
/// verbatim, lines joined by `\n`. A block left unterminated at end of
/// input is committed trimmed under its pending key (lenient recovery).
///
/// # Errors
///
/// Always fatal: an invalid free-text key name, a missing or unreadable
/// input file. Fatal in strict mode only: any format violation.
///
/// # Examples
///
/// ```rust
/// use stext::{extract, ExtractOptions, Source};
///
/// let lines: Vec<String> = ["A: 1", "B: 2", "C: 3"]
///     .iter().map(|s| s.to_string()).collect();
/// let options = ExtractOptions::new().with_keys(["B"]);
/// let doc = extract(Source::Lines(lines), &options).unwrap();
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.get("B"), Some("2"));
/// ```
pub fn extract(source: Source, options: &ExtractOptions) -> Result<Document> {
    if options.freetext_key != DEFAULT_FREETEXT_KEY && !is_valid_key(&options.freetext_key) {
        return Err(Error::InvalidFreetextKey(options.freetext_key.clone()));
    }

    let origin = source.describe();
    let lines = source.into_lines(&options.separator)?;
    let pattern = key_value_pattern(&options.separator);

    let mut doc = Document::new();
    let mut state = ParseState::new();
    let mut wanted = options.keys.clone();
    let selecting = !wanted.is_empty();
    let echo = !options.quiet;

    for line in &lines {
        match classify(line, state.mode, &pattern) {
            LineKind::Blank => {}
            LineKind::Comment(text) => {
                // Comments are never matched against an allow-list.
                if options.no_comments || selecting {
                    continue;
                }
                state.comment_n += 1;
                doc.insert(
                    format!("{COMMENT_PREFIX}{}", state.comment_n),
                    text.to_string(),
                );
            }
            LineKind::KeyValue { key, rest } => {
                if doc.contains_key(key) {
                    state.violation(Error::duplicate_key(key, &origin), options.strict, echo)?;
                }
                let rest = rest.trim();
                if rest == MULTILINE_DELIMITER {
                    state.mode = Mode::InMultiline;
                    state.pending_key = key.to_string();
                    state.pending_lines.clear();
                } else if commit(&mut doc, key, rest.to_string(), &mut wanted, selecting) {
                    return Ok(doc);
                }
            }
            LineKind::Unstructured => {
                state.violation(
                    Error::malformed_line(line, &origin),
                    options.strict,
                    echo && !selecting,
                )?;
                state
                    .freetext
                    .push_str(&line.replace(MULTILINE_DELIMITER, ESCAPED_DELIMITER));
                state.freetext.push('\n');
            }
            LineKind::Terminator => {
                let key = std::mem::take(&mut state.pending_key);
                let value = state.pending_lines.join("\n");
                state.pending_lines.clear();
                state.mode = Mode::Normal;
                if commit(&mut doc, &key, value, &mut wanted, selecting) {
                    return Ok(doc);
                }
            }
            LineKind::Continuation(text) => state.pending_lines.push(text.to_string()),
        }
    }

    if state.mode == Mode::InMultiline {
        // Unterminated block at end of input: lenient recovery.
        let key = std::mem::take(&mut state.pending_key);
        let value = state.pending_lines.join("\n").trim().to_string();
        if commit(&mut doc, &key, value, &mut wanted, selecting) {
            return Ok(doc);
        }
    }

    post_process(doc, state, wanted, options, &origin, &lines)
}

/// Applies the duplicate/missing-key/deletion/free-text/diagnostic
/// policies once the builder has consumed all input.
fn post_process(
    mut doc: Document,
    mut state: ParseState,
    wanted: Vec<String>,
    options: &ExtractOptions,
    origin: &str,
    lines: &[String],
) -> Result<Document> {
    let echo = !options.quiet;

    if doc.is_empty() {
        let err = Error::no_keys_found(origin);
        if echo || options.strict {
            warn!("{err}");
        }
        if options.strict {
            return Err(err);
        }
        // The whole input becomes the free-text payload; the dump
        // supersedes the per-line diagnostics accumulated on the way.
        state.diagnostics.clear();
        state.freetext = lines.join("\n");
    }

    if !wanted.is_empty() {
        // Requested keys never appeared: total failure, not partial data.
        let err = Error::keys_not_found(wanted, origin);
        if echo || options.strict {
            warn!("{err}");
        }
        if options.strict {
            return Err(err);
        }
        return Ok(Document::new());
    }

    for key in &options.delete {
        if doc.remove(key).is_none() {
            let err = Error::delete_key_not_found(key, origin);
            if echo || options.strict {
                warn!("{err}");
            }
            state.diagnostics.push(err.to_string());
        }
    }

    if !state.freetext.trim().is_empty() {
        let mut freetext = state.freetext.trim().to_string();
        // Legacy keys are merged in front of the accumulated text, then
        // removed; a pre-existing entry under a custom free-text key is
        // prepended as well and overwritten in place.
        for legacy in [LEGACY_TEXT_KEY, DEFAULT_FREETEXT_KEY] {
            if let Some(prev) = doc.remove(legacy) {
                freetext = format!("{}\n{}", prev.trim(), freetext);
            }
        }
        if options.freetext_key != DEFAULT_FREETEXT_KEY {
            if let Some(prev) = doc.get(&options.freetext_key) {
                freetext = format!("{}\n{}", prev.trim(), freetext);
            }
        }
        doc.insert(options.freetext_key.clone(), freetext);
    }

    // Diagnostics from a previous run never survive re-extraction.
    doc.remove(ERRORS_KEY);
    if !state.diagnostics.is_empty() && !options.no_errors {
        doc.insert(ERRORS_KEY.to_string(), state.diagnostics.join("\n"));
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Source {
        Source::Lines(input.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_single_line_values_are_trimmed() {
        let doc = extract(lines(&["KEY:    padded value   "]), &ExtractOptions::new()).unwrap();
        assert_eq!(doc.get("KEY"), Some("padded value"));
    }

    #[test]
    fn test_multiline_body_kept_verbatim() {
        let doc = extract(
            lines(&["KEY: \"\"\"", "  indented", "", "last", "\"\"\""]),
            &ExtractOptions::new(),
        )
        .unwrap();
        assert_eq!(doc.get("KEY"), Some("  indented\n\nlast"));
    }

    #[test]
    fn test_unterminated_multiline_committed_trimmed() {
        let doc = extract(
            lines(&["KEY: \"\"\"", "  dangling  "]),
            &ExtractOptions::new(),
        )
        .unwrap();
        assert_eq!(doc.get("KEY"), Some("dangling"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let doc = extract(lines(&["A: 1", "A: 2"]), &ExtractOptions::new()).unwrap();
        assert_eq!(doc.get("A"), Some("2"));
        let errors = doc.errors().unwrap();
        assert_eq!(errors.lines().count(), 1);
        assert!(errors.contains("Duplicate key 'A' in list"));
    }

    #[test]
    fn test_duplicate_key_strict_aborts() {
        let result = extract(
            lines(&["A: 1", "A: 2"]),
            &ExtractOptions::new().strict(true),
        );
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_invalid_freetext_key_always_fatal() {
        let options = ExtractOptions::new().with_freetext_key("not a key");
        let result = extract(lines(&["A: 1"]), &options);
        assert!(matches!(result, Err(Error::InvalidFreetextKey(_))));
    }

    #[test]
    fn test_stale_errors_entry_is_dropped() {
        let doc = extract(lines(&["_ERRORS_: stale", "A: 1"]), &ExtractOptions::new()).unwrap();
        assert_eq!(doc.get("A"), Some("1"));
        assert_eq!(doc.errors(), None);
    }

    #[test]
    fn test_no_errors_suppresses_diagnostics() {
        let doc = extract(
            lines(&["A: 1", "A: 2"]),
            &ExtractOptions::new().no_errors(true),
        )
        .unwrap();
        assert_eq!(doc.errors(), None);
    }

    #[test]
    fn test_legacy_text_key_merged() {
        let doc = extract(
            lines(&["_TEXT_: old note", "A: 1", "stray line"]),
            &ExtractOptions::new(),
        )
        .unwrap();
        assert_eq!(doc.get("_TEXT_"), None);
        assert_eq!(doc.get("_FREETEXT_"), Some("old note\nstray line"));
    }
}
