//! StructuredText Format Description
//!
//! This module documents the line-oriented StructuredText format as
//! implemented by this library.
//!
//! # Overview
//!
//! StructuredText is a simple, human-readable way to store key/value
//! pairs, comments, and free-form text. It suits configuration settings,
//! transcripts, and articles with metadata, wherever readability of the
//! stored form matters more than expressiveness. It is deliberately not a
//! general configuration language: there is no nesting, no typing, no
//! includes, and no interpolation.
//!
//! # Grammar
//!
//! ```text
//! document   := line*
//! line       := comment | keyvalue | blank
//! comment    := '#' rest-of-line
//! keyvalue   := KEY sep value-tail
//! value-tail := '"""' NEWLINE multiline-body '"""'   ; multi-line
//!             | single-line-text                     ; single-line
//! KEY        := [A-Za-z_][A-Za-z0-9_]*
//! sep        := configurable literal string, default ':'
//! ```
//!
//! # Key/value lines
//!
//! ```text
//! PROJECT_NAME: Seeking Dharma
//! DATESTAMP: 02/06/1957 02:00:00
//! LOCATION: Bali
//! ```
//!
//! Single-line values are trimmed on both ends when stored. Whitespace
//! around the separator is insignificant. Blank lines between entries are
//! always ignored.
//!
//! # Multi-line values
//!
//! A value whose tail is exactly `"""` opens a block that runs until a
//! line containing only `"""` (optionally surrounded by whitespace):
//!
//! ```text
//! DESCRIPTION: """
//! Multiple lines, stored verbatim.
//!
//! Blank lines inside a block are preserved, unlike between entries.
//! """
//! ```
//!
//! The body is stored exactly as written, lines joined by `\n`, with no
//! trimming. A block left unterminated at end of input is committed,
//! trimmed, under its key — lenient recovery, not an error.
//!
//! # Comments
//!
//! Lines whose first non-whitespace character is `#` are comments. Each
//! is stored under a synthetic key `_COMMENT_<n>` (`n` counting from 1 in
//! first-seen order), with the leading `#` markers and surrounding
//! whitespace stripped. Comment storage can be disabled, and comments are
//! always skipped while an allow-list extraction is in progress.
//!
//! # Free text and diagnostics
//!
//! A normal-mode line that is neither blank, comment, nor `key:value` is
//! unstructured. In the default lenient mode it is aggregated (with any
//! embedded `"""` escaped to `\"\"\"`) under the free-text key, `_FREETEXT_`
//! by default, and a diagnostic is recorded. If the input yields no
//! key/value pairs at all, the entire input becomes the free-text
//! payload.
//!
//! Diagnostics collected during a run are stored newline-joined under
//! `_ERRORS_`; any `_ERRORS_` entry already present in the input is
//! always discarded first. In strict mode every format violation is fatal
//! instead, and no partial mapping is produced.
//!
//! # Limitations
//!
//! - **Embedded delimiter**: a value containing the literal `"""` token is
//!   escaped only on the free-text fallback path. It is never un-escaped
//!   on read and never escaped on normal multi-line write, so round-trip
//!   safety for such values is not guaranteed.
//! - **Streaming**: the whole input is buffered and processed in one
//!   pass; arbitrarily large inputs are a known scaling limit.
//! - **Output stability**: only the default option set guarantees that
//!   `parse(serialize(parse(x)))` is stable; exotic separator/padding
//!   combinations may not re-parse.

// This module contains only documentation; no implementation code
