//! Error types for StructuredText extraction and serialization.
//!
//! The same `Error` values drive both failure modes of the library: in
//! strict mode a format violation is returned as `Err`, while in the
//! default lenient mode its `Display` string is recorded as a diagnostic
//! and ends up under the `_ERRORS_` key of the returned [`Document`].
//! There is one code path for both; only the destination differs.
//!
//! ## Error Categories
//!
//! - **Source errors**: missing or unreadable input file — always fatal
//! - **Configuration errors**: invalid free-text key name — always fatal
//! - **Format violations**: duplicate key, malformed line, no keys found,
//!   requested key missing — fatal only in strict mode
//!
//! ## Examples
//!
//! ```rust
//! use stext::{from_lines_with_options, ExtractOptions, Error};
//!
//! let options = ExtractOptions::new().strict(true);
//! let result = from_lines_with_options(["not a key value line"], options);
//! assert!(matches!(result, Err(Error::MalformedLine { .. })));
//! ```
//!
//! [`Document`]: crate::Document

use std::fmt;
use thiserror::Error;

/// All errors that can occur while extracting or writing StructuredText.
///
/// Format-violation variants carry the origin descriptor of the input
/// (`file '<path>'`, `list`, or `dictionary`) so the message identifies
/// which source misbehaved.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("No such file '{0}'")]
    FileNotFound(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(String),

    /// The configured free-text key does not satisfy key-name syntax
    #[error("Invalid freetext key name '{0}'")]
    InvalidFreetextKey(String),

    /// The same key was declared more than once
    #[error("Duplicate key '{key}' in {origin}")]
    DuplicateKey { key: String, origin: String },

    /// A line that is neither blank, comment, nor `key:value`
    #[error("No variable key in '{snippet}...' in {origin}")]
    MalformedLine { snippet: String, origin: String },

    /// The input contained no key/value pairs at all
    #[error("No key variables found in {origin}")]
    NoKeysFound { origin: String },

    /// Requested keys never appeared in the input
    #[error("Variable/s {keys:?} not found in {origin}")]
    KeysNotFound { keys: Vec<String>, origin: String },

    /// A deny-list key was not present in the mapping
    #[error("Variable '{key}' could not be deleted from {origin}")]
    DeleteKeyNotFound { key: String, origin: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a duplicate-key violation for the given origin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stext::Error;
    ///
    /// let err = Error::duplicate_key("NAME", "list");
    /// assert!(err.to_string().contains("Duplicate key 'NAME'"));
    /// ```
    pub fn duplicate_key(key: &str, origin: &str) -> Self {
        Error::DuplicateKey {
            key: key.to_string(),
            origin: origin.to_string(),
        }
    }

    /// Creates a malformed-line violation. Only the first 40 characters
    /// of the offending line are carried in the message.
    pub fn malformed_line(line: &str, origin: &str) -> Self {
        Error::MalformedLine {
            snippet: line.chars().take(40).collect(),
            origin: origin.to_string(),
        }
    }

    /// Creates a no-keys-found violation for the given origin.
    pub fn no_keys_found(origin: &str) -> Self {
        Error::NoKeysFound {
            origin: origin.to_string(),
        }
    }

    /// Creates a requested-keys-missing violation.
    pub fn keys_not_found(keys: Vec<String>, origin: &str) -> Self {
        Error::KeysNotFound {
            keys,
            origin: origin.to_string(),
        }
    }

    /// Creates a deny-list-key-absent diagnostic. Never fatal, even in
    /// strict mode.
    pub fn delete_key_not_found(key: &str, origin: &str) -> Self {
        Error::DeleteKeyNotFound {
            key: key.to_string(),
            origin: origin.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
