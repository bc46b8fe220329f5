//! Configuration options for extraction and serialization.
//!
//! - [`ExtractOptions`]: controls parsing — separator, allow/deny lists,
//!   comment and diagnostics suppression, strict mode, free-text key name
//! - [`WriteOptions`]: controls output — separator, padding, linefeeds,
//!   single-key filter, multi-line vs escaped single-line rendering
//!
//! ## Examples
//!
//! ```rust
//! use stext::{from_lines_with_options, ExtractOptions};
//!
//! let options = ExtractOptions::new()
//!     .with_separator("=")
//!     .no_comments(true);
//! let doc = from_lines_with_options(["KEY = value", "# dropped"], options).unwrap();
//! assert_eq!(doc.get("KEY"), Some("value"));
//! assert_eq!(doc.len(), 1);
//! ```

use crate::document::DEFAULT_FREETEXT_KEY;

/// Options for one extraction call. Immutable while parsing runs.
///
/// # Examples
///
/// ```rust
/// use stext::ExtractOptions;
///
/// // Defaults: ':' separator, lenient, comments kept, diagnostics kept
/// let options = ExtractOptions::new();
///
/// // Extract only two keys, failing fast on any format violation
/// let options = ExtractOptions::new()
///     .with_keys(["TITLE", "DATE"])
///     .strict(true);
/// ```
#[derive(Clone, Debug)]
pub struct ExtractOptions {
    /// Key/value separator, matched literally. Default `:`.
    pub separator: String,
    /// Allow-list of keys to extract; empty means all. Enables early
    /// termination once every requested key has been seen.
    pub keys: Vec<String>,
    /// Deny-list of keys removed from the result after parsing.
    pub delete: Vec<String>,
    /// Drop comment lines instead of storing `_COMMENT_<n>` entries.
    pub no_comments: bool,
    /// Do not attach the `_ERRORS_` entry to the result.
    pub no_errors: bool,
    /// Abort on the first format violation instead of recording it.
    pub strict: bool,
    /// Suppress the echo of diagnostics to the log as they occur. Echoing
    /// never changes what ends up in the returned mapping.
    pub quiet: bool,
    /// Key under which unstructured text is aggregated. Must satisfy
    /// key-name syntax. Default `_FREETEXT_`.
    pub freetext_key: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            separator: ":".to_string(),
            keys: Vec::new(),
            delete: Vec::new(),
            no_comments: false,
            no_errors: false,
            strict: false,
            quiet: true,
            freetext_key: DEFAULT_FREETEXT_KEY.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key/value separator (matched literally, not as a regex).
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Sets the allow-list of keys to extract.
    ///
    /// When non-empty, only these keys appear in the result, comments are
    /// skipped, and parsing stops as soon as every key has been found.
    /// If any requested key never appears, the whole extraction counts as
    /// failed and returns an empty mapping (or an error in strict mode).
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the deny-list of keys to remove from the result.
    #[must_use]
    pub fn with_delete<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delete = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Drops comment lines instead of storing them.
    #[must_use]
    pub fn no_comments(mut self, yes: bool) -> Self {
        self.no_comments = yes;
        self
    }

    /// Suppresses the `_ERRORS_` entry in the result.
    #[must_use]
    pub fn no_errors(mut self, yes: bool) -> Self {
        self.no_errors = yes;
        self
    }

    /// Enables strict mode: any format violation aborts the extraction
    /// with no partial result.
    #[must_use]
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Controls the echo of diagnostics to the log. Defaults to quiet.
    #[must_use]
    pub fn quiet(mut self, yes: bool) -> Self {
        self.quiet = yes;
        self
    }

    /// Sets the free-text key name. Must satisfy key-name syntax or the
    /// extraction fails before any line is processed.
    #[must_use]
    pub fn with_freetext_key(mut self, name: &str) -> Self {
        self.freetext_key = name.to_string();
        self
    }
}

/// Options for rendering a [`Document`](crate::Document) back to text.
///
/// # Examples
///
/// ```rust
/// use stext::{to_string_with_options, Document, WriteOptions};
///
/// let mut doc = Document::new();
/// doc.insert("KEY".to_string(), "value".to_string());
///
/// let options = WriteOptions::new().with_separator("=").with_linefeeds(1);
/// assert_eq!(to_string_with_options(&doc, &options), "KEY= value\n");
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Key/value separator for output. Default `:`.
    pub separator: String,
    /// Number of spaces after the separator. Default 1.
    pub pad: usize,
    /// Number of linefeeds after each entry. Default 2; 0 means entries
    /// run together.
    pub linefeeds: usize,
    /// Render only this key, if set.
    pub key: Option<String>,
    /// Render values containing newlines as triple-quoted blocks
    /// (default). When `false`, such values are escaped onto one logical
    /// line and wrapped in double quotes.
    pub multiline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            separator: ":".to_string(),
            pad: 1,
            linefeeds: 2,
            key: None,
            multiline: true,
        }
    }
}

impl WriteOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output key/value separator.
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Sets the number of spaces after the separator.
    #[must_use]
    pub fn with_pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }

    /// Sets the number of linefeeds after each entry.
    #[must_use]
    pub fn with_linefeeds(mut self, linefeeds: usize) -> Self {
        self.linefeeds = linefeeds;
        self
    }

    /// Restricts output to a single key.
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Selects multi-line block rendering (`true`, default) or escaped
    /// single-line rendering (`false`).
    #[must_use]
    pub fn with_multiline(mut self, yes: bool) -> Self {
        self.multiline = yes;
        self
    }
}
