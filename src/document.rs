//! Ordered key/value mapping for StructuredText documents.
//!
//! [`Document`] is a thin wrapper around [`IndexMap`] that maintains
//! insertion order. Order matters: serialization walks entries in the
//! order they were parsed, and comment numbering plus free-text
//! concatenation depend on it.
//!
//! A handful of synthetic keys carry content that does not fit the
//! key/value model:
//!
//! - `_COMMENT_1`, `_COMMENT_2`, … — comment lines, in first-seen order
//! - `_FREETEXT_` (configurable) — aggregated unstructured text
//! - `_ERRORS_` — diagnostics from the most recent extraction
//! - `_TEXT_` — legacy free-text key, merged and removed on read
//!
//! ## Examples
//!
//! ```rust
//! use stext::Document;
//!
//! let mut doc = Document::new();
//! doc.insert("NAME".to_string(), "Alice".to_string());
//! doc.insert("ROLE".to_string(), "admin".to_string());
//!
//! assert_eq!(doc.get("NAME"), Some("Alice"));
//! let keys: Vec<_> = doc.keys().cloned().collect();
//! assert_eq!(keys, vec!["NAME", "ROLE"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix of the synthetic keys holding comment lines.
pub const COMMENT_PREFIX: &str = "_COMMENT_";

/// Default key under which unstructured input text is aggregated.
pub const DEFAULT_FREETEXT_KEY: &str = "_FREETEXT_";

/// Key under which extraction diagnostics are stored.
pub const ERRORS_KEY: &str = "_ERRORS_";

/// Legacy free-text key, merged into the configured free-text key.
pub const LEGACY_TEXT_KEY: &str = "_TEXT_";

/// An ordered mapping from key to value, the shared data model of the
/// parser and the serializer.
///
/// Keys are unique; inserting an existing key overwrites its value in
/// place, keeping its original position. Removal preserves the order of
/// the remaining entries.
///
/// # Examples
///
/// ```rust
/// use stext::Document;
///
/// let mut doc = Document::new();
/// doc.insert("first".to_string(), "1".to_string());
/// doc.insert("second".to_string(), "2".to_string());
/// doc.insert("first".to_string(), "one".to_string());
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.get("first"), Some("one"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, String>);

impl Document {
    /// Creates an empty `Document`.
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Creates an empty `Document` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the document.
    ///
    /// If the key already exists its value is replaced in place and the
    /// old value returned; the entry keeps its position.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stext::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.insert("KEY".to_string(), "value".to_string());
    /// assert_eq!(doc.get("KEY"), Some("value"));
    /// assert_eq!(doc.get("OTHER"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the document contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` and returns its value, preserving the order of the
    /// remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the diagnostics recorded by the extraction that produced
    /// this document, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stext::from_lines;
    ///
    /// let doc = from_lines(["A: 1", "A: 2"]).unwrap();
    /// assert!(doc.errors().unwrap().contains("Duplicate key 'A'"));
    /// ```
    #[must_use]
    pub fn errors(&self) -> Option<&str> {
        self.get(ERRORS_KEY)
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<IndexMap<String, String>> for Document {
    fn from(map: IndexMap<String, String>) -> Self {
        Document(map)
    }
}

impl From<Document> for IndexMap<String, String> {
    fn from(doc: Document) -> Self {
        doc.0
    }
}

impl From<HashMap<String, String>> for Document {
    fn from(map: HashMap<String, String>) -> Self {
        Document(map.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}
