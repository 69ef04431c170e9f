//! Parsed frontmatter representation
//!
//! Frontmatter is a flat key/value mapping. Values are scalars, single-level
//! lists, or (for already-migrated files) the nested `metadata` mapping.

use std::collections::HashMap;

/// A single frontmatter field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain scalar, stored as its string rendering
    Scalar(String),
    /// Single-level list of scalars
    List(Vec<String>),
    /// One level of nested mapping with scalar values (the `metadata` group)
    Map(HashMap<String, String>),
}

impl FieldValue {
    /// Get the value as a scalar string, if it is one
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value as a single scalar line, comma-joining lists
    ///
    /// Maps render empty; they never appear on a single line.
    pub fn to_line(&self) -> String {
        match self {
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Map(_) => String::new(),
        }
    }
}

/// Parsed frontmatter: field name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: HashMap<String, FieldValue>,
}

impl Frontmatter {
    /// Create an empty frontmatter mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any existing value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    /// Get a field value by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Check whether a top-level key is present, regardless of its value
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Check whether the `metadata` group exists and contains `key`
    ///
    /// Only a structurally parsed metadata mapping counts; the fallback
    /// parser surfaces `metadata` as an empty list, which never matches.
    pub fn metadata_contains(&self, key: &str) -> bool {
        match self.fields.get("metadata") {
            Some(FieldValue::Map(map)) => map.contains_key(key),
            _ => false,
        }
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the mapping has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
