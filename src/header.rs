//! Header derivation.
//!
//! The header line is the union of the keys of every record, in the order each
//! key is first seen across all records. [`HeaderSet`] keeps that order
//! explicitly with an [`IndexSet`] instead of relying on hash iteration order.

use crate::DsvMap;
use indexmap::IndexSet;

/// Insertion-ordered, duplicate-rejecting set of column names.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{dsv, HeaderSet};
///
/// let first = dsv!({ "name": "John", "age": 30 });
/// let second = dsv!({ "city": "LA", "name": "Jane" });
///
/// let mut headers = HeaderSet::new();
/// headers.extend_from_record(first.as_object().unwrap());
/// headers.extend_from_record(second.as_object().unwrap());
///
/// let columns: Vec<&str> = headers.iter().collect();
/// assert_eq!(columns, vec!["name", "age", "city"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet(IndexSet<String>);

impl HeaderSet {
    #[must_use]
    pub fn new() -> Self {
        HeaderSet(IndexSet::new())
    }

    /// Adds a column name. Returns `false` if it was already present, in
    /// which case its original position is kept.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.0.contains(key) {
            return false;
        }
        self.0.insert(key.to_string())
    }

    /// Adds every key of `record` that has not been seen yet, in record order.
    pub fn extend_from_record(&mut self, record: &DsvMap) {
        for key in record.keys() {
            self.insert(key);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the 0-based column position of `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.0.get_index_of(key)
    }

    /// Iterates over the column names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}
