//! # Name Index
//!
//! Case-insensitive lookup over the contacts currently in the store.
//!
//! Keys are case-folded names; each bucket keeps the original-case spellings in the
//! order they were added. A key exists only while its bucket is non-empty.
//!
//! ```text
//! store: ["Alice", "bob", "ALICE"]
//!
//! "alice" -> ["Alice", "ALICE"]
//! "bob"   -> ["bob"]
//! ```
//!
//! The index answers exact matches only. Substring search still scans the store
//! (see `commands::search`).

use crate::model::fold_name;
use std::collections::HashMap;

/// A search result: position in the store plus the stored spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub name: String,
}

impl SearchHit {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for SearchHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.index, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over an existing sequence of names.
    pub fn from_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> Self {
        let mut index = Self::new();
        for name in names {
            index.add(name);
        }
        index
    }

    pub fn add(&mut self, name: &str) {
        self.buckets
            .entry(fold_name(name))
            .or_default()
            .push(name.to_string());
    }

    /// Remove one occurrence of `name` (first match).
    /// Returns false when nothing matched; that is not an error.
    pub fn remove(&mut self, name: &str) -> bool {
        let key = fold_name(name);
        let Some(bucket) = self.buckets.get_mut(&key) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|n| n == name) else {
            return false;
        };
        bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        true
    }

    /// All stored spellings whose case-folded form equals the folded query.
    pub fn search(&self, query: &str) -> &[String] {
        self.buckets
            .get(&fold_name(query))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.buckets.contains_key(&fold_name(name))
    }

    /// Number of occurrences under the folded form of `name`.
    pub fn count(&self, name: &str) -> usize {
        self.search(name).len()
    }

    /// Number of distinct folded keys.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total occurrences across every bucket.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
