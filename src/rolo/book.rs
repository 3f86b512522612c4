//! # Contact Book
//!
//! Pairs a [`ContactStore`] with its [`NameIndex`]. Every mutation goes through a
//! single method here that updates both structures, so they cannot drift apart.
//!
//! Reads that need positions (listing, substring search) go to the store.
//! Exact case-insensitive lookups go to the index.

use crate::error::Result;
use crate::index::{NameIndex, SearchHit};
use crate::model::fold_name;
use crate::store::ContactStore;
use crate::store::linked::LinkedStore;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ContactBook<S: ContactStore = LinkedStore> {
    store: S,
    index: NameIndex,
}

impl<S: ContactStore> ContactBook<S> {
    /// Wrap an existing store, indexing whatever it already holds.
    pub fn new(store: S) -> Self {
        let index = NameIndex::from_names(store.iter());
        Self { store, index }
    }

    pub fn append(&mut self, name: &str) -> usize {
        self.store.append(name.to_string());
        self.index.add(name);
        self.store.len() - 1
    }

    /// Insert with clamping; returns the position actually used.
    pub fn insert(&mut self, index: isize, name: &str) -> usize {
        let pos = self.store.insert(index, name.to_string());
        self.index.add(name);
        pos
    }

    pub fn remove(&mut self, index: isize) -> Result<String> {
        let name = self.store.remove(index)?;
        self.index.remove(&name);
        Ok(name)
    }

    pub fn get(&self, index: isize) -> Result<&str> {
        self.store.get(index)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.store.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.store.to_vec()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Exact case-insensitive match through the index.
    pub fn lookup(&self, query: &str) -> &[String] {
        self.index.search(query)
    }

    /// Case-insensitive substring scan over the store. An empty query matches nothing.
    pub fn scan(&self, query: &str) -> Vec<SearchHit> {
        let needle = fold_name(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.store
            .iter()
            .enumerate()
            .filter(|(_, name)| fold_name(name).contains(&needle))
            .map(|(i, name)| SearchHit::new(i, name))
            .collect()
    }

    /// True when every index bucket holds exactly the spellings present in the store
    /// under that folded key (as a multiset).
    pub fn is_consistent(&self) -> bool {
        let mut expected: HashMap<String, Vec<String>> = HashMap::new();
        for name in self.store.iter() {
            expected
                .entry(fold_name(name))
                .or_default()
                .push(name.to_string());
        }
        if expected.len() != self.index.key_count() {
            return false;
        }
        expected.into_iter().all(|(key, mut names)| {
            let mut indexed = self.index.search(&key).to_vec();
            names.sort();
            indexed.sort();
            names == indexed
        })
    }
}

impl<S: ContactStore + FromIterator<String>> FromIterator<String> for ContactBook<S> {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
