use super::{clamp_index, normalize_index, ContactStore};
use crate::error::Result;

/// Vec-backed contact store.
/// Same index semantics as [`super::linked::LinkedStore`] with contiguous storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecStore {
    contacts: Vec<String>,
}

impl VecStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for VecStore {
    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn append(&mut self, name: String) {
        self.contacts.push(name);
    }

    fn insert(&mut self, index: isize, name: String) -> usize {
        let pos = clamp_index(index, self.contacts.len());
        self.contacts.insert(pos, name);
        pos
    }

    fn remove(&mut self, index: isize) -> Result<String> {
        let pos = normalize_index(index, self.contacts.len())?;
        Ok(self.contacts.remove(pos))
    }

    fn get(&self, index: isize) -> Result<&str> {
        let pos = normalize_index(index, self.contacts.len())?;
        Ok(&self.contacts[pos])
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.contacts.iter().map(String::as_str))
    }

    fn to_vec(&self) -> Vec<String> {
        self.contacts.clone()
    }
}

impl FromIterator<String> for VecStore {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::linked::LinkedStore;

    /// The roster every fresh session starts with unless configured otherwise.
    pub const SAMPLE: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

    pub fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    pub fn linked(list: &[&str]) -> LinkedStore {
        names(list).into_iter().collect()
    }

    pub fn vec_store(list: &[&str]) -> VecStore {
        names(list).into_iter().collect()
    }
}
