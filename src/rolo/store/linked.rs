use super::{clamp_index, normalize_index, ContactStore};
use crate::error::{Result, RoloError};

type Link = Option<Box<Node>>;

struct Node {
    value: String,
    next: Link,
}

/// Singly linked contact store.
///
/// Keeps only a head link and a length counter, so every positional operation
/// walks the chain from the front.
#[derive(Default)]
pub struct LinkedStore {
    head: Link,
    len: usize,
}

impl LinkedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The link that points at position `pos` (the tail link when `pos == len`).
    fn link_at(&mut self, pos: usize) -> &mut Link {
        let mut link = &mut self.head;
        for _ in 0..pos {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn splice(&mut self, pos: usize, value: String) {
        let link = self.link_at(pos);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
    }
}

impl ContactStore for LinkedStore {
    fn len(&self) -> usize {
        self.len
    }

    fn append(&mut self, name: String) {
        self.splice(self.len, name);
    }

    fn insert(&mut self, index: isize, name: String) -> usize {
        let pos = clamp_index(index, self.len);
        self.splice(pos, name);
        pos
    }

    fn remove(&mut self, index: isize) -> Result<String> {
        let len = self.len;
        let pos = normalize_index(index, len)?;
        let link = self.link_at(pos);
        match link.take() {
            Some(node) => {
                let Node { value, next } = *node;
                *link = next;
                self.len -= 1;
                Ok(value)
            }
            None => Err(RoloError::IndexOutOfRange { index, len }),
        }
    }

    fn get(&self, index: isize) -> Result<&str> {
        let pos = normalize_index(index, self.len)?;
        let mut node = self.head.as_deref();
        for _ in 0..pos {
            node = node.and_then(|n| n.next.as_deref());
        }
        node.map(|n| n.value.as_str())
            .ok_or(RoloError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(Iter {
            next: self.head.as_deref(),
        })
    }
}

struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_str()
        })
    }
}

impl FromIterator<String> for LinkedStore {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut store = LinkedStore::new();
        // Build back to front through a Vec so construction stays linear
        let values: Vec<String> = iter.into_iter().collect();
        for value in values.into_iter().rev() {
            store.head = Some(Box::new(Node {
                value,
                next: store.head.take(),
            }));
            store.len += 1;
        }
        store
    }
}

impl Clone for LinkedStore {
    fn clone(&self) -> Self {
        self.iter().map(str::to_string).collect()
    }
}

impl std::fmt::Debug for LinkedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for LinkedStore {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can overflow on long chains
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(names: &[&str]) -> LinkedStore {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn append_preserves_order() {
        let mut s = LinkedStore::new();
        s.append("Alice".into());
        s.append("Bob".into());
        s.append("Charlie".into());
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_vec(), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn insert_clamps_to_front_and_back() {
        let mut s = store(&["B", "C"]);
        assert_eq!(s.insert(-7, "A".into()), 0);
        assert_eq!(s.insert(100, "D".into()), 3);
        assert_eq!(s.to_vec(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn insert_splices_before_existing_element() {
        let mut s = store(&["A", "C"]);
        assert_eq!(s.insert(1, "B".into()), 1);
        assert_eq!(s.to_vec(), vec!["A", "B", "C"]);
    }

    #[test]
    fn insert_into_empty_store() {
        let mut s = LinkedStore::new();
        assert_eq!(s.insert(3, "Solo".into()), 0);
        assert_eq!(s.to_vec(), vec!["Solo"]);
    }

    #[test]
    fn remove_shifts_following_elements() {
        let mut s = store(&["A", "B", "C"]);
        assert_eq!(s.remove(1).unwrap(), "B");
        assert_eq!(s.get(1).unwrap(), "C");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn remove_head_and_tail() {
        let mut s = store(&["A", "B", "C"]);
        assert_eq!(s.remove(0).unwrap(), "A");
        assert_eq!(s.remove(-1).unwrap(), "C");
        assert_eq!(s.to_vec(), vec!["B"]);
    }

    #[test]
    fn remove_from_empty_store_fails() {
        let mut s = LinkedStore::new();
        assert!(matches!(
            s.remove(0),
            Err(RoloError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(s.remove(-1).is_err());
    }

    #[test]
    fn get_supports_negative_indexes() {
        let s = store(&["A", "B", "C"]);
        assert_eq!(s.get(-1).unwrap(), "C");
        assert_eq!(s.get(-3).unwrap(), "A");
        assert!(s.get(-4).is_err());
        assert!(s.get(3).is_err());
    }

    #[test]
    fn iteration_is_restartable() {
        let s = store(&["A", "B"]);
        let first: Vec<_> = s.iter().collect();
        let second: Vec<_> = s.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn clone_is_independent() {
        let s = store(&["A", "B"]);
        let mut c = s.clone();
        c.remove(0).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(c.to_vec(), vec!["B"]);
    }

    #[test]
    fn drops_long_chains() {
        let s: LinkedStore = (0..200_000).map(|i| i.to_string()).collect();
        assert_eq!(s.len(), 200_000);
        drop(s);
    }
}
