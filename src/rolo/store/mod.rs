//! # Storage Layer
//!
//! This module defines the ordered contact store. The [`ContactStore`] trait gives
//! callers array semantics regardless of how the contacts are held in memory.
//!
//! ## Index Semantics
//!
//! All implementations follow the same rules, so the rest of the crate can treat
//! any store as an array:
//!
//! - `get` / `remove` normalize negative indexes (`index += len`) and reject anything
//!   outside `0..len` with [`RoloError::IndexOutOfRange`]. An empty store rejects every index.
//! - `insert` never fails: an index `<= 0` prepends, an index `>= len` appends,
//!   anything else splices before the element currently at `index`.
//!
//! ## Implementations
//!
//! - [`linked::LinkedStore`]: singly linked nodes with a length counter
//!   - `append`, `get`, `insert`, `remove` walk the chain: O(n)
//!   - `len` is O(1)
//!
//! - [`memory::VecStore`]: contiguous `Vec` storage
//!   - O(1) amortized `append` and `get`, O(n) splices
//!   - Used as a reference model in tests
//!
//! Nothing outside this module depends on the chosen representation.

use crate::error::{RoloError, Result};

pub mod linked;
pub mod memory;

/// Ordered sequence of contact names with array-like index access.
pub trait ContactStore {
    /// Number of live contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a contact at the end.
    fn append(&mut self, name: String);

    /// Insert a contact, clamping the index into `0..=len`.
    /// Returns the position the contact ended up at.
    fn insert(&mut self, index: isize, name: String) -> usize;

    /// Remove and return the contact at `index` (negative indexes count from the end).
    fn remove(&mut self, index: isize) -> Result<String>;

    /// Borrow the contact at `index` (negative indexes count from the end).
    fn get(&self, index: isize) -> Result<&str>;

    /// Forward iteration in store order. Restartable: every call starts at the front.
    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Snapshot the contents as owned strings.
    fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

/// Resolve a possibly negative index against `len`, rejecting out-of-range values.
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let signed_len = isize::try_from(len).unwrap_or(isize::MAX);
    let normalized = if index < 0 { index + signed_len } else { index };
    if normalized < 0 || normalized >= signed_len {
        return Err(RoloError::IndexOutOfRange { index, len });
    }
    // normalized is within 0..len here
    Ok(normalized as usize)
}

/// Clamp an insertion index into `0..=len`.
pub fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len)
    }
}
