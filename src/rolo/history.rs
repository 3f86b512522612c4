//! # Operation Log
//!
//! Undo/redo engine over a [`ContactBook`].
//!
//! Two histories hold recorded [`Operation`]s:
//!
//! - **undo**: last-in-first-out. `undo()` always reverses the newest forward mutation.
//! - **redo**: first-in-first-out. `redo()` replays the *oldest* undone operation.
//!
//! The redo order is not the mirror of the undo order. With one pending undo the two
//! behave like conventional undo/redo; with several pending, redo replays them in the
//! order they were undone:
//!
//! ```text
//! record(add A), record(add B)
//!   undo:  [add A, add B]        redo: []
//! undo() x2
//!   undo:  []                    redo: [add B, add A]
//! redo()                         -> replays add B first
//!   undo:  [add B]               redo: [add A]
//! ```
//!
//! Recording a new forward mutation empties the redo history.
//!
//! ## Failed replays
//!
//! An undo or redo whose effect cannot be applied (for example, a recorded index that
//! no longer exists) still moves the operation to the opposite history. The returned
//! [`HistoryStep`] reports `applied = false` and a warning is logged.

use crate::book::ContactBook;
use crate::model::{Operation, OperationKind};
use crate::store::ContactStore;
use std::collections::VecDeque;

/// Default maximum number of operations kept for undo.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Undo => write!(f, "undo"),
            Direction::Redo => write!(f, "redo"),
        }
    }
}

/// Outcome of one undo or redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStep {
    pub direction: Direction,
    pub operation: Operation,
    /// Whether the book actually changed.
    pub applied: bool,
}

#[derive(Debug, Clone)]
pub struct OperationLog {
    /// Newest at the back.
    undo: VecDeque<Operation>,
    /// Oldest undone at the front.
    redo: VecDeque<Operation>,
    /// Maximum undo depth; 0 means unbounded.
    max_depth: usize,
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl OperationLog {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            max_depth,
        }
    }

    /// Unbounded log (for testing).
    pub fn unlimited() -> Self {
        Self::new(0)
    }

    /// Record a forward mutation that has just been applied.
    /// Starts a new branch of history: the redo history is cleared.
    pub fn record(&mut self, op: Operation) {
        if !self.redo.is_empty() {
            tracing::debug!(discarded = self.redo.len(), "new operation cleared redo history");
            self.redo.clear();
        }
        self.push_undo(op);
    }

    /// Reverse the newest recorded operation. `None` when there is nothing to undo.
    pub fn undo<S: ContactStore>(&mut self, book: &mut ContactBook<S>) -> Option<HistoryStep> {
        let op = self.undo.pop_back()?;
        let applied = match op.kind {
            OperationKind::Add => remove_recorded(book, &op),
            OperationKind::Delete => {
                book.insert(as_signed(op.index), &op.name);
                true
            }
        };
        if !applied {
            tracing::warn!(op = %op, "undo could not be applied; moving to redo anyway");
        }
        tracing::debug!(op = %op, applied, "undo");
        self.redo.push_back(op.clone());
        Some(HistoryStep {
            direction: Direction::Undo,
            operation: op,
            applied,
        })
    }

    /// Replay the oldest undone operation. `None` when there is nothing to redo.
    pub fn redo<S: ContactStore>(&mut self, book: &mut ContactBook<S>) -> Option<HistoryStep> {
        let op = self.redo.pop_front()?;
        let applied = match op.kind {
            OperationKind::Add => {
                book.insert(as_signed(op.index), &op.name);
                true
            }
            OperationKind::Delete => remove_recorded(book, &op),
        };
        if !applied {
            tracing::warn!(op = %op, "redo could not be applied; moving to undo anyway");
        }
        tracing::debug!(op = %op, applied, "redo");
        self.push_undo(op.clone());
        Some(HistoryStep {
            direction: Direction::Redo,
            operation: op,
            applied,
        })
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Pending undo entries, next to be undone first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &Operation> {
        self.undo.iter().rev()
    }

    /// Pending redo entries, next to be redone first.
    pub fn redo_entries(&self) -> impl Iterator<Item = &Operation> {
        self.redo.iter()
    }

    fn push_undo(&mut self, op: Operation) {
        self.undo.push_back(op);
        while self.max_depth > 0 && self.undo.len() > self.max_depth {
            if let Some(evicted) = self.undo.pop_front() {
                tracing::debug!(op = %evicted, "evicted oldest undo entry");
            }
        }
    }
}

fn remove_recorded<S: ContactStore>(book: &mut ContactBook<S>, op: &Operation) -> bool {
    match book.remove(as_signed(op.index)) {
        Ok(removed) => {
            if removed != op.name {
                tracing::warn!(
                    expected = %op.name,
                    removed = %removed,
                    index = op.index,
                    "replay removed a different contact than recorded"
                );
            }
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "replay removal failed");
            false
        }
    }
}

fn as_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
