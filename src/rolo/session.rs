//! # Session
//!
//! The explicit context object that owns all mutable state: the [`ContactBook`]
//! (store + index) and its [`OperationLog`]. Request handlers receive it by
//! reference; there are no process-wide singletons.
//!
//! A session has a single owner. If it is ever shared between threads, wrap the
//! whole session in one lock: the store, index and both histories form one
//! critical section per mutating request.
//!
//! ## Forward mutations
//!
//! `add`, `insert` and `delete` validate first, apply to the book, and only then
//! record the operation. A request that fails validation changes nothing, not even
//! the redo history.

use crate::book::ContactBook;
use crate::config::RoloConfig;
use crate::error::{Result, RoloError};
use crate::history::{HistoryStep, OperationLog};
use crate::index::SearchHit;
use crate::model::Operation;
use crate::store::ContactStore;
use crate::store::linked::LinkedStore;

/// Read-only snapshot for a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub contacts: Vec<(usize, String)>,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone)]
pub struct Session<S: ContactStore = LinkedStore> {
    book: ContactBook<S>,
    log: OperationLog,
    title: String,
}

impl Session<LinkedStore> {
    /// A linked-store session seeded and sized from configuration.
    pub fn from_config(config: &RoloConfig) -> Self {
        let store: LinkedStore = config.seed.iter().cloned().collect();
        Self::new(store, OperationLog::new(config.history_depth)).with_title(&config.title)
    }
}

impl<S: ContactStore> Session<S> {
    pub fn new(store: S, log: OperationLog) -> Self {
        let book = ContactBook::new(store);
        tracing::info!(
            contacts = book.len(),
            history_depth = log.max_depth(),
            "session started"
        );
        Self {
            book,
            log,
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Append a contact.
    pub fn add(&mut self, name: &str) -> Result<Operation> {
        let name = validate_name(name)?;
        let pos = self.book.append(name);
        Ok(self.record(Operation::add(name, pos)))
    }

    /// Insert a contact at a clamped position. The recorded index is the one used.
    pub fn insert(&mut self, index: isize, name: &str) -> Result<Operation> {
        let name = validate_name(name)?;
        let pos = self.book.insert(index, name);
        Ok(self.record(Operation::add(name, pos)))
    }

    /// Delete the contact at `index` (negative counts from the end).
    pub fn delete(&mut self, index: isize) -> Result<Operation> {
        let len = self.book.len();
        let name = self.book.remove(index)?;
        // remove succeeded, so the normalized index is in range of the old length
        let pos = if index < 0 {
            (index + len as isize) as usize
        } else {
            index as usize
        };
        Ok(self.record(Operation::delete(name, pos)))
    }

    pub fn undo(&mut self) -> Option<HistoryStep> {
        self.log.undo(&mut self.book)
    }

    pub fn redo(&mut self) -> Option<HistoryStep> {
        self.log.redo(&mut self.book)
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.book.scan(query)
    }

    pub fn lookup(&self, query: &str) -> Vec<String> {
        self.book.lookup(query).to_vec()
    }

    pub fn view(&self) -> View {
        View {
            title: self.title.clone(),
            contacts: self
                .book
                .iter()
                .enumerate()
                .map(|(i, name)| (i, name.to_string()))
                .collect(),
            can_undo: self.log.can_undo(),
            can_redo: self.log.can_redo(),
        }
    }

    pub fn book(&self) -> &ContactBook<S> {
        &self.book
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn record(&mut self, op: Operation) -> Operation {
        tracing::debug!(op = %op, id = %op.id, "applied");
        self.log.record(op.clone());
        op
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RoloError::EmptyName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OperationKind;
    use crate::store::memory::VecStore;
    use crate::store::memory::fixtures::{linked, vec_store};

    fn session(list: &[&str]) -> Session {
        Session::new(linked(list), OperationLog::default())
    }

    fn names<S: ContactStore>(s: &Session<S>) -> Vec<String> {
        s.book().names()
    }

    #[test]
    fn add_then_undo_then_redo() {
        let mut s = session(&["Alice"]);
        let op = s.add("X").unwrap();
        assert_eq!(op.kind, OperationKind::Add);
        assert_eq!(op.index, 1);

        s.undo().unwrap();
        assert_eq!(names(&s), vec!["Alice"]);

        s.redo().unwrap();
        assert_eq!(names(&s), vec!["Alice", "X"]);
        assert_eq!(s.book().get(1).unwrap(), "X");
    }

    #[test]
    fn delete_undo_redo_round_trip() {
        let mut s = session(&["Alice", "Bob"]);
        let op = s.delete(0).unwrap();
        assert_eq!(op.name, "Alice");
        assert_eq!(names(&s), vec!["Bob"]);
        let pending: Vec<_> = s.log().undo_entries().cloned().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].kind, OperationKind::Delete);
        assert_eq!(pending[0].index, 0);

        s.undo().unwrap();
        assert_eq!(names(&s), vec!["Alice", "Bob"]);
        assert!(s.view().can_redo);

        s.redo().unwrap();
        assert_eq!(names(&s), vec!["Bob"]);
    }

    #[test]
    fn negative_delete_records_normalized_index() {
        let mut s = session(&["A", "B", "C"]);
        let op = s.delete(-1).unwrap();
        assert_eq!(op.name, "C");
        assert_eq!(op.index, 2);
        s.undo().unwrap();
        assert_eq!(names(&s), vec!["A", "B", "C"]);
    }

    #[test]
    fn failed_delete_changes_nothing() {
        let mut s = session(&["A"]);
        s.add("B").unwrap();
        s.undo().unwrap();

        assert!(matches!(
            s.delete(5),
            Err(RoloError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(s.log().can_redo());
        assert!(!s.log().can_undo());
        assert_eq!(names(&s), vec!["A"]);
    }

    #[test]
    fn empty_name_is_rejected_without_touching_history() {
        let mut s = session(&[]);
        s.add("A").unwrap();
        s.undo().unwrap();
        assert!(matches!(s.add("   "), Err(RoloError::EmptyName)));
        assert!(s.log().can_redo());
    }

    #[test]
    fn names_are_trimmed() {
        let mut s = session(&[]);
        let op = s.add("  Dana ").unwrap();
        assert_eq!(op.name, "Dana");
        assert_eq!(s.lookup("dana"), vec!["Dana"]);
    }

    #[test]
    fn insert_records_clamped_position() {
        let mut s = session(&["A", "B"]);
        let op = s.insert(50, "Z").unwrap();
        assert_eq!(op.index, 2);
        let op = s.insert(-3, "Y").unwrap();
        assert_eq!(op.index, 0);
        assert_eq!(names(&s), vec!["Y", "A", "B", "Z"]);
    }

    #[test]
    fn new_forward_mutation_clears_redo() {
        let mut s = session(&[]);
        s.add("X").unwrap();
        s.undo().unwrap();
        s.add("Y").unwrap();
        assert!(s.redo().is_none());
        assert_eq!(names(&s), vec!["Y"]);
    }

    #[test]
    fn view_reports_positions_and_flags() {
        let mut s = session(&["A", "B"]).with_title("Team");
        let v = s.view();
        assert_eq!(v.title, "Team");
        assert_eq!(v.contacts, vec![(0, "A".to_string()), (1, "B".to_string())]);
        assert!(!v.can_undo);
        assert!(!v.can_redo);

        s.delete(0).unwrap();
        let v = s.view();
        assert!(v.can_undo);
        assert_eq!(v.contacts, vec![(0, "B".to_string())]);
    }

    #[test]
    fn index_follows_undo_and_redo() {
        let mut s = session(&["alice", "Bob"]);
        s.add("ALICE").unwrap();
        s.delete(0).unwrap();
        assert_eq!(s.lookup("Alice"), vec!["ALICE"]);
        s.undo().unwrap();
        s.undo().unwrap();
        assert_eq!(s.lookup("Alice"), vec!["alice"]);
        assert!(s.book().is_consistent());
    }

    #[test]
    fn works_over_vec_store() {
        let mut s: Session<VecStore> = Session::new(vec_store(&["A"]), OperationLog::default());
        s.add("B").unwrap();
        s.delete(0).unwrap();
        s.undo().unwrap();
        assert_eq!(names(&s), vec!["A", "B"]);
    }

    #[test]
    fn from_config_uses_seed_and_depth() {
        let config = RoloConfig {
            seed: vec!["Q".into(), "R".into()],
            history_depth: 1,
            title: "T".into(),
        };
        let mut s = Session::from_config(&config);
        assert_eq!(names(&s), vec!["Q", "R"]);
        assert_eq!(s.title(), "T");
        s.add("S").unwrap();
        s.add("U").unwrap();
        assert_eq!(s.log().undo_len(), 1);
    }
}
