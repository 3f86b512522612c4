use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The kind of forward mutation an [`Operation`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Delete,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Add => write!(f, "add"),
            OperationKind::Delete => write!(f, "delete"),
        }
    }
}

/// One reversible mutation of the contact book.
///
/// Immutable once created. It moves between the undo and redo histories
/// as it is undone and redone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub id: Uuid,
    pub kind: OperationKind,
    pub name: String,
    // Position the forward mutation happened at, after clamping/normalization
    pub index: usize,
    pub recorded_at: DateTime<Utc>,
}

impl Operation {
    pub fn new(kind: OperationKind, name: impl Into<String>, index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            index,
            recorded_at: Utc::now(),
        }
    }

    pub fn add(name: impl Into<String>, index: usize) -> Self {
        Self::new(OperationKind::Add, name, index)
    }

    pub fn delete(name: impl Into<String>, index: usize) -> Self {
        Self::new(OperationKind::Delete, name, index)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\" at {}", self.kind, self.name, self.index)
    }
}

/// Case-folds a contact name into its index key.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
