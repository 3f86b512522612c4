use crate::config::{DatabaseSettings, RoloConfig};
use crate::index::SearchHit;
use crate::model::Operation;
use crate::session::View;

pub mod add;
pub mod config;
pub mod delete;
pub mod history;
pub mod list;
pub mod lookup;
pub mod redo;
pub mod search;
pub mod undo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Pending entries of both histories, each in the order they would be replayed.
#[derive(Debug, Clone, Default)]
pub struct HistorySnapshot {
    pub undo: Vec<Operation>,
    pub redo: Vec<Operation>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Operation>,
    pub view: Option<View>,
    pub hits: Vec<SearchHit>,
    pub matches: Vec<String>,
    pub history: Option<HistorySnapshot>,
    pub config: Option<RoloConfig>,
    pub database: Option<DatabaseSettings>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, ops: Vec<Operation>) -> Self {
        self.affected = ops;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_matches(mut self, matches: Vec<String>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_history(mut self, history: HistorySnapshot) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_config(mut self, config: RoloConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_database(mut self, database: DatabaseSettings) -> Self {
        self.database = Some(database);
        self
    }
}
