//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every contact-book request, whichever UI issues it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (user-typed index strings become signed positions)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O and formats nothing. Failures come back as [`RoloError`] values;
//! deciding how to present them (the CLI prints a warning and re-renders the
//! unchanged list) is the caller's job.
//!
//! `RoloApi<S: ContactStore>` is generic over the store representation:
//! - Production: `RoloApi<LinkedStore>`
//! - Comparison/testing: `RoloApi<VecStore>`

use crate::commands;
use crate::error::{Result, RoloError};
use crate::session::Session;
use crate::store::ContactStore;
use crate::store::linked::LinkedStore;
use std::path::PathBuf;

/// The main API facade for rolo operations.
///
/// Owns the [`Session`], so every request runs against one context object.
pub struct RoloApi<S: ContactStore = LinkedStore> {
    session: Session<S>,
    config_dir: PathBuf,
}

impl<S: ContactStore> RoloApi<S> {
    pub fn new(session: Session<S>, config_dir: PathBuf) -> Self {
        Self {
            session,
            config_dir,
        }
    }

    pub fn add_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.session, name, None)
    }

    pub fn insert_contact(&mut self, index: &str, name: &str) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::add::run(&mut self.session, name, Some(index))
    }

    pub fn delete_contact(&mut self, index: &str) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::delete::run(&mut self.session, index)
    }

    pub fn undo(&mut self) -> Result<commands::CmdResult> {
        commands::undo::run(&mut self.session)
    }

    pub fn redo(&mut self) -> Result<commands::CmdResult> {
        commands::redo::run(&mut self.session)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn search_contacts(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.session, query)
    }

    pub fn lookup_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::lookup::run(&self.session, name)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.session)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }
}

/// Parse a user-typed position. Negative values count from the end.
pub fn parse_index(input: &str) -> Result<isize> {
    input
        .trim()
        .parse()
        .map_err(|_| RoloError::Api(format!("Invalid index format: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, HistorySnapshot, MessageLevel};
