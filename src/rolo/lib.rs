//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact book library**. The `rolo` binary is one client;
//! a web front end or a test harness drives the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and shell lines, prints results         │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (typed index strings → positions)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per request, operating on a Session         │
//! │  - Builds CmdResult values and user-facing messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (session.rs, history.rs, book.rs, index.rs, store/)   │
//! │  - Session: the context object owning all mutable state     │
//! │  - OperationLog: LIFO undo, FIFO redo                       │
//! │  - ContactBook: store + name index mutated together         │
//! │  - ContactStore trait: LinkedStore, VecStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! Everything lives in memory for the lifetime of one [`session::Session`]. Nothing
//! is persisted except the optional configuration file. Database settings are read
//! from the environment for display only.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Request logic and result types
//! - [`session`]: Context object and the render [`session::View`]
//! - [`history`]: Undo/redo engine
//! - [`book`]: Paired store and index mutations
//! - [`index`]: Case-insensitive name index
//! - [`store`]: Ordered contact storage with array semantics
//! - [`model`]: `Operation` and friends
//! - [`config`]: Configuration file and environment settings
//! - [`error`]: Error types
//! - `cli`: shell, argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
