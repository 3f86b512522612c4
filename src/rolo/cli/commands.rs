//! # CLI Layer
//!
//! This module is **one possible UI client** for rolo. It is the only place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument and line parsing
//! - Formats output for human consumption
//!
//! The binary runs an interactive shell: each input line is parsed into a
//! [`ShellCommand`] and dispatched to the API. A failed request never ends the
//! session. The error is printed as a warning and the unchanged list is shown
//! again, the same way a web front end would redirect back to the list.
//!
//! ## Structure
//!
//! - `run()`: parses process arguments, sets up logging and the context
//! - `init_context()`: loads configuration and builds the `RoloApi`
//! - `execute()`: dispatches one shell line
//! - `handle_*()`: per-command handlers that call the API and print results

use super::print::{
    print_config, print_hits, print_history, print_matches, print_messages, print_view,
    print_warning,
};
use super::setup::{get_shell_help, parse_line, Cli, ShellCommand};
use clap::Parser;
use directories::ProjectDirs;
use rolo::api::{ConfigAction, RoloApi};
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::session::Session;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const PROMPT: &str = "rolo> ";

struct AppContext {
    api: RoloApi,
}

/// Whether the shell should keep reading lines.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            if execute(&mut ctx, line) == Flow::Quit {
                break;
            }
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        handle_list(&ctx)?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if execute(&mut ctx, &line?) == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ROLO_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "rolo=debug" } else { "rolo=warn" })
    });

    let format = std::env::var("ROLO_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var("ROLO_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolo", "rolo")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RoloError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli)?;
    let mut config = RoloConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
        RoloConfig::default()
    });

    if cli.empty {
        config.seed.clear();
    } else if !cli.seed.is_empty() {
        config.seed = cli.seed.clone();
    }
    if let Some(depth) = cli.history_depth {
        config.history_depth = depth;
    }

    Ok(AppContext {
        api: RoloApi::new(Session::from_config(&config), config_dir),
    })
}

/// Run one shell line. Request failures are reported and the list re-rendered.
fn execute(ctx: &mut AppContext, line: &str) -> Flow {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Flow::Continue,
        Err(e) => {
            print_warning(e.to_string().trim_end());
            return Flow::Continue;
        }
    };

    if command == ShellCommand::Quit {
        return Flow::Quit;
    }

    if let Err(e) = dispatch(ctx, command) {
        tracing::debug!(error = %e, "request failed");
        print_warning(&e.to_string());
        if let Err(e) = handle_list(ctx) {
            print_warning(&e.to_string());
        }
    }
    Flow::Continue
}

fn dispatch(ctx: &mut AppContext, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Add { at, name } => handle_add(ctx, at, name.join(" ")),
        ShellCommand::Insert { index, name } => handle_add(ctx, Some(index), name.join(" ")),
        ShellCommand::Delete { index } => handle_delete(ctx, &index),
        ShellCommand::Undo => handle_undo(ctx),
        ShellCommand::Redo => handle_redo(ctx),
        ShellCommand::List => handle_list(ctx),
        ShellCommand::Search { query } => handle_search(ctx, &query.join(" ")),
        ShellCommand::Lookup { name } => handle_lookup(ctx, &name.join(" ")),
        ShellCommand::History => handle_history(ctx),
        ShellCommand::Config { key, value } => handle_config(ctx, key, value),
        ShellCommand::Help => {
            print!("{}", get_shell_help());
            Ok(())
        }
        ShellCommand::Quit => Ok(()),
    }
}

fn handle_add(ctx: &mut AppContext, at: Option<String>, name: String) -> Result<()> {
    let result = match at {
        Some(index) => ctx.api.insert_contact(&index, &name)?,
        None => ctx.api.add_contact(&name)?,
    };
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_delete(ctx: &mut AppContext, index: &str) -> Result<()> {
    let result = ctx.api.delete_contact(index)?;
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_undo(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.undo()?;
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_redo(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.redo()?;
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    if let Some(view) = &result.view {
        print_view(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search_contacts(query)?;
    print_hits(&result.hits);
    print_messages(&result.messages);
    Ok(())
}

fn handle_lookup(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.lookup_contact(name)?;
    print_matches(&result.matches);
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.history()?;
    if let Some(history) = &result.history {
        print_history(history);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config, result.database.as_ref());
    }
    print_messages(&result.messages);
    Ok(())
}
