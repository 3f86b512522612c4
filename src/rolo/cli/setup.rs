use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo", bin_name = "rolo", version)]
#[command(about = "In-memory contact book with undo/redo", long_about = None)]
pub struct Cli {
    /// Start from these contacts instead of the configured seed
    #[arg(long = "seed", value_name = "NAME", conflicts_with = "empty")]
    pub seed: Vec<String>,

    /// Start with no contacts
    #[arg(long)]
    pub empty: bool,

    /// Maximum undo depth, 0 for unbounded (overrides config)
    #[arg(long, value_name = "N")]
    pub history_depth: Option<usize>,

    /// Directory holding config.json (defaults to $ROLO_HOME, then the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Run a shell command and exit instead of reading stdin (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(
    name = "rolo",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add a contact (at the end, or at --at N)
    #[command(visible_alias = "a")]
    Add {
        /// Position to insert at; clamped to the list bounds
        #[arg(long, allow_hyphen_values = true)]
        at: Option<String>,

        /// Contact name (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Insert a contact at a position (clamped to the list bounds)
    #[command(visible_alias = "i")]
    Insert {
        #[arg(allow_hyphen_values = true)]
        index: String,

        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Delete the contact at a position (negative counts from the end)
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },

    /// Undo the most recent change
    #[command(visible_alias = "u")]
    Undo,

    /// Redo the oldest undone change
    #[command(visible_alias = "r")]
    Redo,

    /// Show all contacts
    #[command(visible_alias = "ls")]
    List,

    /// Find contacts whose name contains the query
    #[command(visible_alias = "s")]
    Search {
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Find contacts with exactly this name, ignoring case
    Lookup {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Show pending undo and redo entries
    History,

    /// Get or set configuration (seed, history-depth, title)
    Config {
        key: Option<String>,
        value: Option<String>,
    },

    /// Show this help
    Help,

    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

/// Parse one shell line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

/// Grouped help for the shell commands
pub fn get_shell_help() -> String {
    let cmd = ShellLine::command();
    let mut output = String::new();
    output.push_str("Commands:\n");
    for sc in cmd.get_subcommands() {
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        let aliases: Vec<_> = sc.get_visible_aliases().collect();
        let name = if aliases.is_empty() {
            sc.get_name().to_string()
        } else {
            format!("{} ({})", sc.get_name(), aliases.join(", "))
        };
        output.push_str(&format!("  {:<16} {}\n", name, about));
    }
    output
}
