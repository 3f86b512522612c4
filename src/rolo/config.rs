use crate::error::{Result, RoloError};
use crate::history::DEFAULT_HISTORY_DEPTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TITLE: &str = "Contacts";

/// Configuration for rolo, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Contacts every new session starts with
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,

    /// Maximum number of operations kept for undo (0 = unbounded)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    /// Heading shown above the contact listing
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_seed() -> Vec<String> {
    ["Alice", "Bob", "Charlie", "David", "Eve"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            history_depth: default_history_depth(),
            title: default_title(),
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RoloConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["seed", "history-depth", "title"]
    }

    /// Display value for a key, `None` for unknown keys
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed" => Some(self.seed.join(",")),
            "history-depth" => Some(self.history_depth.to_string()),
            "title" => Some(self.title.clone()),
            _ => None,
        }
    }

    /// Set a key from its string form. Seeds are comma separated; blanks are dropped.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed" => {
                self.seed = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "history-depth" => {
                self.history_depth = value.trim().parse().map_err(|_| {
                    RoloError::Config(format!("history-depth must be a number, got '{}'", value))
                })?;
            }
            "title" => self.title = value.to_string(),
            other => return Err(RoloError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

/// Connection parameters for one database server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbParams {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub database: String,
}

impl DbParams {
    fn resolve(
        prefix: &str,
        defaults: [&str; 5],
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Self {
        let [user, password, host, port, database] = defaults;
        let var = |name: &str, default: &str| {
            lookup(&format!("{}_{}", prefix, name)).unwrap_or_else(|| default.to_string())
        };
        Self {
            user: var("USER", user),
            password: var("PASSWORD", password),
            host: var("HOST", host),
            port: var("PORT", port),
            database: var("DB", database),
        }
    }

    fn masked_password(&self) -> &'static str {
        if self.password.is_empty() { "" } else { "****" }
    }
}

/// Database settings read from the environment.
///
/// Contacts live in memory only; these are resolved and displayable but no
/// connection is ever opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub postgres: DbParams,
    pub mssql: DbParams,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            postgres: DbParams::resolve(
                "POSTGRES",
                ["student", "password123", "postgres_db", "5432", "contact_db"],
                &lookup,
            ),
            mssql: DbParams::resolve(
                "MSSQL",
                ["sa", "Password123!", "mssql_db", "1433", "contact_db"],
                &lookup,
            ),
        }
    }

    pub fn postgres_url(&self) -> String {
        postgres_url(&self.postgres, &self.postgres.password)
    }

    pub fn mssql_url(&self) -> String {
        mssql_url(&self.mssql, &self.mssql.password)
    }

    /// Both URLs with passwords masked, for display
    pub fn redacted_urls(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "postgres",
                postgres_url(&self.postgres, self.postgres.masked_password()),
            ),
            ("mssql", mssql_url(&self.mssql, self.mssql.masked_password())),
        ]
    }
}

fn postgres_url(p: &DbParams, password: &str) -> String {
    format!(
        "postgresql+psycopg2://{}:{}@{}:{}/{}",
        p.user, password, p.host, p.port, p.database
    )
}

fn mssql_url(p: &DbParams, password: &str) -> String {
    format!(
        "mssql+pyodbc://{}:{}@{}:{}/{}?driver=ODBC+Driver+17+for+SQL+Server",
        p.user, password, p.host, p.port, p.database
    )
}
