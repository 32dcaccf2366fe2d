//! User store configuration.

use serde::{Deserialize, Serialize};

/// User store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store backend: `"postgres"`, `"rest"`, or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// PostgreSQL connection URL.
    #[serde(default)]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Whether to run embedded migrations on startup.
    #[serde(default)]
    pub run_migrations: bool,
    /// REST (PostgREST-compatible) store settings.
    #[serde(default)]
    pub rest: RestStoreConfig,
    /// Rows preloaded into the in-memory store.
    #[serde(default)]
    pub memory_rows: Vec<MemoryRowSeed>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            run_migrations: false,
            rest: RestStoreConfig::default(),
            memory_rows: Vec::new(),
        }
    }
}

/// Settings for the PostgREST-compatible user store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestStoreConfig {
    /// Base URL of the REST endpoint (e.g. `https://project.example.co/rest/v1`).
    #[serde(default)]
    pub url: String,
    /// Public API key sent as the `apikey` header.
    #[serde(default)]
    pub api_key: String,
    /// Table holding user rows.
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds.
    #[serde(default = "default_rest_timeout")]
    pub timeout_seconds: u64,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            timeout_seconds: default_rest_timeout(),
        }
    }
}

/// A user row preloaded into the in-memory store.
///
/// `credits` is kept as raw JSON so that malformed values can be seeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRowSeed {
    /// User identifier.
    pub id: String,
    /// Stored credits value, if any.
    #[serde(default)]
    pub credits: Option<serde_json::Value>,
}

fn default_provider() -> String {
    "postgres".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_table() -> String {
    "users".to_string()
}

fn default_rest_timeout() -> u64 {
    10
}
