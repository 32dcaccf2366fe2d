//! PostgreSQL pool construction.
//!
//! The pool connects lazily: a database that is down at startup shows up as
//! `Lookup` errors on the first query instead of keeping the server from
//! booting.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use tutor_core::config::DatabaseConfig;
use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;

/// Parses `database.url`. Only a malformed URL is a configuration error.
pub fn connect_options(config: &DatabaseConfig) -> AppResult<PgConnectOptions> {
    config.url.parse::<PgConnectOptions>().map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("database.url is not a valid PostgreSQL URL: {e}"),
            e,
        )
    })
}

/// Builds a pool that opens connections on demand.
pub fn lazy_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    let options = connect_options(config)?;

    // Logged field by field so the password never reaches the log.
    info!(
        host = %options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or("<default>"),
        username = %options.get_username(),
        max_connections = config.max_connections,
        "PostgreSQL pool configured"
    );

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_lazy_with(options))
}
