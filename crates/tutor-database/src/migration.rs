//! Embedded schema migrations from `migrations/`.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Versions compiled into the binary, oldest first.
pub fn embedded_versions() -> Vec<i64> {
    MIGRATOR.iter().map(|m| m.version).collect()
}

/// Brings the schema up to the newest embedded version.
pub async fn apply_pending(pool: &PgPool) -> AppResult<()> {
    let target = embedded_versions().last().copied();

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Schema migration failed: {e}"),
            e,
        )
    })?;

    info!(version = ?target, "Schema up to date");
    Ok(())
}
