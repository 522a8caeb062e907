use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Ordered schema steps; index + 1 is the `user_version` each one leads to.
const MIGRATIONS: &[&str] = &[
    // 1: key/value table holding the serialized entry lists
    r#"
    CREATE TABLE IF NOT EXISTS kv (
        key        TEXT PRIMARY KEY,
        value      TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
];

pub fn schema_version(conn: &Connection) -> AppResult<u32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

pub fn latest_version() -> u32 {
    MIGRATIONS.len() as u32
}

/// Apply every migration newer than the database's `user_version`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than this build (v{})",
            current, latest
        )));
    }

    for (idx, sql) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = idx as u32 + 1;
        conn.execute_batch(&format!(
            "BEGIN;\n{}\nPRAGMA user_version = {};\nCOMMIT;",
            sql, version
        ))
        .map_err(|e| AppError::Migration(format!("step v{} failed: {}", version, e)))?;
        info!(version, "applied schema migration");
    }

    debug!(version = latest, "schema up to date");
    Ok(())
}
