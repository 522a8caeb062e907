//! Key/value persistence of entry lists.

use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Committed entries, in insertion order.
pub const ENTRIES_KEY: &str = "timeEntries";
/// The open entry, stored as a list of zero or one element.
pub const CURRENT_KEY: &str = "currentEntry";

pub trait PersistentStore {
    /// A missing key loads as an empty list.
    fn load(&self, key: &str) -> AppResult<Vec<Entry>>;

    fn save(&mut self, key: &str, entries: &[Entry]) -> AppResult<()>;

    /// Save several keys in order. Stores that can do so apply the whole
    /// batch atomically.
    fn save_all(&mut self, batch: &[(&str, &[Entry])]) -> AppResult<()> {
        for (key, entries) in batch {
            self.save(key, entries)?;
        }
        Ok(())
    }
}

/// Entry lists stored as JSON values in the `kv` table.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        let pool = DbPool::new(path)
            .map_err(|e| AppError::StoreUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::with_pool(pool)
    }

    pub fn with_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl PersistentStore for SqliteStore {
    fn load(&self, key: &str) -> AppResult<Vec<Entry>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, key: &str, entries: &[Entry]) -> AppResult<()> {
        upsert(&self.pool.conn, key, entries)
    }

    fn save_all(&mut self, batch: &[(&str, &[Entry])]) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        for (key, entries) in batch {
            upsert(&tx, key, entries)?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn upsert(conn: &Connection, key: &str, entries: &[Entry]) -> AppResult<()> {
    let json = serde_json::to_string(entries)?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                        updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, json, Utc::now().to_rfc3339()])?;
    Ok(())
}
