pub mod memory;
pub mod migrate;
pub mod pool;
pub mod store;

use crate::db::memory::MemoryStore;
use crate::db::store::{PersistentStore, SqliteStore};
use std::path::Path;
use tracing::warn;

/// Open the SQLite store, or fall back to an in-memory one for this session.
pub fn open_store(path: &Path) -> Box<dyn PersistentStore> {
    match SqliteStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "store unavailable, changes will not be saved"
            );
            Box::new(MemoryStore::new())
        }
    }
}
