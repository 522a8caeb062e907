use crate::db::store::PersistentStore;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use std::collections::HashMap;

/// Session-only store, used when the database cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStore for MemoryStore {
    fn load(&self, key: &str) -> AppResult<Vec<Entry>> {
        Ok(self.data.get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &str, entries: &[Entry]) -> AppResult<()> {
        self.data.insert(key.to_string(), entries.to_vec());
        Ok(())
    }
}
