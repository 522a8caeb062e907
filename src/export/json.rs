use crate::errors::AppResult;
use crate::models::entry::Entry;
use std::fs;
use std::path::Path;

/// Entries in their storage shape, so the file can be imported again.
pub(crate) fn write_json(path: &Path, entries: &[Entry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

pub(crate) fn read_json(path: &Path) -> AppResult<Vec<Entry>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
