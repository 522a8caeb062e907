use crate::core::ledger::TimeLedger;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::{read_json, write_json};
use crate::export::model::EntryExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::date_range::DateRange;
use crate::models::entry::Entry;
use crate::ui::messages::warning;
use crate::utils::path::ensure_parent;
use std::path::Path;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the entries inside `range`. Returns how many were written.
    pub fn export(
        ledger: &TimeLedger,
        format: ExportFormat,
        path: &Path,
        range: &DateRange,
        force: bool,
    ) -> AppResult<usize> {
        let selected = ledger.filter_by_date_range(range);

        if selected.is_empty() {
            warning(format!("No time entries found ({range})."));
            return Ok(0);
        }

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        match format {
            ExportFormat::Json => {
                let entries: Vec<Entry> = selected.iter().map(|(_, e)| **e).collect();
                write_json(path, &entries)?;
            }
            ExportFormat::Csv => {
                let rows: Vec<EntryExport> = selected
                    .iter()
                    .map(|(i, e)| EntryExport::from_entry(*i, e, ledger.rate()))
                    .collect();
                write_csv(path, &rows)?;
            }
        }

        debug!(format = format.as_str(), count = selected.len(), "export written");
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(selected.len())
    }

    /// Append the closed entries of a JSON export to the ledger.
    /// Returns `(imported, skipped_open)`.
    pub fn import(ledger: &mut TimeLedger, path: &Path) -> AppResult<(usize, usize)> {
        let (closed, open): (Vec<Entry>, Vec<Entry>) =
            read_json(path)?.into_iter().partition(|e| !e.is_open());

        let imported = ledger.extend(closed);
        debug!(imported, skipped = open.len(), "import done");
        Ok((imported, open.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::db::memory::MemoryStore;
    use crate::db::store::{ENTRIES_KEY, PersistentStore};

    fn ledger(entries: &[Entry]) -> TimeLedger {
        let mut store = MemoryStore::new();
        store.save(ENTRIES_KEY, entries).unwrap();
        let clock = FixedClock("2024-02-01T12:00:00Z".parse().unwrap());
        TimeLedger::load(Box::new(store), Box::new(clock), 15.0)
    }

    #[test]
    fn json_export_feeds_import() {
        let path = std::env::temp_dir().join("punchclock_unit_export.json");
        let _ = std::fs::remove_file(&path);

        let a = Entry::closed(
            "2024-01-01T09:00:00Z".parse().unwrap(),
            "2024-01-01T10:00:00Z".parse().unwrap(),
        );
        let b = Entry::closed(
            "2024-01-20T09:00:00Z".parse().unwrap(),
            "2024-01-20T11:00:00Z".parse().unwrap(),
        );
        let source = ledger(&[a, b]);
        let written = ExportLogic::export(
            &source,
            ExportFormat::Json,
            &path,
            &DateRange::all_time(),
            true,
        )
        .unwrap();
        assert_eq!(written, 2);

        let mut target = ledger(&[]);
        let (imported, skipped) = ExportLogic::import(&mut target, &path).unwrap();
        assert_eq!((imported, skipped), (2, 0));
        assert_eq!(target.entries(), &[a, b]);
    }

    #[test]
    fn import_skips_open_entries() {
        let path = std::env::temp_dir().join("punchclock_unit_import_open.json");
        std::fs::write(
            &path,
            r#"[{"punchIn":"2024-01-01T09:00:00.000Z","punchOut":"2024-01-01T10:00:00.000Z"},
                {"punchIn":"2024-01-02T09:00:00.000Z","punchOut":null}]"#,
        )
        .unwrap();

        let mut target = ledger(&[]);
        let (imported, skipped) = ExportLogic::import(&mut target, &path).unwrap();
        assert_eq!((imported, skipped), (1, 1));
    }
}
