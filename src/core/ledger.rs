use crate::core::calculator::{compute_earnings, entry_minutes};
use crate::core::clock::Clock;
use crate::db::store::{CURRENT_KEY, ENTRIES_KEY, PersistentStore};
use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::models::entry::Entry;
use crate::models::entry_field::EntryField;
use crate::models::summary::{Summary, WorkDuration};
use crate::utils::time::minutes_between;
use tracing::{debug, warn};

/// Committed entries, the open entry and the pay rate, backed by a store.
///
/// Open entry state machine: Idle -> Open on punch-in, Open -> Idle on
/// punch-out (the entry is committed). Store failures are logged and never
/// surface as errors. A key whose stored value could not be read is never
/// written back, so the session runs in memory for that key.
pub struct TimeLedger {
    store: Box<dyn PersistentStore>,
    clock: Box<dyn Clock>,
    entries: Vec<Entry>,
    current: Option<Entry>,
    rate: f64,
    entries_readable: bool,
    current_readable: bool,
}

impl TimeLedger {
    pub fn load(store: Box<dyn PersistentStore>, clock: Box<dyn Clock>, rate: f64) -> Self {
        let loaded_entries = load_key(store.as_ref(), ENTRIES_KEY);
        let loaded_current = load_key(store.as_ref(), CURRENT_KEY);
        let entries_readable = loaded_entries.is_some();
        let current_readable = loaded_current.is_some();

        let entries = loaded_entries.unwrap_or_default();
        let current = loaded_current.unwrap_or_default().into_iter().next();

        debug!(
            entries = entries.len(),
            open = current.is_some(),
            "ledger loaded"
        );

        Self {
            store,
            clock,
            entries,
            current,
            rate: rate.max(0.0),
            entries_readable,
            current_readable,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn current(&self) -> Option<&Entry> {
        self.current.as_ref()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn punch_in(&mut self) -> AppResult<Entry> {
        if self.current.is_some() {
            return Err(AppError::AlreadyPunchedIn);
        }

        let entry = Entry::open(self.clock.now());
        self.current = Some(entry);
        self.persist(false, true);

        debug!(at = %entry.punch_in, "punched in");
        Ok(entry)
    }

    pub fn punch_out(&mut self) -> AppResult<Entry> {
        let Some(mut entry) = self.current else {
            return Err(AppError::NotPunchedIn);
        };

        entry.punch_out = Some(self.clock.now());
        self.entries.push(entry);
        self.current = None;
        self.persist(true, true);

        debug!(at = ?entry.punch_out, "punched out");
        Ok(entry)
    }

    /// Overwrite one side of a committed entry. The result is not checked
    /// for punch-out >= punch-in.
    pub fn update_entry(&mut self, index: usize, field: EntryField) -> AppResult<Entry> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(AppError::InvalidIndex(index))?;

        field.apply(entry);
        let updated = *entry;
        self.persist(true, false);

        debug!(index, field = field.label(), "entry updated");
        Ok(updated)
    }

    /// Remove a committed entry; an out-of-range index is ignored.
    pub fn delete_entry(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            debug!(index, "delete ignored, no such entry");
            return None;
        }

        let removed = self.entries.remove(index);
        self.persist(true, false);

        debug!(index, "entry deleted");
        Some(removed)
    }

    /// Append entries (e.g. from an import) and persist once.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = Entry>) -> usize {
        let before = self.entries.len();
        self.entries.extend(entries);
        let added = self.entries.len() - before;
        if added > 0 {
            self.persist(true, false);
        }
        added
    }

    /// Committed entries whose punch-in date lies in `range`, paired with
    /// their index in the full list.
    pub fn filter_by_date_range(&self, range: &DateRange) -> Vec<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| range.contains(e.date()))
            .collect()
    }

    pub fn earnings(&self, minutes: i64) -> f64 {
        compute_earnings(minutes, self.rate)
    }

    pub fn summarize(&self, range: &DateRange) -> Summary {
        let today = self.clock.now().date_naive();
        let mut summary = Summary::default();

        for (_, entry) in self.filter_by_date_range(range) {
            summary.entries += 1;

            let Some(minutes) = entry_minutes(entry) else {
                continue;
            };
            summary.total_minutes += minutes;
            summary.total_earnings += self.earnings(minutes);

            if entry.date() == today {
                summary.today_minutes += minutes;
                summary.today_earnings += self.earnings(minutes);
            }
        }

        summary
    }

    /// Running time of the open entry up to now.
    pub fn current_duration(&self) -> Option<WorkDuration> {
        self.current
            .map(|e| WorkDuration::from_minutes(minutes_between(e.punch_in, self.clock.now())))
    }

    /// Save the open entry and/or the committed list as one batch, open
    /// entry first. Keys that failed to load are skipped.
    fn persist(&mut self, entries: bool, current: bool) {
        let open: Vec<Entry> = self.current.into_iter().collect();
        let mut batch: Vec<(&str, &[Entry])> = Vec::with_capacity(2);

        if current {
            if self.current_readable {
                batch.push((CURRENT_KEY, open.as_slice()));
            } else {
                warn!(key = CURRENT_KEY, "stored value unreadable, not overwriting");
            }
        }
        if entries {
            if self.entries_readable {
                batch.push((ENTRIES_KEY, self.entries.as_slice()));
            } else {
                warn!(key = ENTRIES_KEY, "stored value unreadable, not overwriting");
            }
        }

        if batch.is_empty() {
            return;
        }
        if let Err(e) = self.store.save_all(&batch) {
            warn!(error = %e, "failed to save ledger");
        }
    }
}

fn load_key(store: &dyn PersistentStore, key: &str) -> Option<Vec<Entry>> {
    match store.load(key) {
        Ok(list) => Some(list),
        Err(e) => {
            warn!(key, error = %e, "failed to load, keeping this session in memory");
            None
        }
    }
}
