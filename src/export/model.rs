use crate::core::calculator::{compute_duration, compute_earnings, entry_minutes};
use crate::models::entry::Entry;
use serde::Serialize;

/// Flat row for tabular exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub entry: usize,
    pub date: String,
    pub punch_in: String,
    pub punch_out: Option<String>,
    pub minutes: Option<i64>,
    pub duration: String,
    pub earnings: String,
}

impl EntryExport {
    /// `index` is zero-based; the exported number matches `list` output.
    pub fn from_entry(index: usize, entry: &Entry, rate: f64) -> Self {
        let minutes = entry_minutes(entry);
        Self {
            entry: index + 1,
            date: entry.date_str(),
            punch_in: entry.punch_in.to_rfc3339(),
            punch_out: entry.punch_out.map(|t| t.to_rfc3339()),
            minutes,
            duration: compute_duration(entry)
                .map(|d| d.to_string())
                .unwrap_or_default(),
            earnings: format!("{:.2}", compute_earnings(minutes.unwrap_or(0), rate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_carries_one_based_number_and_earnings() {
        let e = Entry::closed(
            "2024-01-01T09:00:00Z".parse().unwrap(),
            "2024-01-01T17:30:00Z".parse().unwrap(),
        );
        let row = EntryExport::from_entry(0, &e, 20.0);
        assert_eq!(row.entry, 1);
        assert_eq!(row.date, "2024-01-01");
        assert_eq!(row.minutes, Some(510));
        assert_eq!(row.duration, "8h 30m");
        assert_eq!(row.earnings, "170.00");
    }
}
