use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One punch-in / punch-out record.
///
/// Serialized as `{"punchIn": "...", "punchOut": "..." | null}`, the same
/// shape stored under the `timeEntries` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub punch_in: DateTime<Utc>,
    #[serde(default)]
    pub punch_out: Option<DateTime<Utc>>,
}

impl Entry {
    /// A freshly opened entry (no punch-out yet).
    pub fn open(punch_in: DateTime<Utc>) -> Self {
        Self {
            punch_in,
            punch_out: None,
        }
    }

    pub fn closed(punch_in: DateTime<Utc>, punch_out: DateTime<Utc>) -> Self {
        Self {
            punch_in,
            punch_out: Some(punch_out),
        }
    }

    pub fn is_open(&self) -> bool {
        self.punch_out.is_none()
    }

    /// UTC calendar date of the punch-in, used for range filtering.
    pub fn date(&self) -> NaiveDate {
        self.punch_in.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.punch_in.format("%Y-%m-%d").to_string()
    }

    pub fn punch_in_str(&self) -> String {
        self.punch_in.format("%H:%M:%S").to_string()
    }

    pub fn punch_out_str(&self) -> String {
        self.punch_out
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }
}
