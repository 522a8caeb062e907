use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};

/// Which side of an entry an edit touches, with its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    PunchIn(DateTime<Utc>),
    PunchOut(DateTime<Utc>),
}

impl EntryField {
    /// Build a `PunchIn` edit from user input.
    pub fn punch_in(value: &str) -> AppResult<Self> {
        Ok(Self::PunchIn(parse_value(value)?))
    }

    /// Build a `PunchOut` edit from user input.
    pub fn punch_out(value: &str) -> AppResult<Self> {
        Ok(Self::PunchOut(parse_value(value)?))
    }

    pub fn apply(self, entry: &mut Entry) {
        match self {
            EntryField::PunchIn(ts) => entry.punch_in = ts,
            EntryField::PunchOut(ts) => entry.punch_out = Some(ts),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryField::PunchIn(_) => "punch in",
            EntryField::PunchOut(_) => "punch out",
        }
    }
}

fn parse_value(value: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overwrites_only_the_selected_side() {
        let mut e = Entry::closed(
            "2024-01-01T09:00:00Z".parse().unwrap(),
            "2024-01-01T17:00:00Z".parse().unwrap(),
        );

        EntryField::punch_out("2024-01-01T18:15:00Z")
            .unwrap()
            .apply(&mut e);

        assert_eq!(e.punch_in_str(), "09:00:00");
        assert_eq!(e.punch_out_str(), "18:15:00");
    }

    #[test]
    fn unparsable_value_is_rejected() {
        let err = EntryField::punch_in("yesterday-ish").unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp(v) if v == "yesterday-ish"));
    }
}
