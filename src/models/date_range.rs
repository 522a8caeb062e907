use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive date filter; a missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Named quick filters, also used as the configured default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePreset {
    #[default]
    Today,
    Week,
    Month,
    All,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn today(today: NaiveDate) -> Self {
        Self::new(Some(today), Some(today))
    }

    /// From the Sunday on or before `today` up to `today`.
    pub fn this_week(today: NaiveDate) -> Self {
        let back = today.weekday().num_days_from_sunday() as i64;
        Self::new(Some(today - Duration::days(back)), Some(today))
    }

    pub fn this_month(today: NaiveDate) -> Self {
        Self::new(today.with_day(1), Some(today))
    }

    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn from_preset(preset: RangePreset, today: NaiveDate) -> Self {
        match preset {
            RangePreset::Today => Self::today(today),
            RangePreset::Week => Self::this_week(today),
            RangePreset::Month => Self::this_month(today),
            RangePreset::All => Self::all_time(),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(s), Some(e)) => write!(f, "from {} to {}", s, e),
            (Some(s), None) => write!(f, "from {} onwards", s),
            (None, Some(e)) => write!(f, "up to {}", e),
            (None, None) => write!(f, "all time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = DateRange::new(Some(d("2024-01-02")), Some(d("2024-01-04")));
        assert!(!r.contains(d("2024-01-01")));
        assert!(r.contains(d("2024-01-02")));
        assert!(r.contains(d("2024-01-04")));
        assert!(!r.contains(d("2024-01-05")));
    }

    #[test]
    fn open_sides_match_everything() {
        assert!(DateRange::new(Some(d("2024-01-02")), None).contains(d("2099-12-31")));
        assert!(DateRange::new(None, Some(d("2024-01-02"))).contains(d("1999-01-01")));
        assert!(DateRange::all_time().contains(d("2024-06-15")));
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-10 is a Wednesday
        let r = DateRange::this_week(d("2024-01-10"));
        assert_eq!(r.start, Some(d("2024-01-07")));
        assert_eq!(r.end, Some(d("2024-01-10")));

        let sunday = DateRange::this_week(d("2024-01-07"));
        assert_eq!(sunday.start, Some(d("2024-01-07")));
    }

    #[test]
    fn month_starts_on_the_first() {
        let r = DateRange::this_month(d("2024-02-29"));
        assert_eq!(r.start, Some(d("2024-02-01")));
        assert_eq!(r.end, Some(d("2024-02-29")));
    }

    #[test]
    fn describes_itself() {
        assert_eq!(
            DateRange::new(Some(d("2024-01-01")), None).to_string(),
            "from 2024-01-01 onwards"
        );
        assert_eq!(
            DateRange::new(None, Some(d("2024-01-01"))).to_string(),
            "up to 2024-01-01"
        );
        assert_eq!(DateRange::all_time().to_string(), "all time");
    }
}
