use crate::models::entry::Entry;
use crate::models::summary::WorkDuration;
use crate::utils::time::minutes_between;

/// Worked minutes of a closed entry; `None` while it is still open.
pub fn entry_minutes(entry: &Entry) -> Option<i64> {
    entry
        .punch_out
        .map(|out| minutes_between(entry.punch_in, out))
}

pub fn compute_duration(entry: &Entry) -> Option<WorkDuration> {
    entry_minutes(entry).map(WorkDuration::from_minutes)
}

pub fn compute_earnings(minutes: i64, rate: f64) -> f64 {
    if rate <= 0.0 || minutes <= 0 {
        return 0.0;
    }
    (minutes as f64 / 60.0) * rate
}
