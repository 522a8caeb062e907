use serde::Serialize;
use std::fmt;

/// Hours/minutes breakdown of a worked interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl WorkDuration {
    /// Split a whole-minute count; floors toward negative infinity so that
    /// `hours * 60 + minutes` always gives back the input.
    pub fn from_minutes(total: i64) -> Self {
        Self {
            hours: total.div_euclid(60),
            minutes: total.rem_euclid(60),
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Aggregates over a filtered set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub entries: usize,
    pub total_minutes: i64,
    pub total_earnings: f64,
    pub today_minutes: i64,
    pub today_earnings: f64,
}

impl Summary {
    pub fn total_hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }

    pub fn today_hours(&self) -> f64 {
        self.today_minutes as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_round_trips_minutes() {
        for m in [0, 1, 59, 60, 61, 510, -1, -61] {
            assert_eq!(WorkDuration::from_minutes(m).total_minutes(), m);
        }
        assert_eq!(WorkDuration::from_minutes(510).to_string(), "8h 30m");
    }
}
