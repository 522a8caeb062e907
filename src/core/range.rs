use crate::errors::AppResult;
use crate::models::date_range::{DateRange, RangePreset};
use crate::utils::date::parse_optional_date;
use chrono::NaiveDate;

/// Turn the command-line range options into a `DateRange`.
///
/// Explicit `--from/--to` win over a preset; with neither, the configured
/// default preset applies.
pub fn resolve_range(
    from: Option<&String>,
    to: Option<&String>,
    preset: Option<RangePreset>,
    default: RangePreset,
    today: NaiveDate,
) -> AppResult<DateRange> {
    let start = parse_optional_date(from)?;
    let end = parse_optional_date(to)?;

    if start.is_some() || end.is_some() {
        return Ok(DateRange::new(start, end));
    }

    Ok(DateRange::from_preset(preset.unwrap_or(default), today))
}
