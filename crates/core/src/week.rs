//! Monday-anchored week-key resolution.
//!
//! Every week's timetable is keyed by the Monday of that week (the "anchor
//! date"). All day arithmetic in the workspace goes through this module so
//! the Sunday-based native weekday numbering is adjusted in exactly one
//! place.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of day columns in a week grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Monday-based day index for a date: 0 = Monday .. 6 = Sunday.
///
/// The native numbering is Sunday-based (0 = Sunday), so the adjustment is
/// `raw == 0 ? 6 : raw - 1`.
pub fn day_index(date: NaiveDate) -> usize {
    let raw = date.weekday().num_days_from_sunday() as usize;
    if raw == 0 { 6 } else { raw - 1 }
}

/// Returns the Monday of the week containing `date`.
///
/// Idempotent: `week_anchor(week_anchor(d)) == week_anchor(d)`.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(day_index(date) as i64)
}

/// The 7 consecutive calendar dates starting at `anchor`.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    std::array::from_fn(|offset| anchor + Duration::days(offset as i64))
}
