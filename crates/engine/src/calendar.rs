//! The 42-cell month summary grid.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use classgrid_core::color::SlotColor;
use classgrid_core::models::calendar::{CalendarCell, CalendarEntry, CALENDAR_CELLS};
use classgrid_core::week::day_index;

use crate::project::month_bounds;

/// Builds the fixed 6×7 month view.
///
/// Leading blanks cover the Monday-adjusted weekday of day 1, then one cell
/// per calendar day, then trailing blanks to exactly [`CALENDAR_CELLS`].
/// The fixed size is a display contract: callers rely on exactly 6 rows of
/// 7 regardless of month length.
///
/// A day's `dominant_color` is the color of its first entry in the input's
/// (period, slot index) order, which makes the earliest period win and,
/// within a period, the lowest slot index. Days without entries get the
/// neutral color. `entries` must already be sorted the way
/// [`collect_entries`](crate::project::collect_entries) returns them.
pub fn build_calendar(year: i32, month: u32, entries: &[CalendarEntry]) -> Vec<CalendarCell> {
    let mut cells = Vec::with_capacity(CALENDAR_CELLS);

    let Some((first, last)) = month_bounds(year, month) else {
        cells.resize(CALENDAR_CELLS, CalendarCell::Blank);
        return cells;
    };

    for _ in 0..day_index(first) {
        cells.push(CalendarCell::Blank);
    }

    let day_count = (last - first).num_days() + 1;
    for offset in 0..day_count {
        let date = first + Duration::days(offset);
        let schedule_count = entries.iter().filter(|e| e.date == date).count();
        let dominant_color = entries
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.slot.slot_type.color())
            .unwrap_or(SlotColor::Neutral);
        cells.push(CalendarCell::Day {
            date,
            schedule_count,
            dominant_color,
        });
    }

    cells.resize(CALENDAR_CELLS, CalendarCell::Blank);
    cells
}

/// Groups sorted month entries by their calendar date. Within each date the
/// projector's (period, slot index) ordering is preserved.
pub fn entries_by_date(entries: Vec<CalendarEntry>) -> BTreeMap<NaiveDate, Vec<CalendarEntry>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<CalendarEntry>> = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date).or_default().push(entry);
    }
    by_date
}
