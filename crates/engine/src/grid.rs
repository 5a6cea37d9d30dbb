//! Week-grid construction from raw documents.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use classgrid_core::models::grid::{DayColumn, SlotGrid, DEFAULT_SLOT_CAPACITY};
use classgrid_core::models::slot::{Period, Slot};
use classgrid_core::models::wire::RawWeekDocument;
use classgrid_core::week::DAYS_PER_WEEK;

/// Builds one week's [`SlotGrid`] from a raw document.
///
/// `raw == None` means the fetch failed; the result is the all-empty grid
/// (fail-open) so the calendar view stays renderable. Otherwise the document
/// is normalized: unknown period keys are skipped, missing or short day
/// entries are padded with `Empty` sentinels, and every day column within a
/// period is brought to the same length (at least the conventional capacity
/// of two) so the grid shape is uniform across the week.
pub fn build_grid(anchor: NaiveDate, raw: Option<RawWeekDocument>) -> SlotGrid {
    let Some(document) = raw else {
        tracing::debug!("no document for anchor {}, serving empty grid", anchor);
        return SlotGrid::all_empty(anchor);
    };

    let mut columns: BTreeMap<Period, [DayColumn; DAYS_PER_WEEK]> = BTreeMap::new();
    for (key, day_entries) in document.0 {
        let Some(period) = Period::from_wire(&key) else {
            tracing::debug!("skipping unknown period key {:?}", key);
            continue;
        };

        let mut days: [DayColumn; DAYS_PER_WEEK] = std::array::from_fn(|day| {
            day_entries
                .get(day)
                .map(|records| records.iter().cloned().map(|r| r.into_slot()).collect())
                .unwrap_or_default()
        });

        // Uniform length per period across the whole week
        let target = days
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(DEFAULT_SLOT_CAPACITY);
        for column in &mut days {
            column.resize(target, Slot::empty());
        }

        columns.insert(period, days);
    }

    SlotGrid::new(anchor, columns)
}
