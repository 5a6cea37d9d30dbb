use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::slot::{Period, Slot};
use crate::week::DAYS_PER_WEEK;

/// Conventional number of concurrent slots per (period, day) cell. Columns
/// are padded up to at least this length, but callers must never assume the
/// count is exactly two.
pub const DEFAULT_SLOT_CAPACITY: usize = 2;

/// The ordered slot list for one day within one period.
pub type DayColumn = Vec<Slot>;

/// One week's timetable: each period holds 7 Monday-first day columns of
/// uniform length (for that period).
///
/// A grid is an immutable snapshot keyed by its Monday anchor date. Pure
/// transforms (filtering, projection) build new grids; nothing in this
/// workspace edits a rendered grid in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    /// Monday anchor date this week was fetched for.
    pub anchor: NaiveDate,
    columns: BTreeMap<Period, [DayColumn; DAYS_PER_WEEK]>,
}

impl SlotGrid {
    /// Builds a grid from per-period day columns. Periods missing from the
    /// map get all-empty columns at the default capacity.
    pub fn new(anchor: NaiveDate, mut columns: BTreeMap<Period, [DayColumn; DAYS_PER_WEEK]>) -> SlotGrid {
        for period in Period::ALL {
            columns
                .entry(period)
                .or_insert_with(|| std::array::from_fn(|_| empty_column()));
        }
        SlotGrid { anchor, columns }
    }

    /// The fail-open grid: every cell holds `DEFAULT_SLOT_CAPACITY` empty
    /// sentinels. Used whenever a week fetch fails so the calendar stays
    /// renderable.
    pub fn all_empty(anchor: NaiveDate) -> SlotGrid {
        SlotGrid::new(anchor, BTreeMap::new())
    }

    /// The slot list for one (period, day) cell. Out-of-range day indexes
    /// yield an empty slice, matching the defensive `slot` accessor.
    pub fn column(&self, period: Period, day_index: usize) -> &[Slot] {
        self.columns[&period]
            .get(day_index)
            .map_or(&[], Vec::as_slice)
    }

    pub fn slot(&self, period: Period, day_index: usize, slot_index: usize) -> Option<&Slot> {
        self.columns[&period].get(day_index)?.get(slot_index)
    }

    /// Iterates every slot with its (period, day, index) address, periods in
    /// display order, days Monday-first.
    pub fn iter(&self) -> impl Iterator<Item = (Period, usize, usize, &Slot)> {
        self.columns.iter().flat_map(|(period, days)| {
            days.iter().enumerate().flat_map(move |(day, column)| {
                column
                    .iter()
                    .enumerate()
                    .map(move |(index, slot)| (*period, day, index, slot))
            })
        })
    }

    /// Builds a new grid by applying `transform` to every slot. Shape and
    /// column lengths are preserved exactly.
    pub fn map_slots<F>(&self, mut transform: F) -> SlotGrid
    where
        F: FnMut(Period, usize, usize, &Slot) -> Slot,
    {
        let columns = self
            .columns
            .iter()
            .map(|(period, days)| {
                let days: [DayColumn; DAYS_PER_WEEK] = std::array::from_fn(|day| {
                    days[day]
                        .iter()
                        .enumerate()
                        .map(|(index, slot)| transform(*period, day, index, slot))
                        .collect()
                });
                (*period, days)
            })
            .collect();
        SlotGrid { anchor: self.anchor, columns }
    }
}

fn empty_column() -> DayColumn {
    vec![Slot::empty(); DEFAULT_SLOT_CAPACITY]
}
