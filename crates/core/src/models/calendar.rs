use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::color::SlotColor;
use crate::models::slot::{Period, Slot};

/// Number of cells in a month view: always 6 full weeks of 7 days. This is a
/// display contract, callers rely on exactly 6 rows of 7.
pub const CALENDAR_CELLS: usize = 42;

/// A slot flattened out of its per-week grid and resolved to its full
/// calendar date.
///
/// Within one month collection no two entries share
/// `(date, period, slot_index)`; the projector's fan-in dedup guarantees it
/// even when week fetches overlap at month boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub period: Period,
    pub day_index: usize,
    pub slot_index: usize,
    pub slot: Slot,
}

/// One cell of the 42-cell month view.
///
/// Recomputed wholesale on every month navigation or membership change,
/// never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarCell {
    /// Leading or trailing padding outside the month.
    Blank,
    Day {
        date: NaiveDate,
        schedule_count: usize,
        dominant_color: SlotColor,
    },
}

impl CalendarCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }
}

/// The full month projection handed to the caller layer: the 42-cell summary
/// grid plus the per-date entry index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Always exactly [`CALENDAR_CELLS`] cells.
    pub calendar: Vec<CalendarCell>,
    pub entries_by_date: BTreeMap<NaiveDate, Vec<CalendarEntry>>,
}
