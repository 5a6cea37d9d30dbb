//! Month projection: fan-out per-week fetches, fan-in into a sorted,
//! deduplicated per-date entry collection.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use classgrid_core::models::calendar::CalendarEntry;
use classgrid_core::models::grid::SlotGrid;
use classgrid_core::models::slot::Period;
use classgrid_core::models::viewer::Visibility;
use classgrid_core::week::week_anchor;
use classgrid_provider::ScheduleProvider;
use futures::future::join_all;

use crate::grid::build_grid;

/// First and last calendar dates of a month. `None` for an invalid
/// year/month pair, which projects to an empty month rather than failing.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first - Duration::days(1)))
}

/// The minimal set of Monday anchors whose weeks cover the month.
///
/// Starts at the anchor of the month's first day and steps a week at a time
/// for as long as the anchor still falls on or before the month's last day;
/// that always yields at least one anchor and always covers the final
/// partial week.
pub fn month_anchors(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };
    let mut anchors = Vec::new();
    let mut anchor = week_anchor(first);
    while anchor <= last {
        anchors.push(anchor);
        anchor += Duration::days(7);
    }
    anchors
}

/// Flattens fetched week grids into month entries.
///
/// Each slot's true calendar date is resolved from the grid anchor's own
/// Monday (recomputed defensively in case the anchor was fed from calendar
/// math and is not itself a Monday) plus the day offset. Out-of-month dates
/// are discarded, `Empty` slots skipped, and the visibility predicate
/// applied inline so redacted slots never reach the output.
///
/// Entries are keyed by `(date, period, slot_index)`; if two grids describe
/// the same position (weeks straddling a month boundary), the later grid
/// wins deterministically. In practice both carry identical data, so the
/// dedup is a safety net, not a primary mechanism. The returned collection
/// is sorted ascending by date, then period display order, then slot index.
pub fn collect_entries(
    grids: &[SlotGrid],
    first: NaiveDate,
    last: NaiveDate,
    visibility: &Visibility,
) -> Vec<CalendarEntry> {
    let mut entries: BTreeMap<(NaiveDate, Period, usize), CalendarEntry> = BTreeMap::new();
    for grid in grids {
        let monday = week_anchor(grid.anchor);
        for (period, day_index, slot_index, slot) in grid.iter() {
            if slot.is_empty() {
                continue;
            }
            if !visibility.allows(slot.course_id.as_deref()) {
                continue;
            }
            let date = monday + Duration::days(day_index as i64);
            if date < first || date > last {
                continue;
            }
            entries.insert(
                (date, period, slot_index),
                CalendarEntry {
                    date,
                    period,
                    day_index,
                    slot_index,
                    slot: slot.clone(),
                },
            );
        }
    }
    entries.into_values().collect()
}

/// Projects a whole month for one visibility predicate.
///
/// All week fetches are issued concurrently and aggregation starts only
/// after every fetch has settled; that fan-in is the sole ordering guarantee
/// the pipeline relies on. An individual failed fetch is logged and
/// substituted with an all-empty week (fail-open) instead of aborting the
/// month.
pub async fn project_month(
    provider: &dyn ScheduleProvider,
    year: i32,
    month: u32,
    visibility: &Visibility,
) -> Vec<CalendarEntry> {
    let Some((first, last)) = month_bounds(year, month) else {
        tracing::warn!("invalid month {}-{}, projecting empty", year, month);
        return Vec::new();
    };

    let anchors = month_anchors(year, month);
    let fetches = anchors.iter().map(|anchor| provider.fetch_week(*anchor));
    let results = join_all(fetches).await;

    let grids: Vec<SlotGrid> = anchors
        .iter()
        .zip(results)
        .map(|(anchor, result)| {
            let raw = match result {
                Ok(document) => Some(document),
                Err(err) => {
                    tracing::warn!("week fetch for {} failed, serving empty: {}", anchor, err);
                    None
                }
            };
            build_grid(*anchor, raw)
        })
        .collect();

    collect_entries(&grids, first, last, visibility)
}
