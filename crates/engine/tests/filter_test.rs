use std::collections::BTreeMap;

use chrono::NaiveDate;
use classgrid_core::models::slot::{Period, SlotType};
use classgrid_core::models::viewer::Visibility;
use classgrid_core::models::wire::{RawSlotRecord, RawWeekDocument};
use classgrid_engine::filter::filter_grid;
use classgrid_engine::grid::build_grid;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn record(slot_type: &str, course: Option<&str>) -> RawSlotRecord {
    RawSlotRecord {
        id: Some(Uuid::new_v4()),
        slot_type: slot_type.to_string(),
        course_id: course.map(str::to_string),
        ..RawSlotRecord::default()
    }
}

/// Monday holds an authorized theory class, Tuesday an unauthorized one,
/// Wednesday a malformed record with no course id.
fn sample_grid() -> classgrid_core::models::grid::SlotGrid {
    let mut doc = BTreeMap::new();
    doc.insert(
        "morning".to_string(),
        vec![
            vec![record("theory", Some("algo-101"))],
            vec![record("practice", Some("db-201"))],
            vec![record("online", None)],
        ],
    );
    build_grid(
        NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid test date"),
        Some(RawWeekDocument(doc)),
    )
}

#[test]
fn test_admin_grid_is_unchanged() {
    let grid = sample_grid();
    assert_eq!(filter_grid(&grid, &Visibility::All), grid);
}

#[test]
fn test_unauthorized_slots_are_redacted_in_place() {
    let grid = sample_grid();
    let filtered = filter_grid(&grid, &Visibility::courses(["algo-101"]));

    // Authorized slot survives untouched
    assert_eq!(
        filtered.column(Period::Morning, 0)[0],
        grid.column(Period::Morning, 0)[0]
    );
    // Unauthorized and malformed slots degrade to the sentinel
    assert!(filtered.column(Period::Morning, 1)[0].is_empty());
    assert!(filtered.column(Period::Morning, 2)[0].is_empty());

    // Shape is preserved everywhere
    for period in Period::ALL {
        for day in 0..7 {
            assert_eq!(
                filtered.column(period, day).len(),
                grid.column(period, day).len()
            );
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let grid = sample_grid();
    let visibility = Visibility::courses(["algo-101"]);

    let once = filter_grid(&grid, &visibility);
    let twice = filter_grid(&once, &visibility);
    assert_eq!(once, twice);
}

#[test]
fn test_empty_membership_redacts_everything() {
    let grid = sample_grid();
    let filtered = filter_grid(&grid, &Visibility::courses(Vec::<String>::new()));
    assert!(filtered.iter().all(|(_, _, _, slot)| slot.is_empty()));
}

#[test]
fn test_redacted_slot_keeps_no_identifying_fields() {
    let grid = sample_grid();
    let filtered = filter_grid(&grid, &Visibility::courses(["algo-101"]));

    let redacted = &filtered.column(Period::Morning, 1)[0];
    assert_eq!(redacted.slot_type, SlotType::Empty);
    assert_eq!(redacted.schedule_id, None);
    assert_eq!(redacted.course_id, None);
}
