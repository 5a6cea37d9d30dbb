use std::collections::BTreeMap;

use chrono::NaiveDate;
use classgrid_core::models::grid::{SlotGrid, DEFAULT_SLOT_CAPACITY};
use classgrid_core::models::slot::{Period, Slot, SlotType};
use classgrid_core::models::wire::{RawSlotRecord, RawWeekDocument};
use classgrid_engine::grid::build_grid;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid test date")
}

fn record(slot_type: &str, course: &str) -> RawSlotRecord {
    RawSlotRecord {
        id: Some(Uuid::new_v4()),
        slot_type: slot_type.to_string(),
        course_id: Some(course.to_string()),
        title: Some(format!("{course} class")),
        ..RawSlotRecord::default()
    }
}

#[test]
fn test_missing_document_fails_open() {
    let grid = build_grid(anchor(), None);
    assert_eq!(grid, SlotGrid::all_empty(anchor()));
}

#[test]
fn test_ragged_columns_are_padded_to_uniform_length() {
    let mut doc = BTreeMap::new();
    doc.insert(
        "morning".to_string(),
        vec![
            vec![
                record("theory", "algo-101"),
                record("practice", "algo-101"),
                record("exam", "db-201"),
            ],
            vec![record("theory", "db-201")],
        ],
    );

    let grid = build_grid(anchor(), Some(RawWeekDocument(doc)));

    // The longest sibling sets the length for every morning column
    for day in 0..7 {
        assert_eq!(grid.column(Period::Morning, day).len(), 3);
    }
    // Day 1 keeps its real slot, padded with sentinels
    let monday_tuesday = grid.column(Period::Morning, 1);
    assert_eq!(monday_tuesday[0].slot_type, SlotType::Theory);
    assert!(monday_tuesday[1].is_empty());
    assert!(monday_tuesday[2].is_empty());

    // Periods absent from the document default to the conventional capacity
    for day in 0..7 {
        let column = grid.column(Period::Afternoon, day);
        assert_eq!(column.len(), DEFAULT_SLOT_CAPACITY);
        assert!(column.iter().all(Slot::is_empty));
    }
}

#[test]
fn test_unknown_period_keys_are_skipped() {
    let mut doc = BTreeMap::new();
    doc.insert("night".to_string(), vec![vec![record("theory", "algo-101")]]);
    doc.insert("evening".to_string(), vec![vec![record("exam", "db-201")]]);

    let grid = build_grid(anchor(), Some(RawWeekDocument(doc)));

    assert_eq!(grid.column(Period::Evening, 0)[0].slot_type, SlotType::Exam);
    // The unknown key contributed nothing anywhere
    let total: usize = grid.iter().filter(|(_, _, _, s)| !s.is_empty()).count();
    assert_eq!(total, 1);
}

#[test]
fn test_short_week_is_padded_to_seven_days() {
    let mut doc = BTreeMap::new();
    doc.insert("morning".to_string(), vec![vec![record("theory", "algo-101")]]);

    let grid = build_grid(anchor(), Some(RawWeekDocument(doc)));

    for day in 1..7 {
        assert!(grid.column(Period::Morning, day).iter().all(Slot::is_empty));
    }
}
