use chrono::NaiveDate;
use classgrid_core::color::SlotColor;
use classgrid_core::models::grid::{SlotGrid, DEFAULT_SLOT_CAPACITY};
use classgrid_core::models::slot::{Period, Slot, SlotType};
use classgrid_core::models::viewer::Visibility;
use classgrid_core::models::wire::{RawSlotRecord, RawWeekDocument};
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn test_period_order_is_display_order() {
    assert!(Period::Morning < Period::Afternoon);
    assert!(Period::Afternoon < Period::Evening);
    assert_eq!(Period::ALL.len(), 3);
}

#[test]
fn test_period_wire_round_trip() {
    for period in Period::ALL {
        assert_eq!(Period::from_wire(period.wire_name()), Some(period));
    }
    assert_eq!(Period::from_wire("night"), None);
}

#[test]
fn test_slot_type_lenient_parse() {
    assert_eq!(SlotType::from_wire("exam"), SlotType::Exam);
    assert_eq!(SlotType::from_wire(""), SlotType::Empty);
    assert_eq!(SlotType::from_wire("seminar"), SlotType::Empty);
}

#[test]
fn test_empty_slot_sentinel() {
    let slot = Slot::empty();
    assert!(slot.is_empty());
    assert_eq!(slot.schedule_id, None);
    assert_eq!(slot.course_id, None);
}

#[test]
fn test_all_empty_grid_shape() {
    let grid = SlotGrid::all_empty(date(2024, 3, 11));
    for period in Period::ALL {
        for day in 0..7 {
            let column = grid.column(period, day);
            assert_eq!(column.len(), DEFAULT_SLOT_CAPACITY);
            assert!(column.iter().all(Slot::is_empty));
        }
    }
}

#[test]
fn test_out_of_range_day_yields_empty_column() {
    let grid = SlotGrid::all_empty(date(2024, 3, 11));
    assert!(grid.column(Period::Morning, 7).is_empty());
    assert!(grid.slot(Period::Morning, 7, 0).is_none());
}

#[test]
fn test_grid_serialization_round_trip() {
    let grid = SlotGrid::all_empty(date(2024, 3, 11));
    let json = to_string(&grid).expect("Failed to serialize grid");
    let deserialized: SlotGrid = from_str(&json).expect("Failed to deserialize grid");
    assert_eq!(deserialized, grid);
}

#[test]
fn test_raw_record_into_slot() {
    let id = Uuid::new_v4();
    let record = RawSlotRecord {
        id: Some(id),
        slot_type: "theory".to_string(),
        course_id: Some("algo-101".to_string()),
        title: Some("Algorithms".to_string()),
        teacher: Some("R. Hartley".to_string()),
        lesson: Some("Lecture 4".to_string()),
        url: Some("B-204".to_string()),
        enrolled: 28,
    };

    let slot = record.into_slot();
    assert_eq!(slot.slot_type, SlotType::Theory);
    assert_eq!(slot.schedule_id, Some(id));
    assert_eq!(slot.course_id.as_deref(), Some("algo-101"));
    assert_eq!(slot.title, "Algorithms");
}

#[test]
fn test_raw_record_unknown_type_degrades_to_empty() {
    let record = RawSlotRecord {
        id: Some(Uuid::new_v4()),
        slot_type: "workshop".to_string(),
        course_id: Some("algo-101".to_string()),
        ..RawSlotRecord::default()
    };

    // The sentinel invariant strips identifying fields from empty slots
    let slot = record.into_slot();
    assert!(slot.is_empty());
    assert_eq!(slot.schedule_id, None);
}

#[test]
fn test_raw_week_document_deserializes_camel_case() {
    let json = r#"{
        "morning": [[{"id": null, "type": "practice", "courseId": "db-201",
                      "title": "Databases", "teacher": "K. Osei",
                      "lesson": "Lab 2", "url": "C-110", "enrolled": 12}]]
    }"#;

    let doc: RawWeekDocument = from_str(json).expect("Failed to deserialize week document");
    let slot = doc.0["morning"][0][0].clone().into_slot();
    assert_eq!(slot.slot_type, SlotType::Practice);
    assert_eq!(slot.course_id.as_deref(), Some("db-201"));
}

#[test]
fn test_visibility_allows() {
    let all = Visibility::All;
    let some = Visibility::courses(["algo-101"]);

    assert!(all.allows(Some("anything")));
    assert!(all.allows(None));
    assert!(some.allows(Some("algo-101")));
    assert!(!some.allows(Some("db-201")));
    // Malformed slots (no course id) are visible to admin only
    assert!(!some.allows(None));
}

#[test]
fn test_color_table_is_distinct_per_type() {
    let colors = [
        SlotType::Theory.color(),
        SlotType::Practice.color(),
        SlotType::Online.color(),
        SlotType::Exam.color(),
        SlotType::Pause.color(),
    ];
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(SlotType::Empty.color(), SlotColor::Neutral);
}
