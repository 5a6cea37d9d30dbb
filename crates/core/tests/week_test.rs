use chrono::NaiveDate;
use classgrid_core::week::{day_index, week_anchor, week_dates, DAYS_PER_WEEK};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[rstest]
#[case(date(2024, 3, 11), 0)] // Monday
#[case(date(2024, 3, 13), 2)] // Wednesday
#[case(date(2024, 3, 16), 5)] // Saturday
#[case(date(2024, 3, 17), 6)] // Sunday maps to 6, not 0
fn test_day_index_is_monday_based(#[case] day: NaiveDate, #[case] expected: usize) {
    assert_eq!(day_index(day), expected);
}

#[rstest]
#[case(date(2024, 3, 11))] // anchor itself
#[case(date(2024, 3, 14))] // midweek
#[case(date(2024, 3, 17))] // Sunday, last day of the week
fn test_week_anchor_lands_on_monday(#[case] day: NaiveDate) {
    let anchor = week_anchor(day);
    assert_eq!(anchor, date(2024, 3, 11));
    assert_eq!(day_index(anchor), 0);
}

#[test]
fn test_week_anchor_is_idempotent() {
    for offset in 0..60 {
        let day = date(2024, 1, 1) + chrono::Duration::days(offset);
        assert_eq!(week_anchor(week_anchor(day)), week_anchor(day));
    }
}

#[test]
fn test_week_dates_contains_source_date() {
    let day = date(2025, 2, 28);
    let days = week_dates(week_anchor(day));
    assert_eq!(days.len(), DAYS_PER_WEEK);
    assert!(days.contains(&day));
}

#[test]
fn test_week_dates_are_consecutive() {
    let days = week_dates(date(2024, 12, 30));
    for pair in days.windows(2) {
        assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
    }
    // Year boundary: the week runs 2024-12-30 .. 2025-01-05
    assert_eq!(days[6], date(2025, 1, 5));
}

#[test]
fn test_anchor_crosses_month_boundary() {
    // 2024-03-01 is a Friday; its week is anchored in February
    assert_eq!(week_anchor(date(2024, 3, 1)), date(2024, 2, 26));
}
