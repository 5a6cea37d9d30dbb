//! Demo binary: seeds the in-memory timetable service and prints one month
//! through the projection pipeline, once as admin and once as a student.

mod config;

use std::sync::Arc;

use chrono::NaiveDate;
use classgrid_core::models::calendar::CalendarCell;
use classgrid_core::models::mutation::{SlotAddress, SlotDraft};
use classgrid_core::models::slot::{Period, SlotType};
use classgrid_core::models::viewer::{Role, Viewer};
use classgrid_engine::ScheduleEngine;
use classgrid_provider::memory::MemoryProvider;
use color_eyre::eyre::{eyre, Result};
use config::DemoConfig;
use dotenv::dotenv;
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = DemoConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let provider = Arc::new(MemoryProvider::new());
    let student_id = seed_demo_month(&provider, config.year, config.month).await?;

    let engine = ScheduleEngine::new(provider);

    let admin = Viewer {
        id: Uuid::new_v4(),
        role: Role::Admin,
    };
    let student = Viewer {
        id: student_id,
        role: Role::Student,
    };

    for viewer in [admin, student] {
        let view = engine.month_view(config.year, config.month, viewer).await;
        info!(
            "{:?} sees {} scheduled classes in {}-{:02}",
            viewer.role,
            view.entries_by_date.values().map(Vec::len).sum::<usize>(),
            config.year,
            config.month
        );
        print_calendar(&view.calendar);
    }

    Ok(())
}

/// Places a handful of classes across the configured month and returns the
/// id of a student enrolled in one course.
async fn seed_demo_month(
    provider: &Arc<MemoryProvider>,
    year: i32,
    month: u32,
) -> Result<Uuid> {
    use classgrid_provider::ScheduleProvider;

    let class = |course: &str, slot_type: SlotType, title: &str| SlotDraft {
        course_id: course.to_string(),
        slot_type,
        title: title.to_string(),
        teacher_name: "R. Hartley".to_string(),
        lesson_label: "Lecture".to_string(),
        location: "B-204".to_string(),
    };
    let day = |d: u32| {
        NaiveDate::from_ymd_opt(year, month, d)
            .ok_or_else(|| eyre!("invalid demo month {year}-{month}"))
    };

    for (date, period, index, course, slot_type) in [
        (day(4)?, Period::Morning, 0, "algo-101", SlotType::Theory),
        (day(4)?, Period::Morning, 1, "db-201", SlotType::Practice),
        (day(12)?, Period::Afternoon, 0, "algo-101", SlotType::Online),
        (day(21)?, Period::Evening, 0, "db-201", SlotType::Exam),
    ] {
        provider
            .submit_assign(
                SlotAddress {
                    date,
                    period,
                    slot_index: index,
                },
                class(course, slot_type, course),
            )
            .await?;
    }

    let student_id = Uuid::new_v4();
    provider.set_membership(student_id, ["algo-101"]).await;
    Ok(student_id)
}

fn print_calendar(cells: &[CalendarCell]) {
    println!("Mon  Tue  Wed  Thu  Fri  Sat  Sun");
    for row in cells.chunks(7) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => "  . ".to_string(),
                CalendarCell::Day {
                    date,
                    schedule_count,
                    ..
                } => {
                    if *schedule_count > 0 {
                        format!("{:>2}*{}", date.format("%d"), schedule_count)
                    } else {
                        format!("{:>2}  ", date.format("%d"))
                    }
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}
