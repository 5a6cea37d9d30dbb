//! In-memory timetable service.
//!
//! Stores whole weeks keyed by Monday anchor and serves them through the
//! [`ScheduleProvider`] interface, including last-write-wins mutations.
//! Weeks can be marked as failing to exercise the engine's fail-open read
//! paths.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use classgrid_core::errors::{ScheduleError, ScheduleResult};
use classgrid_core::models::grid::{DayColumn, DEFAULT_SLOT_CAPACITY};
use classgrid_core::models::mutation::{PlacedSlot, SlotAddress, SlotDraft, SlotPatch};
use classgrid_core::models::slot::{Period, Slot};
use classgrid_core::models::viewer::Role;
use classgrid_core::models::wire::{RawSlotRecord, RawWeekDocument};
use classgrid_core::week::{day_index, week_anchor, DAYS_PER_WEEK};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::ScheduleProvider;

type WeekStore = BTreeMap<Period, [DayColumn; DAYS_PER_WEEK]>;

fn empty_week() -> WeekStore {
    Period::ALL
        .into_iter()
        .map(|period| {
            let days: [DayColumn; DAYS_PER_WEEK] =
                std::array::from_fn(|_| vec![Slot::empty(); DEFAULT_SLOT_CAPACITY]);
            (period, days)
        })
        .collect()
}

#[derive(Default)]
struct MemoryState {
    weeks: HashMap<NaiveDate, WeekStore>,
    memberships: HashMap<Uuid, HashSet<String>>,
    failing_weeks: HashSet<NaiveDate>,
}

/// A fully functional in-memory [`ScheduleProvider`].
#[derive(Default)]
pub struct MemoryProvider {
    state: RwLock<MemoryState>,
}

impl MemoryProvider {
    pub fn new() -> MemoryProvider {
        MemoryProvider::default()
    }

    /// Registers the course ids a viewer may see.
    pub async fn set_membership<I, S>(&self, viewer_id: Uuid, course_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.write().await;
        state
            .memberships
            .insert(viewer_id, course_ids.into_iter().map(Into::into).collect());
    }

    /// Makes every `fetch_week` for this anchor fail until
    /// [`restore_week`](MemoryProvider::restore_week) is called.
    pub async fn fail_week(&self, anchor: NaiveDate) {
        self.state.write().await.failing_weeks.insert(anchor);
    }

    pub async fn restore_week(&self, anchor: NaiveDate) {
        self.state.write().await.failing_weeks.remove(&anchor);
    }
}

fn slot_to_record(slot: &Slot) -> RawSlotRecord {
    if slot.is_empty() {
        return RawSlotRecord {
            slot_type: "empty".to_string(),
            ..RawSlotRecord::default()
        };
    }
    RawSlotRecord {
        id: slot.schedule_id,
        slot_type: slot.slot_type.wire_name().to_string(),
        course_id: slot.course_id.clone(),
        title: Some(slot.title.clone()),
        teacher: Some(slot.teacher_name.clone()),
        lesson: Some(slot.lesson_label.clone()),
        url: Some(slot.location.clone()),
        enrolled: 0,
    }
}

fn week_to_document(store: &WeekStore) -> RawWeekDocument {
    let periods = store
        .iter()
        .map(|(period, days)| {
            let days = days
                .iter()
                .map(|column| column.iter().map(slot_to_record).collect())
                .collect();
            (period.wire_name().to_string(), days)
        })
        .collect();
    RawWeekDocument(periods)
}

#[async_trait]
impl ScheduleProvider for MemoryProvider {
    async fn fetch_week(&self, anchor: NaiveDate) -> ScheduleResult<RawWeekDocument> {
        let state = self.state.read().await;
        if state.failing_weeks.contains(&anchor) {
            tracing::debug!("fetch_week failing by injection: anchor={}", anchor);
            return Err(ScheduleError::Fetch(format!(
                "week {anchor} is unavailable"
            )));
        }
        let document = match state.weeks.get(&anchor) {
            Some(store) => week_to_document(store),
            None => week_to_document(&empty_week()),
        };
        Ok(document)
    }

    async fn fetch_membership(
        &self,
        viewer_id: Uuid,
        role: Role,
    ) -> ScheduleResult<HashSet<String>> {
        tracing::debug!("fetch_membership: viewer={}, role={:?}", viewer_id, role);
        let state = self.state.read().await;
        Ok(state.memberships.get(&viewer_id).cloned().unwrap_or_default())
    }

    async fn fetch_slot(&self, schedule_id: Uuid) -> ScheduleResult<Option<PlacedSlot>> {
        let state = self.state.read().await;
        for (anchor, store) in &state.weeks {
            for (period, days) in store {
                for (day, column) in days.iter().enumerate() {
                    for (slot_index, slot) in column.iter().enumerate() {
                        if slot.schedule_id == Some(schedule_id) {
                            return Ok(Some(PlacedSlot {
                                schedule_id,
                                address: SlotAddress {
                                    date: *anchor + Duration::days(day as i64),
                                    period: *period,
                                    slot_index,
                                },
                                slot: slot.clone(),
                            }));
                        }
                    }
                }
            }
        }
        Ok(None)
    }

    async fn submit_assign(
        &self,
        address: SlotAddress,
        draft: SlotDraft,
    ) -> ScheduleResult<Uuid> {
        if draft.slot_type.is_empty() {
            return Err(ScheduleError::Validation(
                "cannot assign an empty slot type".to_string(),
            ));
        }

        let anchor = week_anchor(address.date);
        let day = day_index(address.date);

        let mut state = self.state.write().await;
        let store = state.weeks.entry(anchor).or_insert_with(empty_week);
        let column = store
            .get_mut(&address.period)
            .and_then(|days| days.get_mut(day))
            .ok_or_else(|| ScheduleError::Validation("unknown period".to_string()))?;

        let slot = column.get_mut(address.slot_index).ok_or_else(|| {
            ScheduleError::Validation(format!(
                "slot index {} out of range",
                address.slot_index
            ))
        })?;
        if !slot.is_empty() {
            return Err(ScheduleError::Validation(
                "slot is already occupied".to_string(),
            ));
        }

        let schedule_id = Uuid::new_v4();
        *slot = Slot {
            slot_type: draft.slot_type,
            schedule_id: Some(schedule_id),
            course_id: Some(draft.course_id),
            title: draft.title,
            teacher_name: draft.teacher_name,
            lesson_label: draft.lesson_label,
            location: draft.location,
        };
        tracing::debug!(
            "assigned schedule {} at {} {:?} #{}",
            schedule_id,
            address.date,
            address.period,
            address.slot_index
        );
        Ok(schedule_id)
    }

    async fn submit_edit(&self, schedule_id: Uuid, patch: SlotPatch) -> ScheduleResult<()> {
        let mut state = self.state.write().await;
        for store in state.weeks.values_mut() {
            for days in store.values_mut() {
                for column in days.iter_mut() {
                    for slot in column.iter_mut() {
                        if slot.schedule_id == Some(schedule_id) {
                            *slot = patch.apply(slot);
                            tracing::debug!("edited schedule {}", schedule_id);
                            return Ok(());
                        }
                    }
                }
            }
        }
        Err(ScheduleError::Conflict(format!(
            "schedule {schedule_id} no longer exists"
        )))
    }

    async fn submit_remove(&self, schedule_id: Uuid) -> ScheduleResult<()> {
        let mut state = self.state.write().await;
        for store in state.weeks.values_mut() {
            for days in store.values_mut() {
                for column in days.iter_mut() {
                    for slot in column.iter_mut() {
                        if slot.schedule_id == Some(schedule_id) {
                            // Degrade to the sentinel; the column keeps its length
                            *slot = Slot::empty();
                            tracing::debug!("removed schedule {}", schedule_id);
                            return Ok(());
                        }
                    }
                }
            }
        }
        Err(ScheduleError::Conflict(format!(
            "schedule {schedule_id} no longer exists"
        )))
    }
}
