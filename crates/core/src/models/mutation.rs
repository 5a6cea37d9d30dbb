use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::{Period, Slot, SlotType};

/// Stable address of one slot position: the calendar date, the period, and
/// the index within the (period, day) slot list. Survives edits because
/// deletion degrades slots to `Empty` instead of shrinking the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddress {
    pub date: NaiveDate,
    pub period: Period,
    pub slot_index: usize,
}

/// Payload for placing a course's class into an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDraft {
    pub course_id: String,
    pub slot_type: SlotType,
    pub title: String,
    pub teacher_name: String,
    pub lesson_label: String,
    pub location: String,
}

/// Field-level patch for editing an existing slot. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPatch {
    pub slot_type: Option<SlotType>,
    pub title: Option<String>,
    pub teacher_name: Option<String>,
    pub lesson_label: Option<String>,
    pub location: Option<String>,
}

impl SlotPatch {
    /// Applies this patch on top of an authoritative slot value.
    pub fn apply(&self, current: &Slot) -> Slot {
        Slot {
            slot_type: self.slot_type.unwrap_or(current.slot_type),
            schedule_id: current.schedule_id,
            course_id: current.course_id.clone(),
            title: self.title.clone().unwrap_or_else(|| current.title.clone()),
            teacher_name: self
                .teacher_name
                .clone()
                .unwrap_or_else(|| current.teacher_name.clone()),
            lesson_label: self
                .lesson_label
                .clone()
                .unwrap_or_else(|| current.lesson_label.clone()),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| current.location.clone()),
        }
    }
}

/// An authoritative slot record re-read by schedule id before a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSlot {
    pub schedule_id: Uuid,
    pub address: SlotAddress,
    pub slot: Slot,
}

/// The accepted outcome of a mutation request. On success the caller
/// invalidates and recomputes any open week/month view; the engine never
/// patches a rendered grid locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum MutationIntent {
    /// A class was placed; `schedule_id` is the server-assigned identifier.
    Assigned {
        address: SlotAddress,
        schedule_id: Uuid,
    },
    Edited { schedule_id: Uuid },
    /// The slot was degraded to the `Empty` sentinel; the column length is
    /// unchanged.
    Removed { schedule_id: Uuid },
}
