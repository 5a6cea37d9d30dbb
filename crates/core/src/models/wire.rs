//! Raw week documents as the collaborator delivers them.
//!
//! The engine is protocol-agnostic: documents arrive already parsed from
//! JSON, keyed by period name, each value an array of 7 day-entries, each
//! day-entry an array of slot records. Parsing is deliberately lenient —
//! unknown period keys are skipped and unknown type strings degrade to the
//! `Empty` sentinel — because a malformed document must never make the
//! calendar unrenderable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::{Slot, SlotType};

/// One slot record as serialized by the timetable service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSlotRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(rename = "type", default)]
    pub slot_type: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub lesson: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Enrollment indicator carried on the wire; not used by projection.
    #[serde(default)]
    pub enrolled: u32,
}

impl RawSlotRecord {
    /// Converts a wire record into a domain slot. Records whose type parses
    /// to `Empty` lose their identifying fields, keeping the sentinel
    /// invariant (`schedule_id` is `Some` iff the slot holds a class).
    pub fn into_slot(self) -> Slot {
        let slot_type = SlotType::from_wire(&self.slot_type);
        if slot_type.is_empty() {
            return Slot::empty();
        }
        Slot {
            slot_type,
            schedule_id: self.id,
            course_id: self.course_id,
            title: self.title.unwrap_or_default(),
            teacher_name: self.teacher.unwrap_or_default(),
            lesson_label: self.lesson.unwrap_or_default(),
            location: self.url.unwrap_or_default(),
        }
    }
}

/// A whole week as fetched: period name -> 7 day-entries -> slot records.
///
/// Days may be missing or ragged; grid construction normalizes the shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWeekDocument(pub BTreeMap<String, Vec<Vec<RawSlotRecord>>>);
