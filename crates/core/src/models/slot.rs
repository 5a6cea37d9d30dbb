use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three fixed day-periods of a timetable.
///
/// The declaration order is the display order (and the sort order used when
/// flattening a month); it carries no other semantic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    /// All periods in canonical display order.
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    /// The period-name key used in raw week documents.
    pub fn wire_name(self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }

    /// Parses a raw document key. Unknown keys yield `None` and are skipped
    /// by grid construction.
    pub fn from_wire(name: &str) -> Option<Period> {
        match name {
            "morning" => Some(Period::Morning),
            "afternoon" => Some(Period::Afternoon),
            "evening" => Some(Period::Evening),
            _ => None,
        }
    }
}

/// The kind of class occupying a slot.
///
/// `Empty` is a sentinel meaning "no class here", not an absent array
/// element: every grid cell always holds a full-length slot list, with
/// unused capacity represented by `Empty`-typed slots. Every mutation
/// preserves this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    #[default]
    Empty,
    Theory,
    Practice,
    Online,
    Exam,
    Pause,
}

impl SlotType {
    /// Lenient wire parsing: unknown or missing type strings degrade to
    /// `Empty` rather than failing the whole document.
    pub fn from_wire(raw: &str) -> SlotType {
        match raw {
            "theory" => SlotType::Theory,
            "practice" => SlotType::Practice,
            "online" => SlotType::Online,
            "exam" => SlotType::Exam,
            "pause" => SlotType::Pause,
            _ => SlotType::Empty,
        }
    }

    /// The type string used in raw week documents.
    pub fn wire_name(self) -> &'static str {
        match self {
            SlotType::Empty => "empty",
            SlotType::Theory => "theory",
            SlotType::Practice => "practice",
            SlotType::Online => "online",
            SlotType::Exam => "exam",
            SlotType::Pause => "pause",
        }
    }

    pub fn is_empty(self) -> bool {
        self == SlotType::Empty
    }
}

/// One schedulable unit within a (period, day) cell.
///
/// `schedule_id` is the system-wide unique identifier assigned by the
/// collaborator; it is `Some` exactly when the slot holds a class. A slot's
/// date, period and index are not stored here; they are derived from the
/// slot's position in its grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub slot_type: SlotType,
    pub schedule_id: Option<Uuid>,
    pub course_id: Option<String>,
    pub title: String,
    pub teacher_name: String,
    pub lesson_label: String,
    /// Room name for on-site classes, join URL for online ones.
    pub location: String,
}

impl Slot {
    /// The `Empty` sentinel placeholder.
    pub fn empty() -> Slot {
        Slot::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_type.is_empty()
    }
}
