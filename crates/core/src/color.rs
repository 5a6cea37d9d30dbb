//! The single slot-type color table.
//!
//! Day summarization in the month view paints each day with the color of one
//! of its classes. The mapping from slot type to color lives here and only
//! here; role-specific views must not carry their own copies.

use serde::{Deserialize, Serialize};

use crate::models::slot::SlotType;

/// Presentational color for a calendar day indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotColor {
    /// No class on this day.
    Neutral,
    Blue,
    Green,
    Purple,
    Red,
    Amber,
}

impl SlotColor {
    /// CSS hex value for rendering layers.
    pub fn css(self) -> &'static str {
        match self {
            SlotColor::Neutral => "#e0e0e0",
            SlotColor::Blue => "#1e88e5",
            SlotColor::Green => "#43a047",
            SlotColor::Purple => "#8e24aa",
            SlotColor::Red => "#e53935",
            SlotColor::Amber => "#ffb300",
        }
    }
}

impl SlotType {
    /// The color representing this slot type in day summaries.
    pub fn color(self) -> SlotColor {
        match self {
            SlotType::Empty => SlotColor::Neutral,
            SlotType::Theory => SlotColor::Blue,
            SlotType::Practice => SlotColor::Green,
            SlotType::Online => SlotColor::Purple,
            SlotType::Exam => SlotColor::Red,
            SlotType::Pause => SlotColor::Amber,
        }
    }
}
