//! Membership-based grid redaction.

use classgrid_core::models::grid::SlotGrid;
use classgrid_core::models::slot::Slot;
use classgrid_core::models::viewer::Visibility;

/// Redacts every slot the viewer is not authorized to see.
///
/// Unauthorized slots (including malformed ones with no course id) are
/// replaced by the `Empty` sentinel at the same position: shape and column
/// lengths are preserved exactly. `Visibility::All` returns the grid
/// unchanged. Pure and idempotent; filtering an already-filtered grid with
/// the same visibility yields an identical grid.
pub fn filter_grid(grid: &SlotGrid, visibility: &Visibility) -> SlotGrid {
    if matches!(visibility, Visibility::All) {
        return grid.clone();
    }
    grid.map_slots(|_, _, _, slot| {
        if slot.is_empty() || visibility.allows(slot.course_id.as_deref()) {
            slot.clone()
        } else {
            Slot::empty()
        }
    })
}
