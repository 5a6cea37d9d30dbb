//! Addressable slot mutation.
//!
//! All three operations follow a read-before-write discipline: the
//! authoritative state is re-fetched from the provider immediately before
//! the write, never reused from a previously rendered grid, so a stale
//! in-memory copy can never clobber a concurrent edit. On any failure the
//! caller's grids are untouched; there is no optimistic local mutation.

use classgrid_core::errors::{ScheduleError, ScheduleResult};
use classgrid_core::models::mutation::{MutationIntent, SlotAddress, SlotDraft, SlotPatch};
use classgrid_core::models::slot::SlotType;
use classgrid_core::week::{day_index, week_anchor};
use classgrid_provider::ScheduleProvider;
use uuid::Uuid;

use crate::grid::build_grid;

/// Places a course's class at an addressed slot position.
///
/// The target slot must currently hold the `Empty` sentinel; assigning over
/// an occupied slot is rejected with a `Validation` error and the caller
/// must remove the occupant explicitly first. The precondition is checked
/// against a fresh week fetch. On success the caller re-runs the whole
/// pipeline: the authoritative schedule id is server-assigned, so a local
/// patch would be guesswork.
pub async fn assign(
    provider: &dyn ScheduleProvider,
    address: SlotAddress,
    draft: SlotDraft,
) -> ScheduleResult<MutationIntent> {
    let anchor = week_anchor(address.date);
    let document = provider.fetch_week(anchor).await?;
    let grid = build_grid(anchor, Some(document));

    match grid.slot(address.period, day_index(address.date), address.slot_index) {
        Some(slot) if slot.is_empty() => {}
        Some(_) => {
            return Err(ScheduleError::Validation(
                "slot is already occupied".to_string(),
            ));
        }
        None => {
            return Err(ScheduleError::Validation(format!(
                "slot index {} out of range",
                address.slot_index
            )));
        }
    }

    let schedule_id = provider.submit_assign(address, draft).await?;
    tracing::info!(
        "assigned schedule {} at {} {:?} #{}",
        schedule_id,
        address.date,
        address.period,
        address.slot_index
    );
    Ok(MutationIntent::Assigned {
        address,
        schedule_id,
    })
}

/// Edits an existing slot by its schedule id.
///
/// Re-fetches the authoritative slot first; an id that no longer exists is
/// a `Conflict` (already removed by another actor) and nothing is written.
/// Patching the type to `Empty` is rejected: the sentinel carries no
/// schedule id, so [`remove`] is the only path to it.
pub async fn edit(
    provider: &dyn ScheduleProvider,
    schedule_id: Uuid,
    patch: SlotPatch,
) -> ScheduleResult<MutationIntent> {
    if patch.slot_type == Some(SlotType::Empty) {
        return Err(ScheduleError::Validation(
            "cannot edit a slot to the empty type; remove it instead".to_string(),
        ));
    }

    provider
        .fetch_slot(schedule_id)
        .await?
        .ok_or_else(|| stale_schedule(schedule_id))?;

    provider.submit_edit(schedule_id, patch).await?;
    tracing::info!("edited schedule {}", schedule_id);
    Ok(MutationIntent::Edited { schedule_id })
}

/// Removes a class, degrading its slot to the `Empty` sentinel in place.
/// The day's slot-list length is never reduced.
pub async fn remove(
    provider: &dyn ScheduleProvider,
    schedule_id: Uuid,
) -> ScheduleResult<MutationIntent> {
    provider
        .fetch_slot(schedule_id)
        .await?
        .ok_or_else(|| stale_schedule(schedule_id))?;

    provider.submit_remove(schedule_id).await?;
    tracing::info!("removed schedule {}", schedule_id);
    Ok(MutationIntent::Removed { schedule_id })
}

fn stale_schedule(schedule_id: Uuid) -> ScheduleError {
    ScheduleError::Conflict(format!("schedule {schedule_id} no longer exists"))
}
