//! # ClassGrid Engine
//!
//! The schedule projection pipeline: week grids, membership filtering,
//! month projection, calendar summarization, and slot mutation, behind one
//! caller-facing facade.
//!
//! ## Architecture
//!
//! Data flows leaves-first: week-key resolution feeds grid construction
//! (one grid per fetched week), the membership filter redacts per viewer,
//! the month projector fans out week fetches and fans the results back in,
//! and the calendar builder condenses the flattened entries into the fixed
//! 42-cell summary. Slot mutation operates against a single addressed slot
//! and, on success, the caller recomputes every open view from scratch.
//!
//! All computation between provider calls is synchronous over immutable
//! snapshots; concurrent pipelines never share mutable state.

/// 42-cell month summary construction
pub mod calendar;
/// Membership-based grid redaction
pub mod filter;
/// Week-grid construction and normalization
pub mod grid;
/// Addressable slot create/edit/remove
pub mod mutate;
/// Month anchor math, fan-out/fan-in projection
pub mod project;
/// Stale-projection supersession
pub mod view;

use std::sync::Arc;

use chrono::NaiveDate;
use classgrid_core::errors::ScheduleResult;
use classgrid_core::models::calendar::MonthView;
use classgrid_core::models::grid::SlotGrid;
use classgrid_core::models::mutation::{MutationIntent, SlotAddress, SlotDraft, SlotPatch};
use classgrid_core::models::viewer::{Role, Viewer, Visibility};
use classgrid_core::week::week_anchor;
use classgrid_provider::ScheduleProvider;
use uuid::Uuid;

/// The caller-facing engine surface.
///
/// Viewer context is an explicit argument on every read so the same engine
/// instance can serve any number of dashboards concurrently; nothing is
/// cached per viewer. Read paths never surface fetch errors (fail-open to
/// empty data); write paths surface `Validation` and `Conflict` verbatim.
pub struct ScheduleEngine {
    provider: Arc<dyn ScheduleProvider>,
}

impl ScheduleEngine {
    pub fn new(provider: Arc<dyn ScheduleProvider>) -> ScheduleEngine {
        ScheduleEngine { provider }
    }

    /// Resolves the viewer's visibility predicate.
    ///
    /// Admins match everything without a membership fetch. For teachers and
    /// students a failed membership fetch degrades to the empty set — the
    /// viewer sees a fully redacted grid rather than an error, consistent
    /// with the fail-open read policy.
    async fn visibility_for(&self, viewer: Viewer) -> Visibility {
        match viewer.role {
            Role::Admin => Visibility::All,
            Role::Teacher | Role::Student => {
                match self.provider.fetch_membership(viewer.id, viewer.role).await {
                    Ok(course_ids) => Visibility::courses(course_ids),
                    Err(err) => {
                        tracing::warn!(
                            "membership fetch for viewer {} failed, redacting all: {}",
                            viewer.id,
                            err
                        );
                        Visibility::courses(Vec::<String>::new())
                    }
                }
            }
        }
    }

    /// The filtered weekly grid for the week containing `date`.
    pub async fn week_view(&self, date: NaiveDate, viewer: Viewer) -> SlotGrid {
        let anchor = week_anchor(date);
        let visibility = self.visibility_for(viewer).await;
        let raw = match self.provider.fetch_week(anchor).await {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::warn!("week fetch for {} failed, serving empty: {}", anchor, err);
                None
            }
        };
        let grid = grid::build_grid(anchor, raw);
        filter::filter_grid(&grid, &visibility)
    }

    /// The full month projection: the 42-cell calendar plus the per-date
    /// entry index. Recomputed wholesale on every call.
    pub async fn month_view(&self, year: i32, month: u32, viewer: Viewer) -> MonthView {
        let visibility = self.visibility_for(viewer).await;
        let entries =
            project::project_month(self.provider.as_ref(), year, month, &visibility).await;
        let calendar = calendar::build_calendar(year, month, &entries);
        MonthView {
            year,
            month,
            calendar,
            entries_by_date: calendar::entries_by_date(entries),
        }
    }

    /// Requests placement of a class. See [`mutate::assign`].
    pub async fn request_assign(
        &self,
        address: SlotAddress,
        draft: SlotDraft,
    ) -> ScheduleResult<MutationIntent> {
        mutate::assign(self.provider.as_ref(), address, draft).await
    }

    /// Requests an edit of an existing class. See [`mutate::edit`].
    pub async fn request_edit(
        &self,
        schedule_id: Uuid,
        patch: SlotPatch,
    ) -> ScheduleResult<MutationIntent> {
        mutate::edit(self.provider.as_ref(), schedule_id, patch).await
    }

    /// Requests removal of a class. See [`mutate::remove`].
    pub async fn request_remove(&self, schedule_id: Uuid) -> ScheduleResult<MutationIntent> {
        mutate::remove(self.provider.as_ref(), schedule_id).await
    }
}
