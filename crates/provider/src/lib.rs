//! # ClassGrid Provider
//!
//! The collaborator boundary of the schedule engine. The engine never speaks
//! HTTP itself; everything it needs from the timetable service goes through
//! the [`ScheduleProvider`] trait: per-week timetable fetches, per-viewer
//! course membership, authoritative single-slot reads, and the three
//! mutation endpoints.
//!
//! The crate ships two implementations:
//!
//! - [`memory::MemoryProvider`] — a fully functional in-memory service used
//!   by tests and the demo binary, with failure injection for exercising the
//!   fail-open read paths.
//! - `MockScheduleProvider` — a `mockall` mock generated from the trait, for
//!   expectation-style tests.

/// In-memory provider implementation
pub mod memory;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use classgrid_core::errors::ScheduleResult;
use classgrid_core::models::mutation::{PlacedSlot, SlotAddress, SlotDraft, SlotPatch};
use classgrid_core::models::viewer::Role;
use classgrid_core::models::wire::RawWeekDocument;
use mockall::automock;
use uuid::Uuid;

/// Async interface to the timetable service.
///
/// Viewer identity and role are explicit arguments on every call — the
/// provider must not read ambient session state. Timeouts are the
/// implementation's concern; callers treat a timeout like any other
/// [`Fetch`](classgrid_core::errors::ScheduleError::Fetch) failure.
#[automock]
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// Fetches one week's raw timetable document, keyed by its Monday
    /// anchor date.
    async fn fetch_week(&self, anchor: NaiveDate) -> ScheduleResult<RawWeekDocument>;

    /// Fetches the set of course ids the viewer may see: enrolled courses
    /// for students, taught courses for teachers. Engine callers skip this
    /// entirely for admins.
    async fn fetch_membership(&self, viewer_id: Uuid, role: Role) -> ScheduleResult<HashSet<String>>;

    /// Authoritative re-read of a single slot by its schedule id. `None`
    /// means the id no longer exists (removed by another actor).
    async fn fetch_slot(&self, schedule_id: Uuid) -> ScheduleResult<Option<PlacedSlot>>;

    /// Places a class into an empty slot position. Returns the
    /// server-assigned schedule id.
    async fn submit_assign(&self, address: SlotAddress, draft: SlotDraft) -> ScheduleResult<Uuid>;

    /// Applies a field patch to an existing slot.
    async fn submit_edit(&self, schedule_id: Uuid, patch: SlotPatch) -> ScheduleResult<()>;

    /// Degrades the slot to the `Empty` sentinel in place; never shrinks
    /// the slot list.
    async fn submit_remove(&self, schedule_id: Uuid) -> ScheduleResult<()>;
}
