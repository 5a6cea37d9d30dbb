//! # ClassGrid Core
//!
//! Shared data model for the ClassGrid schedule projection engine: the weekly
//! slot grid, calendar cells, viewer visibility, week-key date math, and the
//! error taxonomy used across the workspace.
//!
//! Everything in this crate is a plain value. Grids and calendar collections
//! are immutable snapshots; transforms that appear to "modify" them always
//! build and return a new value.

/// Presentational color metadata derived from slot types
pub mod color;
/// Domain error taxonomy shared by provider and engine
pub mod errors;
/// Core data structures: slots, grids, calendar views, viewers
pub mod models;
/// Monday-anchored week-key resolution
pub mod week;
