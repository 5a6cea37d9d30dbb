use thiserror::Error;

/// Error taxonomy for the schedule engine.
///
/// Read paths (week fetches, membership fetches) recover from `Fetch` locally
/// by substituting empty data, so the calendar always renders. Write paths
/// surface `Validation` and `Conflict` verbatim to the caller; the in-memory
/// grid is never left partially mutated.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Fetch failure: {0}")]
    Fetch(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("State conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
