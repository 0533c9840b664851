//! Error types for queue and dispatch operations.

use thiserror::Error;

/// Errors produced by queue components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueueError {
    /// No pending job exists for the requested profile.
    #[error("empty queue")]
    EmptyQueue,
    /// A profile carried a negative or non-finite resource field.
    #[error("invalid profile: {field} = {value}")]
    InvalidProfile {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The queue already holds its configured maximum number of jobs.
    #[error("queue full: {0} jobs pending")]
    QueueFull(usize),
    /// The launcher refused or failed to take a dispatched job.
    #[error("launch failed: {0}")]
    Launch(String),
    /// The queue actor has stopped and can no longer serve requests.
    #[error("queue closed")]
    Closed,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
