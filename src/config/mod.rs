//! Configuration models for the scheduler.

pub mod scheduler;

pub use scheduler::{SchedulerConfig, MAX_AUDIT_BUFFER, MAX_CHANNEL_CAPACITY};
