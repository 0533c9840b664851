//! Builders to construct schedulers from configuration.

pub mod scheduler_builder;

pub use scheduler_builder::{build_in_memory_scheduler, build_queue, build_scheduler};
