//! Core queue structures, ordering, and offer matching.

pub mod audit;
pub mod error;
pub mod job;
pub mod job_queue;
pub mod launcher;
pub mod matcher;
pub mod offer;
pub mod profile;
pub mod scheduler;

pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink};
pub use error::{AppResult, QueueError};
pub use job::{CleanPolicy, Dispatch, Job, JobId, TaskRecord, WorkerCleanupInfo};
pub use job_queue::JobQueue;
pub use launcher::Launcher;
pub use matcher::match_offer;
pub use offer::ResourceOffer;
pub use profile::{dispatch_order, ProfileKey, ResourceProfile};
pub use scheduler::OfferScheduler;
