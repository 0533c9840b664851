//! # Offer Queue
//!
//! A resource-profile-aware job queue for batch schedulers that receive
//! resource offers from a cluster broker.
//!
//! Pending jobs are grouped by their [`core::ResourceProfile`] (cores, memory,
//! disk, preemptability). The distinct profiles are kept sorted from most to
//! least expensive, so when an offer arrives the scheduler can hand out the
//! hardest-to-place work first and fill what is left with smaller jobs.
//!
//! ## Key Features
//!
//! - **Profile-grouped FIFOs**: O(log P) insert, O(1) dispatch per profile
//! - **Preemptability first**: non-preemptable work is never starved by
//!   preemptable work that could have run anywhere
//! - **Greedy offer matching**: largest eligible profile first, repeated
//!   while the offer still has room
//! - **Explicit synchronization**: a mutex-guarded [`core::OfferScheduler`]
//!   or a single-writer [`runtime::QueueActor`] task
//!
//! ## Example
//!
//! ```rust
//! use offer_queue::core::{Job, JobQueue, OfferScheduler, ResourceOffer, ResourceProfile};
//!
//! let scheduler = OfferScheduler::new(JobQueue::new());
//! let big = ResourceProfile::new(4.0, 8 << 30, 0, false);
//! let small = ResourceProfile::new(2.0, 1 << 30, 0, false);
//! scheduler.submit(Job::new(1, "assemble", big, "assemble.sh")).unwrap();
//! scheduler.submit(Job::new(2, "index", small, "index.sh")).unwrap();
//!
//! // Three cores cannot hold the 4-core job, so the 2-core job goes first.
//! let offer = ResourceOffer::new("offer-1", "agent-1", 3.0, 16 << 30, 1 << 30, false);
//! let dispatched = scheduler.handle_offer(offer);
//! assert_eq!(dispatched[0].job.job_id, 2);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core queue structures, ordering, and offer matching.
pub mod core;
/// Configuration models for the scheduler.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Infrastructure adapters on the launch side.
pub mod infra;
/// Tokio runtime adapters: queue actor and offer loop.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Shared utilities.
pub mod util;
