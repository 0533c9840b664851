//! Thread-safe scheduling front for a [`JobQueue`].
//!
//! Every mutation and the whole scan-then-pop sequence of an offer run under
//! a single `parking_lot::Mutex`, so concurrent submitters never observe a
//! half-matched queue. Audit records are written after the queue lock is
//! released.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::core::{
    build_audit_event, match_offer, AuditSink, Dispatch, Job, JobId, JobQueue, QueueError,
    ResourceOffer, ResourceProfile,
};

/// Shared handle to a mutex-guarded job queue.
///
/// Cloning is cheap; clones address the same queue.
#[derive(Clone)]
pub struct OfferScheduler {
    queue: Arc<Mutex<JobQueue>>,
    prune_empty_profiles: bool,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl OfferScheduler {
    /// Wrap a queue.
    pub fn new(queue: JobQueue) -> Self {
        Self {
            queue: Arc::new(Mutex::new(queue)),
            prune_empty_profiles: false,
            audit: None,
        }
    }

    /// Drop drained profiles from the index after every offer.
    #[must_use]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.prune_empty_profiles = enabled;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Queue a job under its own profile.
    ///
    /// # Errors
    ///
    /// Propagates [`QueueError::InvalidProfile`] and [`QueueError::QueueFull`]
    /// from [`JobQueue::insert`].
    pub fn submit(&self, job: Job) -> Result<(), QueueError> {
        let job_id = job.job_id;
        let profile = job.profile;
        let result = self.queue.lock().insert(job, profile);

        match &result {
            Ok(()) => {
                debug!(job_id, %profile, "job queued");
                self.record_audit(job_id, &profile, "submit", None);
            }
            Err(e) => {
                warn!(job_id, %profile, error = %e, "job rejected");
                self.record_audit(job_id, &profile, "reject", Some(e.to_string()));
            }
        }
        result
    }

    /// Queue jobs in order, stopping at the first rejection.
    ///
    /// Jobs before the rejected one stay queued.
    ///
    /// # Errors
    ///
    /// The first error returned by [`Self::submit`].
    pub fn submit_all(&self, jobs: impl IntoIterator<Item = Job>) -> Result<usize, QueueError> {
        let mut submitted = 0;
        for job in jobs {
            self.submit(job)?;
            submitted += 1;
        }
        Ok(submitted)
    }

    /// Match an incoming offer and pop every job dispatched against it.
    ///
    /// The scan and all pops happen under one lock acquisition.
    pub fn handle_offer(&self, offer: ResourceOffer) -> Vec<Dispatch> {
        let offer_id = offer.offer_id.clone();
        let (dispatched, pruned, pending) = {
            let mut queue = self.queue.lock();
            let dispatched = match_offer(&mut queue, offer);
            let pruned = if self.prune_empty_profiles {
                queue.prune_empty()
            } else {
                0
            };
            (dispatched, pruned, queue.len())
        };

        if !dispatched.is_empty() {
            info!(
                offer_id = %offer_id,
                dispatched = dispatched.len(),
                pending,
                "offer matched"
            );
        }
        for dispatch in &dispatched {
            self.record_audit(
                dispatch.job.job_id,
                &dispatch.job.profile,
                "dispatch",
                Some(offer_id.clone()),
            );
        }
        if pruned > 0 {
            debug!(pruned, "pruned drained profiles");
            if let Some(audit_sink) = &self.audit {
                audit_sink.lock().record(build_audit_event(
                    format!("prune-{offer_id}"),
                    "batch",
                    "*",
                    "prune",
                    Some(pruned.to_string()),
                ));
            }
        }
        dispatched
    }

    /// Pop the oldest job of `profile`.
    ///
    /// # Errors
    ///
    /// [`QueueError::EmptyQueue`] when nothing of that profile is pending.
    pub fn next_job_of_type(&self, profile: &ResourceProfile) -> Result<Job, QueueError> {
        self.queue.lock().next_job_of_type(profile)
    }

    /// Snapshot of the pending jobs of `profile`, oldest first.
    pub fn jobs_of_type(&self, profile: &ResourceProfile) -> Vec<Job> {
        self.queue.lock().jobs_of_type(profile).cloned().collect()
    }

    /// Snapshot of the sorted profile index.
    pub fn ordered_profiles(&self) -> Vec<ResourceProfile> {
        self.queue.lock().ordered_profiles().to_vec()
    }

    /// Ids of every pending job.
    pub fn all_job_ids(&self) -> Vec<JobId> {
        self.queue.lock().all_job_ids()
    }

    /// Total pending jobs.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Run `f` with exclusive access to the queue.
    pub fn with_queue<R>(&self, f: impl FnOnce(&mut JobQueue) -> R) -> R {
        f(&mut *self.queue.lock())
    }

    fn record_audit(
        &self,
        job_id: JobId,
        profile: &ResourceProfile,
        action: &str,
        payload: Option<String>,
    ) {
        if let Some(audit_sink) = &self.audit {
            audit_sink.lock().record(build_audit_event(
                format!("{job_id}-{action}-{}", crate::util::clock::now_ms()),
                job_id.to_string(),
                profile.to_string(),
                action,
                payload,
            ));
        }
    }
}
