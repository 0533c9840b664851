//! Profile-keyed multi-queue with a sorted profile index.
//!
//! Jobs are grouped into one FIFO per distinct [`ResourceProfile`]. The
//! distinct profiles are kept in a vector sorted by [`dispatch_order`], so an
//! offer can be matched by scanning from the most expensive profile down.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::core::{dispatch_order, Job, JobId, ProfileKey, QueueError, ResourceProfile};

/// In-memory job queue grouped by resource profile.
///
/// Not synchronized; wrap it in [`crate::core::OfferScheduler`] or
/// [`crate::runtime::QueueActor`] when shared between tasks.
#[derive(Debug, Default)]
pub struct JobQueue {
    /// Maximum pending jobs, 0 for unbounded.
    max_depth: usize,
    len: usize,
    by_profile: HashMap<ProfileKey, VecDeque<Job>>,
    /// Exactly the profiles of `by_profile`, most expensive first.
    ordered: Vec<ResourceProfile>,
}

impl JobQueue {
    /// Create an unbounded queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue that rejects inserts once `max_depth` jobs are pending.
    /// A depth of 0 means unbounded.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Append `job` to the FIFO of `profile`, registering the profile if new.
    ///
    /// Profiles are deduplicated by value: a structurally equal profile reuses
    /// the existing entry. A new profile is placed in the sorted index by
    /// binary search in the same step that creates its FIFO.
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidProfile`] for an unschedulable profile and
    /// [`QueueError::QueueFull`] when the depth bound is reached. The queue is
    /// unchanged in both cases.
    pub fn insert(&mut self, job: Job, profile: ResourceProfile) -> Result<(), QueueError> {
        profile.validate()?;
        if self.max_depth > 0 && self.len >= self.max_depth {
            return Err(QueueError::QueueFull(self.len));
        }

        match self.by_profile.entry(profile.key()) {
            Entry::Occupied(mut fifo) => fifo.get_mut().push_back(job),
            Entry::Vacant(slot) => {
                if let Err(index) = self
                    .ordered
                    .binary_search_by(|probe| dispatch_order(probe, &profile))
                {
                    self.ordered.insert(index, profile);
                }
                debug!(%profile, profiles = self.ordered.len(), "registered job profile");
                slot.insert(VecDeque::from([job]));
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Pop the oldest pending job of `profile`.
    ///
    /// # Errors
    ///
    /// [`QueueError::EmptyQueue`] when the profile is unknown or has no jobs.
    pub fn next_job_of_type(&mut self, profile: &ResourceProfile) -> Result<Job, QueueError> {
        let job = self
            .by_profile
            .get_mut(&profile.key())
            .and_then(VecDeque::pop_front)
            .ok_or(QueueError::EmptyQueue)?;
        self.len -= 1;
        Ok(job)
    }

    /// Pending jobs of `profile` in dispatch order; empty if the profile is unknown.
    pub fn jobs_of_type(&self, profile: &ResourceProfile) -> impl Iterator<Item = &Job> + '_ {
        self.by_profile.get(&profile.key()).into_iter().flatten()
    }

    /// Number of pending jobs of `profile`.
    pub fn pending_of_type(&self, profile: &ResourceProfile) -> usize {
        self.by_profile.get(&profile.key()).map_or(0, VecDeque::len)
    }

    /// Known profiles, most expensive first.
    pub fn ordered_profiles(&self) -> &[ResourceProfile] {
        &self.ordered
    }

    /// Ids of every pending job. Within a profile ids are in FIFO order.
    pub fn all_job_ids(&self) -> Vec<JobId> {
        self.by_profile
            .values()
            .flat_map(|fifo| fifo.iter().map(|job| job.job_id))
            .collect()
    }

    /// Drop profiles whose FIFO has drained. Returns how many were removed.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.ordered.len();
        self.by_profile.retain(|_, fifo| !fifo.is_empty());
        let by_profile = &self.by_profile;
        self.ordered.retain(|profile| by_profile.contains_key(&profile.key()));
        before - self.ordered.len()
    }

    /// Total pending jobs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no job is pending.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of registered profiles, drained ones included.
    pub fn profile_count(&self) -> usize {
        self.ordered.len()
    }

    /// Configured depth bound, 0 for unbounded.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
