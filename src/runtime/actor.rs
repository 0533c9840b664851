//! Single-writer queue task.
//!
//! A [`QueueActor`] owns a [`JobQueue`] on its own tokio task and applies
//! requests one at a time, in arrival order. Any number of producers talk to
//! it through cloned [`QueueHandle`]s. Offer matching runs inside the actor,
//! so the scan and its pops are never interleaved with a submission.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::{SchedulerConfig, MAX_CHANNEL_CAPACITY};
use crate::core::{
    match_offer, Dispatch, Job, JobId, JobQueue, QueueError, ResourceOffer, ResourceProfile,
};

enum Command {
    Submit {
        job: Job,
        reply: oneshot::Sender<Result<(), QueueError>>,
    },
    Offer {
        offer: ResourceOffer,
        reply: oneshot::Sender<Vec<Dispatch>>,
    },
    NextOfType {
        profile: ResourceProfile,
        reply: oneshot::Sender<Result<Job, QueueError>>,
    },
    JobsOfType {
        profile: ResourceProfile,
        reply: oneshot::Sender<Vec<Job>>,
    },
    OrderedProfiles {
        reply: oneshot::Sender<Vec<ResourceProfile>>,
    },
    AllJobIds {
        reply: oneshot::Sender<Vec<JobId>>,
    },
    Pending {
        reply: oneshot::Sender<usize>,
    },
}

/// Task owning a job queue.
pub struct QueueActor {
    queue: JobQueue,
    rx: mpsc::Receiver<Command>,
    prune_empty_profiles: bool,
}

impl QueueActor {
    /// Spawn an actor around `queue` on the current tokio runtime.
    ///
    /// The actor stops once every handle is dropped; its join handle then
    /// yields the queue with whatever jobs are still pending.
    ///
    /// `capacity` is clamped to `1..=MAX_CHANNEL_CAPACITY`.
    pub fn spawn(queue: JobQueue, capacity: usize) -> (QueueHandle, JoinHandle<JobQueue>) {
        Self::spawn_inner(queue, capacity, false)
    }

    /// Spawn an actor configured from `cfg`.
    pub fn spawn_from_config(cfg: &SchedulerConfig) -> (QueueHandle, JoinHandle<JobQueue>) {
        Self::spawn_inner(
            crate::builders::build_queue(cfg),
            cfg.channel_capacity,
            cfg.prune_empty_profiles,
        )
    }

    fn spawn_inner(
        queue: JobQueue,
        capacity: usize,
        prune_empty_profiles: bool,
    ) -> (QueueHandle, JoinHandle<JobQueue>) {
        let (tx, rx) = mpsc::channel(capacity.clamp(1, MAX_CHANNEL_CAPACITY));
        let actor = Self {
            queue,
            rx,
            prune_empty_profiles,
        };
        (QueueHandle { tx }, tokio::spawn(actor.run()))
    }

    async fn run(mut self) -> JobQueue {
        debug!("queue actor started");
        while let Some(command) = self.rx.recv().await {
            self.handle(command);
        }
        info!(pending = self.queue.len(), "queue actor stopped");
        self.queue
    }

    fn handle(&mut self, command: Command) {
        // A dropped reply receiver only means the caller stopped waiting.
        match command {
            Command::Submit { job, reply } => {
                let job_id = job.job_id;
                let profile = job.profile;
                let result = self.queue.insert(job, profile);
                if let Err(e) = &result {
                    warn!(job_id, %profile, error = %e, "job rejected");
                }
                let _ = reply.send(result);
            }
            Command::Offer { offer, reply } => {
                let dispatched = match_offer(&mut self.queue, offer);
                if self.prune_empty_profiles {
                    self.queue.prune_empty();
                }
                let _ = reply.send(dispatched);
            }
            Command::NextOfType { profile, reply } => {
                let _ = reply.send(self.queue.next_job_of_type(&profile));
            }
            Command::JobsOfType { profile, reply } => {
                let _ = reply.send(self.queue.jobs_of_type(&profile).cloned().collect());
            }
            Command::OrderedProfiles { reply } => {
                let _ = reply.send(self.queue.ordered_profiles().to_vec());
            }
            Command::AllJobIds { reply } => {
                let _ = reply.send(self.queue.all_job_ids());
            }
            Command::Pending { reply } => {
                let _ = reply.send(self.queue.len());
            }
        }
    }
}

/// Cloneable client of a [`QueueActor`].
///
/// Every method fails with [`QueueError::Closed`] once the actor is gone.
#[derive(Clone)]
pub struct QueueHandle {
    tx: mpsc::Sender<Command>,
}

impl QueueHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, QueueError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| QueueError::Closed)?;
        response.await.map_err(|_| QueueError::Closed)
    }

    /// Queue a job under its own profile.
    ///
    /// # Errors
    ///
    /// Insert errors from [`JobQueue::insert`], or [`QueueError::Closed`].
    pub async fn submit(&self, job: Job) -> Result<(), QueueError> {
        self.request(|reply| Command::Submit { job, reply }).await?
    }

    /// Match an offer and return the jobs dispatched against it.
    ///
    /// # Errors
    ///
    /// [`QueueError::Closed`].
    pub async fn handle_offer(&self, offer: ResourceOffer) -> Result<Vec<Dispatch>, QueueError> {
        self.request(|reply| Command::Offer { offer, reply }).await
    }

    /// Pop the oldest job of `profile`.
    ///
    /// # Errors
    ///
    /// [`QueueError::EmptyQueue`] or [`QueueError::Closed`].
    pub async fn next_job_of_type(&self, profile: ResourceProfile) -> Result<Job, QueueError> {
        self.request(|reply| Command::NextOfType { profile, reply })
            .await?
    }

    /// Snapshot of the pending jobs of `profile`.
    ///
    /// # Errors
    ///
    /// [`QueueError::Closed`].
    pub async fn jobs_of_type(&self, profile: ResourceProfile) -> Result<Vec<Job>, QueueError> {
        self.request(|reply| Command::JobsOfType { profile, reply })
            .await
    }

    /// Snapshot of the sorted profile index.
    ///
    /// # Errors
    ///
    /// [`QueueError::Closed`].
    pub async fn ordered_profiles(&self) -> Result<Vec<ResourceProfile>, QueueError> {
        self.request(|reply| Command::OrderedProfiles { reply }).await
    }

    /// Ids of every pending job.
    ///
    /// # Errors
    ///
    /// [`QueueError::Closed`].
    pub async fn all_job_ids(&self) -> Result<Vec<JobId>, QueueError> {
        self.request(|reply| Command::AllJobIds { reply }).await
    }

    /// Total pending jobs.
    ///
    /// # Errors
    ///
    /// [`QueueError::Closed`].
    pub async fn pending(&self) -> Result<usize, QueueError> {
        self.request(|reply| Command::Pending { reply }).await
    }
}
