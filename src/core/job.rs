//! Job records flowing through the queue.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ResourceProfile;

/// Identifier assigned to a job by the submitting batch system.
pub type JobId = u64;

/// What to do with a worker's scratch directory once the job finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanPolicy {
    /// Always remove it.
    Always,
    /// Remove it only when the job succeeded.
    #[default]
    OnSuccess,
    /// Remove it only when the job failed.
    OnError,
    /// Leave it in place.
    Never,
}

/// Information the worker node needs to clean up after a job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkerCleanupInfo {
    /// Scratch directory on the worker, if not the node default.
    pub work_dir: Option<String>,
    /// Workflow the job belongs to.
    pub workflow_id: String,
    /// Cleanup policy for the scratch directory.
    pub clean_work_dir: CleanPolicy,
}

/// A pending unit of work.
///
/// Jobs are created by the submission path, dispatched exactly once, and then
/// owned by the launcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Batch-system specific identifier.
    pub job_id: JobId,
    /// Name shown in cluster UIs.
    pub display_name: String,
    /// Resources the job needs.
    pub profile: ResourceProfile,
    /// Command run on the worker node.
    pub command: String,
    /// Reference to the user script the command depends on.
    pub user_script: Option<String>,
    /// Extra environment variables for the worker process.
    pub environment: HashMap<String, String>,
    /// Worker cleanup instructions.
    pub cleanup: WorkerCleanupInfo,
}

impl Job {
    /// Create a job with an empty environment and default cleanup info.
    pub fn new(
        job_id: JobId,
        display_name: impl Into<String>,
        profile: ResourceProfile,
        command: impl Into<String>,
    ) -> Self {
        Self {
            job_id,
            display_name: display_name.into(),
            profile,
            command: command.into(),
            user_script: None,
            environment: HashMap::new(),
            cleanup: WorkerCleanupInfo::default(),
        }
    }

    /// Set the user script reference.
    pub fn with_user_script(mut self, script: impl Into<String>) -> Self {
        self.user_script = Some(script.into());
        self
    }

    /// Add one environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    /// Replace the cleanup info.
    pub fn with_cleanup(mut self, cleanup: WorkerCleanupInfo) -> Self {
        self.cleanup = cleanup;
        self
    }
}

/// Bookkeeping for a job handed to the launcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Dispatch time in milliseconds since epoch.
    pub start_time_ms: u128,
    /// Agent (cluster node) the offer came from.
    pub agent_id: String,
    /// Executor identifier allocated for this launch.
    pub executor_id: Uuid,
    /// Memory reserved from the offer, in bytes.
    pub memory: u64,
    /// Cores reserved from the offer.
    pub cores: f64,
}

/// A job matched to an offer, ready for launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    /// The dispatched job.
    pub job: Job,
    /// Launch bookkeeping for the job.
    pub task: TaskRecord,
}
