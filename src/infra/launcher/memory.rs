//! In-memory launcher that records every dispatch.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{Dispatch, JobId, Launcher, QueueError};

/// Launcher for development and testing.
///
/// Clones share the same record. Agents can be marked as failing to exercise
/// launch-error paths.
#[derive(Clone, Default)]
pub struct InMemoryLauncher {
    launched: Arc<Mutex<Vec<Dispatch>>>,
    failing_agents: Arc<HashSet<String>>,
}

impl InMemoryLauncher {
    /// Create an empty launcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every launch targeting one of `agents`.
    pub fn with_failing_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let agents: HashSet<String> = agents.into_iter().map(Into::into).collect();
        self.failing_agents = Arc::new(agents);
        self
    }

    /// Snapshot of launched dispatches, in launch order.
    pub fn launched(&self) -> Vec<Dispatch> {
        self.launched.lock().clone()
    }

    /// Ids of launched jobs, in launch order.
    pub fn launched_ids(&self) -> Vec<JobId> {
        self.launched.lock().iter().map(|d| d.job.job_id).collect()
    }
}

#[async_trait]
impl Launcher for InMemoryLauncher {
    async fn launch(&self, dispatch: Dispatch) -> Result<(), QueueError> {
        if self.failing_agents.contains(&dispatch.task.agent_id) {
            return Err(QueueError::Launch(format!(
                "agent {} unavailable",
                dispatch.task.agent_id
            )));
        }
        self.launched.lock().push(dispatch);
        Ok(())
    }
}
