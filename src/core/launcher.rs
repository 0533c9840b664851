//! Hand-off seam between the queue and whatever launches tasks.

use async_trait::async_trait;

use crate::core::{Dispatch, QueueError};

/// Receives dispatched jobs, each exactly once.
///
/// Ownership of the job passes to the launcher; the queue keeps no record of
/// it afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use offer_queue::core::{Dispatch, Launcher, QueueError};
///
/// struct LogLauncher;
///
/// #[async_trait]
/// impl Launcher for LogLauncher {
///     async fn launch(&self, dispatch: Dispatch) -> Result<(), QueueError> {
///         println!("{} -> {}", dispatch.job.job_id, dispatch.task.agent_id);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Launcher: Send + Sync + 'static {
    /// Start the dispatched job on its agent.
    async fn launch(&self, dispatch: Dispatch) -> Result<(), QueueError>;
}
