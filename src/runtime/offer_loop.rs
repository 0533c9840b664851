//! The scheduling loop that turns offers into launches.

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::core::{Launcher, OfferScheduler, ResourceOffer};

/// Counters reported when the offer loop exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OfferLoopStats {
    /// Offers received.
    pub offers: usize,
    /// Jobs the launcher accepted.
    pub launched: usize,
    /// Jobs the launcher refused.
    pub failed: usize,
}

/// Drive `scheduler` with offers until the offer channel closes.
///
/// Each offer is matched in one atomic step, then its dispatches are handed
/// to `launcher` in match order. A refused launch is logged and counted; the
/// job is not requeued.
pub async fn run_offer_loop<L: Launcher>(
    scheduler: OfferScheduler,
    mut offers: mpsc::Receiver<ResourceOffer>,
    launcher: L,
) -> OfferLoopStats {
    info!("offer loop started");
    let mut stats = OfferLoopStats::default();

    while let Some(offer) = offers.recv().await {
        stats.offers += 1;
        for dispatch in scheduler.handle_offer(offer) {
            let job_id = dispatch.job.job_id;
            let agent_id = dispatch.task.agent_id.clone();
            match launcher.launch(dispatch).await {
                Ok(()) => stats.launched += 1,
                Err(e) => {
                    stats.failed += 1;
                    error!(job_id, agent_id = %agent_id, error = %e, "launch failed");
                }
            }
        }
    }

    info!(
        offers = stats.offers,
        launched = stats.launched,
        failed = stats.failed,
        "offer loop stopped"
    );
    stats
}
