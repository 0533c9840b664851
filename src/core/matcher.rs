//! Greedy largest-fit-first matching of pending jobs against an offer.

use tracing::debug;
use uuid::Uuid;

use crate::core::{Dispatch, JobQueue, ResourceOffer, TaskRecord};
use crate::util::clock::now_ms;

/// Dispatch as many jobs as fit into `offer`.
///
/// Profiles are visited most expensive first. A profile is dispatched
/// repeatedly while the offer still has room for it and it has jobs left;
/// then the scan moves on to the next profile. Remaining capacity only
/// shrinks, so a profile skipped once can never fit later in the same offer.
///
/// The caller must hold exclusive access to `queue` for the whole call.
pub fn match_offer(queue: &mut JobQueue, mut offer: ResourceOffer) -> Vec<Dispatch> {
    let mut dispatched = Vec::new();

    for index in 0..queue.ordered_profiles().len() {
        let profile = queue.ordered_profiles()[index];
        while offer.accepts(&profile) {
            let Ok(job) = queue.next_job_of_type(&profile) else {
                break;
            };
            offer.consume(&profile);
            debug!(
                job_id = job.job_id,
                %profile,
                offer_id = %offer.offer_id,
                "matched job to offer"
            );
            dispatched.push(Dispatch {
                job,
                task: TaskRecord {
                    start_time_ms: now_ms(),
                    agent_id: offer.agent_id.clone(),
                    executor_id: Uuid::new_v4(),
                    memory: profile.memory,
                    cores: profile.cores,
                },
            });
        }
    }

    dispatched
}
