//! Tests for launcher backends

use offer_queue::core::{Job, JobQueue, Launcher, OfferScheduler, ResourceOffer, ResourceProfile};
use offer_queue::infra::{ChannelLauncher, InMemoryLauncher};

fn scheduler_with_jobs(count: u64) -> OfferScheduler {
    let scheduler = OfferScheduler::new(JobQueue::new());
    let profile = ResourceProfile::new(1.0, 0, 0, true);
    for id in 1..=count {
        scheduler.submit(Job::new(id, "j", profile, "true")).unwrap();
    }
    scheduler
}

#[tokio::test]
async fn test_in_memory_launcher_records_order() {
    let scheduler = scheduler_with_jobs(3);
    let launcher = InMemoryLauncher::new();
    for dispatch in scheduler.handle_offer(ResourceOffer::new("o1", "a1", 3.0, 0, 0, true)) {
        launcher.launch(dispatch).await.unwrap();
    }
    assert_eq!(launcher.launched_ids(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_channel_launcher_feeds_launch_thread() {
    let scheduler = scheduler_with_jobs(2);
    let (launcher, rx) = ChannelLauncher::new();

    let launch_thread = std::thread::spawn(move || rx.iter().map(|d| d.job.job_id).collect::<Vec<_>>());

    for dispatch in scheduler.handle_offer(ResourceOffer::new("o1", "a1", 2.0, 0, 0, false)) {
        launcher.launch(dispatch).await.unwrap();
    }
    drop(launcher);

    assert_eq!(launch_thread.join().unwrap(), vec![1, 2]);
}
