//! Tests for scheduler builders

use offer_queue::builders::{build_in_memory_scheduler, build_queue, build_scheduler};
use offer_queue::config::SchedulerConfig;
use offer_queue::core::{Job, QueueError, ResourceOffer, ResourceProfile};

#[test]
fn test_build_queue_honors_depth() {
    let cfg = SchedulerConfig {
        max_queue_depth: 7,
        ..SchedulerConfig::default()
    };
    assert_eq!(build_queue(&cfg).max_depth(), 7);
}

#[test]
fn test_build_scheduler_rejects_invalid_config() {
    let cfg = SchedulerConfig {
        channel_capacity: 0,
        ..SchedulerConfig::default()
    };
    assert!(build_scheduler(&cfg, |_| None).is_err());
}

#[test]
fn test_build_in_memory_scheduler_rejects_huge_audit_buffer() {
    let cfg = SchedulerConfig {
        audit_buffer: usize::MAX,
        ..SchedulerConfig::default()
    };
    assert!(build_in_memory_scheduler(&cfg).is_err());
}

#[test]
fn test_build_in_memory_scheduler() {
    let cfg = SchedulerConfig {
        max_queue_depth: 1,
        prune_empty_profiles: true,
        audit_buffer: 8,
        ..SchedulerConfig::default()
    };
    let (scheduler, audit) = build_in_memory_scheduler(&cfg).unwrap();
    let audit = audit.expect("audit enabled");

    let profile = ResourceProfile::new(1.0, 0, 0, false);
    scheduler.submit(Job::new(1, "a", profile, "true")).unwrap();
    assert_eq!(
        scheduler.submit(Job::new(2, "b", profile, "true")),
        Err(QueueError::QueueFull(1))
    );

    scheduler.handle_offer(ResourceOffer::new("o1", "a1", 1.0, 0, 0, false));
    assert!(scheduler.ordered_profiles().is_empty());

    assert_eq!(audit.events_with_action("submit").len(), 1);
    assert_eq!(audit.events_with_action("reject").len(), 1);
    assert_eq!(audit.events_with_action("dispatch").len(), 1);
    assert_eq!(audit.events_with_action("prune").len(), 1);
}

#[test]
fn test_audit_disabled() {
    let cfg = SchedulerConfig {
        audit_buffer: 0,
        ..SchedulerConfig::default()
    };
    let (_scheduler, audit) = build_in_memory_scheduler(&cfg).unwrap();
    assert!(audit.is_none());
}
