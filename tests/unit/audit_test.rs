//! Tests for audit sink

use offer_queue::core::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event(
        "evt1",
        "42",
        "cores=2 memory=100 disk=50 NP",
        "submit",
        None,
    ));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, "evt1");
    assert_eq!(events[0].job_id, "42");
    assert_eq!(events[0].action, "submit");
    assert!(events[0].created_at_ms > 0);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("evt1", "1", "p", "submit", None));
    sink.record(build_audit_event("evt2", "2", "p", "submit", None));
    sink.record(build_audit_event("evt3", "3", "p", "dispatch", Some("o1".into())));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, "evt2"); // First one popped
    assert_eq!(events[1].event_id, "evt3");
    assert_eq!(sink.events_with_action("dispatch").len(), 1);
}

#[test]
fn test_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(4);
    let mut writer = sink.clone();
    writer.record(build_audit_event("evt1", "1", "p", "prune", Some("3".into())));
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn test_zero_sized_sink_records_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event("evt1", "1", "p", "submit", None));
    assert!(sink.events().is_empty());
}

#[test]
fn test_large_bound_does_not_preallocate() {
    let mut sink = InMemoryAuditSink::new(usize::MAX);
    sink.record(build_audit_event("evt1", "1", "p", "submit", None));
    assert_eq!(sink.events().len(), 1);
}
