//! Tests for error types

use offer_queue::core::QueueError;

#[test]
fn test_empty_queue_error() {
    assert_eq!(format!("{}", QueueError::EmptyQueue), "empty queue");
}

#[test]
fn test_invalid_profile_error() {
    let err = QueueError::InvalidProfile {
        field: "cores",
        value: -1.0,
    };
    assert_eq!(format!("{}", err), "invalid profile: cores = -1");
}

#[test]
fn test_queue_full_error() {
    assert_eq!(format!("{}", QueueError::QueueFull(10)), "queue full: 10 jobs pending");
}

#[test]
fn test_launch_error() {
    let err = QueueError::Launch("agent lost".to_string());
    assert_eq!(format!("{}", err), "launch failed: agent lost");
}

#[test]
fn test_closed_error() {
    assert_eq!(format!("{}", QueueError::Closed), "queue closed");
}
