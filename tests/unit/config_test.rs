//! Tests for configuration validation

use offer_queue::config::{SchedulerConfig, MAX_AUDIT_BUFFER, MAX_CHANNEL_CAPACITY};

#[test]
fn test_default_config_is_valid() {
    let cfg = SchedulerConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.max_queue_depth, 0);
    assert!(!cfg.prune_empty_profiles);
}

#[test]
fn test_zero_channel_capacity_invalid() {
    let cfg = SchedulerConfig {
        channel_capacity: 0,
        ..SchedulerConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_oversized_buffers_invalid() {
    let huge_audit = SchedulerConfig {
        audit_buffer: usize::MAX,
        ..SchedulerConfig::default()
    };
    assert!(huge_audit.validate().is_err());

    let huge_channel = SchedulerConfig {
        channel_capacity: usize::MAX,
        ..SchedulerConfig::default()
    };
    assert!(huge_channel.validate().is_err());

    let at_limit = SchedulerConfig {
        audit_buffer: MAX_AUDIT_BUFFER,
        channel_capacity: MAX_CHANNEL_CAPACITY,
        ..SchedulerConfig::default()
    };
    assert!(at_limit.validate().is_ok());

    assert!(SchedulerConfig::from_json_str(r#"{ "audit_buffer": 1000000000000 }"#).is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "max_queue_depth": 500,
        "prune_empty_profiles": true,
        "audit_buffer": 64,
        "channel_capacity": 32
    }"#;

    let cfg = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.max_queue_depth, 500);
    assert!(cfg.prune_empty_profiles);
    assert_eq!(cfg.audit_buffer, 64);
    assert_eq!(cfg.channel_capacity, 32);
}

#[test]
fn test_config_from_json_fills_defaults() {
    let cfg = SchedulerConfig::from_json_str(r#"{ "prune_empty_profiles": true }"#).unwrap();
    assert!(cfg.prune_empty_profiles);
    assert_eq!(cfg.channel_capacity, SchedulerConfig::default().channel_capacity);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(SchedulerConfig::from_json_str(r#"{ "channel_capacity": 0 }"#).is_err());
    assert!(SchedulerConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_from_env() {
    // Only this test touches these variables.
    std::env::set_var("OFFER_QUEUE_MAX_DEPTH", "128");
    std::env::set_var("OFFER_QUEUE_PRUNE_EMPTY", "yes");
    std::env::set_var("OFFER_QUEUE_AUDIT_BUFFER", "16");
    std::env::set_var("OFFER_QUEUE_CHANNEL_CAPACITY", "8");

    let cfg = SchedulerConfig::from_env().unwrap();
    assert_eq!(cfg.max_queue_depth, 128);
    assert!(cfg.prune_empty_profiles);
    assert_eq!(cfg.audit_buffer, 16);
    assert_eq!(cfg.channel_capacity, 8);

    std::env::set_var("OFFER_QUEUE_PRUNE_EMPTY", "sometimes");
    assert!(SchedulerConfig::from_env().is_err());

    std::env::set_var("OFFER_QUEUE_PRUNE_EMPTY", "no");
    std::env::set_var("OFFER_QUEUE_AUDIT_BUFFER", usize::MAX.to_string());
    assert!(SchedulerConfig::from_env().is_err());

    for key in [
        "OFFER_QUEUE_MAX_DEPTH",
        "OFFER_QUEUE_PRUNE_EMPTY",
        "OFFER_QUEUE_AUDIT_BUFFER",
        "OFFER_QUEUE_CHANNEL_CAPACITY",
    ] {
        std::env::remove_var(key);
    }
}
