//! Scheduler configuration.

use std::env;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable holding the queue depth bound.
pub const ENV_MAX_DEPTH: &str = "OFFER_QUEUE_MAX_DEPTH";
/// Environment variable enabling pruning of drained profiles.
pub const ENV_PRUNE_EMPTY: &str = "OFFER_QUEUE_PRUNE_EMPTY";
/// Environment variable holding the audit buffer size.
pub const ENV_AUDIT_BUFFER: &str = "OFFER_QUEUE_AUDIT_BUFFER";
/// Environment variable holding the actor channel capacity.
pub const ENV_CHANNEL_CAPACITY: &str = "OFFER_QUEUE_CHANNEL_CAPACITY";

/// Largest accepted `audit_buffer`.
pub const MAX_AUDIT_BUFFER: usize = 1 << 20;
/// Largest accepted `channel_capacity`.
pub const MAX_CHANNEL_CAPACITY: usize = 1 << 16;

/// Root scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Maximum pending jobs before submissions are rejected; 0 is unbounded.
    pub max_queue_depth: usize,
    /// Remove drained profiles from the index after each offer.
    pub prune_empty_profiles: bool,
    /// Audit events kept in memory; 0 disables auditing.
    pub audit_buffer: usize,
    /// Buffered requests on the queue actor's command channel.
    pub channel_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_queue_depth: 0,
            prune_empty_profiles: false,
            audit_buffer: 1024,
            channel_capacity: 256,
        }
    }
}

impl SchedulerConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Describes the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.channel_capacity == 0 {
            return Err("channel_capacity must be greater than 0".into());
        }
        if self.channel_capacity > MAX_CHANNEL_CAPACITY {
            return Err(format!("channel_capacity must be at most {MAX_CHANNEL_CAPACITY}"));
        }
        if self.audit_buffer > MAX_AUDIT_BUFFER {
            return Err(format!("audit_buffer must be at most {MAX_AUDIT_BUFFER}"));
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the environment, loading `.env` first if present.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// A set variable that does not parse, or an invalid result.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::default();
        if let Some(v) = env_opt(ENV_MAX_DEPTH) {
            cfg.max_queue_depth = v
                .parse::<usize>()
                .with_context(|| format!("{ENV_MAX_DEPTH}={v} is not a count"))?;
        }
        if let Some(v) = env_opt(ENV_PRUNE_EMPTY) {
            cfg.prune_empty_profiles = parse_flag(&v)
                .with_context(|| format!("{ENV_PRUNE_EMPTY}={v} is not a boolean"))?;
        }
        if let Some(v) = env_opt(ENV_AUDIT_BUFFER) {
            cfg.audit_buffer = v
                .parse::<usize>()
                .with_context(|| format!("{ENV_AUDIT_BUFFER}={v} is not a count"))?;
        }
        if let Some(v) = env_opt(ENV_CHANNEL_CAPACITY) {
            cfg.channel_capacity = v
                .parse::<usize>()
                .with_context(|| format!("{ENV_CHANNEL_CAPACITY}={v} is not a count"))?;
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
