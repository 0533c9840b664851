//! Builders to construct queues and schedulers from configuration.

use anyhow::anyhow;

use crate::config::SchedulerConfig;
use crate::core::{AppResult, AuditSink, InMemoryAuditSink, JobQueue, OfferScheduler};

/// Build an empty queue honoring the configured depth bound.
pub fn build_queue(cfg: &SchedulerConfig) -> JobQueue {
    JobQueue::with_max_depth(cfg.max_queue_depth)
}

/// Build a scheduler from configuration, asking `audit_factory` for a sink.
///
/// # Errors
///
/// Fails when the configuration does not validate.
pub fn build_scheduler<FA>(cfg: &SchedulerConfig, audit_factory: FA) -> AppResult<OfferScheduler>
where
    FA: FnOnce(&SchedulerConfig) -> Option<Box<dyn AuditSink>>,
{
    cfg.validate().map_err(|e| anyhow!("config invalid: {e}"))?;

    let mut scheduler = OfferScheduler::new(build_queue(cfg)).with_pruning(cfg.prune_empty_profiles);
    if let Some(sink) = audit_factory(cfg) {
        scheduler = scheduler.with_audit(sink);
    }
    Ok(scheduler)
}

/// Build a scheduler with an in-memory audit sink sized by `audit_buffer`.
///
/// The returned sink handle shares its buffer with the scheduler; it is
/// `None` when auditing is disabled.
///
/// # Errors
///
/// Fails when the configuration does not validate.
pub fn build_in_memory_scheduler(
    cfg: &SchedulerConfig,
) -> AppResult<(OfferScheduler, Option<InMemoryAuditSink>)> {
    cfg.validate().map_err(|e| anyhow!("config invalid: {e}"))?;

    let sink = (cfg.audit_buffer > 0).then(|| InMemoryAuditSink::new(cfg.audit_buffer));
    let handle = sink.clone();
    let scheduler = build_scheduler(cfg, move |_| {
        sink.map(|s| Box::new(s) as Box<dyn AuditSink>)
    })?;
    Ok((scheduler, handle))
}
