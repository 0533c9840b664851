//! Resource profiles and the dispatch ordering over them.
//!
//! A [`ResourceProfile`] is the resource signature jobs are grouped by. The
//! queue keeps its distinct profiles sorted with [`dispatch_order`], which puts
//! the most expensive, hardest-to-place profile first. That ordering is
//! deliberately not exposed as `Ord`: "less" there means "dispatch earlier",
//! which is the opposite of comparing resource magnitudes.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::QueueError;

/// Resource requirements and placement constraint of a job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceProfile {
    /// CPU cores needed (fractional shares allowed).
    pub cores: f64,
    /// Memory needed, in bytes.
    pub memory: u64,
    /// Scratch disk needed, in bytes.
    pub disk: u64,
    /// Whether the job may run on a preemptable node.
    pub preemptable: bool,
}

impl ResourceProfile {
    /// Create a profile from its four fields.
    pub const fn new(cores: f64, memory: u64, disk: u64, preemptable: bool) -> Self {
        Self {
            cores,
            memory,
            disk,
            preemptable,
        }
    }

    /// Scalar size used when comparing a requirement against an offer.
    pub fn size(&self) -> f64 {
        self.cores
    }

    /// Reject profiles that cannot be scheduled.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidProfile`] when `cores` is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), QueueError> {
        if !self.cores.is_finite() || self.cores < 0.0 {
            return Err(QueueError::InvalidProfile {
                field: "cores",
                value: self.cores,
            });
        }
        Ok(())
    }

    /// Structural key used for map lookups.
    pub fn key(&self) -> ProfileKey {
        ProfileKey::from(self)
    }
}

impl fmt::Display for ResourceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cores={} memory={} disk={} {}",
            self.cores,
            self.memory,
            self.disk,
            if self.preemptable { "P" } else { "NP" }
        )
    }
}

/// Hashable key derived from all four profile fields.
///
/// Two profiles with equal field values always produce the same key, no
/// matter where or when they were constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileKey {
    cores_bits: u64,
    memory: u64,
    disk: u64,
    preemptable: bool,
}

impl From<&ResourceProfile> for ProfileKey {
    fn from(profile: &ResourceProfile) -> Self {
        Self {
            cores_bits: canonical_cores(profile.cores).to_bits(),
            memory: profile.memory,
            disk: profile.disk,
            preemptable: profile.preemptable,
        }
    }
}

/// Collapse `-0.0` onto `0.0` so equal profiles share one bit pattern.
fn canonical_cores(cores: f64) -> f64 {
    cores + 0.0
}

/// Order two profiles for dispatch: `Less` means `a` is dispatched before `b`.
///
/// Precedence, most significant first:
/// 1. non-preemptable before preemptable, regardless of size
/// 2. more cores first
/// 3. more memory first
/// 4. more disk first
///
/// `Equal` is returned only for profiles that are equal field by field.
pub fn dispatch_order(a: &ResourceProfile, b: &ResourceProfile) -> Ordering {
    a.preemptable
        .cmp(&b.preemptable)
        .then_with(|| canonical_cores(b.cores).total_cmp(&canonical_cores(a.cores)))
        .then_with(|| b.memory.cmp(&a.memory))
        .then_with(|| b.disk.cmp(&a.disk))
}
