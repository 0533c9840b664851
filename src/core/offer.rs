//! Resource offers announced by the cluster broker.

use serde::{Deserialize, Serialize};

use crate::core::ResourceProfile;

/// Resources currently available on one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceOffer {
    /// Broker-assigned offer identifier.
    pub offer_id: String,
    /// Agent (cluster node) the resources live on.
    pub agent_id: String,
    /// Available cores.
    pub cores: f64,
    /// Available memory, in bytes.
    pub memory: u64,
    /// Available disk, in bytes.
    pub disk: u64,
    /// Whether the offering node may be preempted.
    pub preemptable: bool,
}

impl ResourceOffer {
    /// Create an offer.
    pub fn new(
        offer_id: impl Into<String>,
        agent_id: impl Into<String>,
        cores: f64,
        memory: u64,
        disk: u64,
        preemptable: bool,
    ) -> Self {
        Self {
            offer_id: offer_id.into(),
            agent_id: agent_id.into(),
            cores,
            memory,
            disk,
            preemptable,
        }
    }

    /// Scalar size of the offer.
    pub fn size(&self) -> f64 {
        self.cores
    }

    /// Whether a job of `profile` may be placed on this node at all.
    ///
    /// Non-preemptable jobs need a non-preemptable node; preemptable jobs run
    /// anywhere.
    pub fn is_compatible(&self, profile: &ResourceProfile) -> bool {
        profile.preemptable || !self.preemptable
    }

    /// Whether the remaining resources can hold one job of `profile`.
    pub fn accepts(&self, profile: &ResourceProfile) -> bool {
        self.is_compatible(profile)
            && profile.cores <= self.cores
            && profile.memory <= self.memory
            && profile.disk <= self.disk
    }

    /// Reserve the resources of one job of `profile`.
    ///
    /// Callers check [`Self::accepts`] first; the counters saturate at zero.
    pub fn consume(&mut self, profile: &ResourceProfile) {
        self.cores = (self.cores - profile.cores).max(0.0);
        self.memory = self.memory.saturating_sub(profile.memory);
        self.disk = self.disk.saturating_sub(profile.disk);
    }
}
