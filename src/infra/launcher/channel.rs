//! Launcher that forwards dispatches to a dedicated launch thread.

use async_trait::async_trait;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::{Dispatch, Launcher, QueueError};

/// Hands each dispatch to a `crossbeam-channel` receiver.
///
/// The receiving side typically lives on an OS thread that talks to the
/// cluster. Sending never blocks the scheduling loop.
#[derive(Clone)]
pub struct ChannelLauncher {
    tx: Sender<Dispatch>,
}

impl ChannelLauncher {
    /// Create a launcher and the receiver its dispatches arrive on.
    pub fn new() -> (Self, Receiver<Dispatch>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Launcher for ChannelLauncher {
    async fn launch(&self, dispatch: Dispatch) -> Result<(), QueueError> {
        self.tx
            .send(dispatch)
            .map_err(|_| QueueError::Launch("launch thread disconnected".into()))
    }
}
