//! Infrastructure adapters on the launch side of the queue.

pub mod launcher;

pub use launcher::{ChannelLauncher, InMemoryLauncher};
