//! Launcher backends.

pub mod channel;
pub mod memory;

pub use channel::ChannelLauncher;
pub use memory::InMemoryLauncher;
