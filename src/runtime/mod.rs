//! Tokio-based runtime adapters: the queue actor and the offer loop.

pub mod actor;
pub mod offer_loop;

pub use actor::{QueueActor, QueueHandle};
pub use offer_loop::{run_offer_loop, OfferLoopStats};
