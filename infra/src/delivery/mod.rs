//! Delivery transports and channel session state

mod mock;
mod session;

pub use mock::{MockDeliveryService, SentMessage};
pub use session::{SessionMonitor, SessionState};
