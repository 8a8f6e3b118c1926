//! # CodeRelay Infrastructure
//!
//! Implementations of the core store and delivery traits: the file-backed
//! OTP store with atomic persistence, a pure in-memory store for tests and
//! embedding, the delivery-channel session component, a mock transport, and
//! the template table loader. All fallible operations surface the core error
//! types directly.

pub mod delivery;
pub mod store;
pub mod templates;

pub use delivery::{MockDeliveryService, SentMessage, SessionMonitor, SessionState};
pub use store::{FileOtpStore, MemoryOtpStore};
pub use templates::load_template_table;
