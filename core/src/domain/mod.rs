//! Domain layer: OTP records and the bounded, ordered collection that owns
//! their lifecycle.

pub mod entities;
pub mod otp_set;

pub use entities::OtpRecord;
pub use otp_set::{OtpSet, VerifyOutcome, DEFAULT_CAPACITY};
