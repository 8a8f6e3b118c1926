//! OTP service module
//!
//! This module provides the complete OTP flow:
//! - Secure numeric code generation
//! - Issuance with one-active-per-identity and capacity semantics
//!   (delegated to the store)
//! - Message rendering from the template table
//! - Handoff to the delivery transport
//! - One-time verification

mod config;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use generator::generate_code;
pub use service::OtpService;
pub use traits::{DeliveryServiceTrait, OtpStoreTrait};
pub use types::{OtpDelivery, OtpIssued, OtpRequest};
