//! # CodeRelay Core
//!
//! Core business logic and domain layer for the CodeRelay OTP gateway.
//! This crate contains the OTP record and collection semantics, the message
//! template renderer, the issuing/verification service, the store and
//! delivery traits, and the error taxonomy. It performs no file or network
//! I/O; those concerns live in the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod services;
pub mod templates;

// Re-export commonly used types for convenience
pub use domain::entities::OtpRecord;
pub use domain::otp_set::{OtpSet, VerifyOutcome, DEFAULT_CAPACITY};
pub use errors::{DeliveryError, DomainError, DomainResult, OtpError, StorageError, ValidationError};
pub use services::otp::{
    DeliveryServiceTrait, OtpDelivery, OtpIssued, OtpRequest, OtpService, OtpServiceConfig,
    OtpStoreTrait,
};
pub use templates::{TemplateRenderer, TemplateTable, DEFAULT_TEMPLATE_KEY};
