//! Domain-specific error types for OTP issuance, verification, and delivery
//!
//! The taxonomy follows the operation boundaries: validation failures are
//! rejected before the store is touched, storage failures abort the whole
//! operation, and delivery failures surface only after the record has been
//! persisted. A failed verification is an expected boolean outcome, not an
//! error; the `OtpError` variants exist for callers that prefer error-shaped
//! verification results.

use thiserror::Error;

/// Input validation errors
///
/// These are rejected immediately, without touching the store.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid code length: {length}")]
    InvalidCodeLength { length: usize },

    #[error("Invalid media URL: {url}")]
    InvalidMediaUrl { url: String },
}

/// OTP verification errors
///
/// `CodeExpired` and `InvalidCode` are deliberately reported identically at
/// the boolean verification boundary so that callers cannot distinguish a
/// stale record from a wrong guess.
#[derive(Error, Debug)]
pub enum OtpError {
    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code expired")]
    CodeExpired,
}

/// Persistence errors for the OTP collection
///
/// Any of these aborts the current operation; the persisted collection is
/// never left partially written.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read OTP store: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write OTP store: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("OTP store is corrupt: {message}")]
    Corrupt { message: String },
}

/// Delivery transport errors
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery channel is not ready")]
    ChannelNotReady,

    #[error("Delivery failed via {provider}: {message}")]
    SendFailed { provider: String, message: String },
}

/// Unified domain error for service-level operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
