//! Error types for the CodeRelay domain layer

mod types;

pub use types::{
    DeliveryError, DomainError, DomainResult, OtpError, StorageError, ValidationError,
};
