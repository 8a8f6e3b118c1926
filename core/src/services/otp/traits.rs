//! Traits for store and delivery integration
//!
//! The service depends on these seams only; the file-backed store and the
//! concrete transports live in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::OtpRecord;
use crate::errors::{DeliveryError, StorageError};

/// Trait for the OTP store
///
/// Implementations must execute each operation as a single serialized
/// read-modify-write unit: concurrent `issue` or `verify` calls, whether for
/// the same identity or different ones, must not interleave their read and
/// write phases, or the capacity and one-active-per-identity invariants can
/// be violated.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Record a freshly issued code, superseding any existing record for the
    /// identity and evicting the oldest record if over capacity
    async fn issue(&self, identity: &str, code: &str, ttl_minutes: i64) -> Result<(), StorageError>;

    /// Purge expired records, then consume the identity's record if the
    /// candidate matches. `false` covers wrong code, absent record, and
    /// just-expired record alike.
    async fn verify(&self, identity: &str, candidate: &str) -> Result<bool, StorageError>;

    /// Purge expired records and return a diagnostic snapshot of the rest
    async fn list_active(&self) -> Result<Vec<OtpRecord>, StorageError>;
}

/// Trait for the outbound messaging transport
#[async_trait]
pub trait DeliveryServiceTrait: Send + Sync {
    /// Send a message, returning the provider's message identifier
    ///
    /// A send attempted while the underlying channel is not paired/ready
    /// must fail with `DeliveryError::ChannelNotReady` rather than panic or
    /// block.
    async fn send(
        &self,
        identity: &str,
        message: &str,
        media_url: Option<&str>,
    ) -> Result<String, DeliveryError>;

    /// Name of the transport provider (e.g. "mock")
    fn provider_name(&self) -> &str;
}
