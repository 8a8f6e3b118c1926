//! In-memory OTP store
//!
//! Same semantics as the file-backed store, minus persistence. Useful for
//! tests and for embedding the gateway where restart recovery is not needed.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use cr_core::domain::entities::OtpRecord;
use cr_core::domain::otp_set::{OtpSet, DEFAULT_CAPACITY};
use cr_core::errors::StorageError;
use cr_core::services::otp::OtpStoreTrait;

/// In-memory OTP store with the standard lifecycle semantics
pub struct MemoryOtpStore {
    // One mutex spans each whole read-modify-write unit
    state: Mutex<OtpSet>,
}

impl MemoryOtpStore {
    /// Create a store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store bounded to `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(OtpSet::new(capacity)),
        }
    }
}

impl Default for MemoryOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStoreTrait for MemoryOtpStore {
    async fn issue(&self, identity: &str, code: &str, ttl_minutes: i64) -> Result<(), StorageError> {
        let mut state = self.state.lock().await;
        state.issue(identity, code, ttl_minutes, Utc::now());
        Ok(())
    }

    async fn verify(&self, identity: &str, candidate: &str) -> Result<bool, StorageError> {
        let mut state = self.state.lock().await;
        Ok(state.verify(identity, candidate, Utc::now()).is_consumed())
    }

    async fn list_active(&self) -> Result<Vec<OtpRecord>, StorageError> {
        let mut state = self.state.lock().await;
        Ok(state.snapshot(Utc::now()))
    }
}
