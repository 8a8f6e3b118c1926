//! File-backed OTP store
//!
//! The collection is held in memory and mirrored to a single JSON file after
//! every mutation. Writes go to a temporary file which is then renamed over
//! the real one, so a crash mid-write can never leave a partially written
//! collection behind. One mutex spans the whole load -> mutate -> persist
//! sequence of every operation; finer-grained locking is unsafe for this
//! representation because two interleaved issuances could both read the
//! pre-update state and break the capacity or one-active-per-identity
//! invariants.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use cr_core::domain::entities::OtpRecord;
use cr_core::domain::otp_set::{OtpSet, VerifyOutcome, DEFAULT_CAPACITY};
use cr_core::errors::StorageError;
use cr_core::services::otp::OtpStoreTrait;
use cr_shared::utils::mask_identity;

/// OTP store persisted as a JSON array of records
#[derive(Debug)]
pub struct FileOtpStore {
    path: PathBuf,
    state: Mutex<OtpSet>,
}

impl FileOtpStore {
    /// Open (or create) a store at `path` with the default capacity
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open_with_capacity(path, DEFAULT_CAPACITY).await
    }

    /// Open (or create) a store at `path` bounded to `capacity` records
    ///
    /// The persisted collection is loaded once here; a missing file is an
    /// empty store, anything unreadable or unparsable is an error.
    pub async fn open_with_capacity(
        path: impl AsRef<Path>,
        capacity: usize,
    ) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StorageError::Write { source })?;
            }
        }

        let set = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let records: Vec<OtpRecord> =
                    serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt {
                        message: format!("{} in {}", e, path.display()),
                    })?;
                debug!(
                    path = %path.display(),
                    records = records.len(),
                    "Loaded persisted OTP collection"
                );
                OtpSet::with_records(capacity, records)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => OtpSet::new(capacity),
            Err(source) => return Err(StorageError::Read { source }),
        };

        Ok(Self {
            path,
            state: Mutex::new(set),
        })
    }

    /// Write the collection to disk atomically (temp file, then rename)
    async fn persist(&self, set: &OtpSet) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(set.records()).map_err(|e| StorageError::Corrupt {
            message: format!("failed to serialize records: {}", e),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| StorageError::Write { source })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StorageError::Write { source })?;

        Ok(())
    }
}

#[async_trait]
impl OtpStoreTrait for FileOtpStore {
    async fn issue(&self, identity: &str, code: &str, ttl_minutes: i64) -> Result<(), StorageError> {
        let mut state = self.state.lock().await;

        // Mutate a copy and commit only after the write lands, so a failed
        // persist leaves memory and disk consistent.
        let mut next = state.clone();
        let evicted = next.issue(identity, code, ttl_minutes, Utc::now());
        self.persist(&next).await?;
        *state = next;

        if let Some(evicted) = evicted {
            info!(
                identity = %mask_identity(&evicted.identity),
                event = "otp_evicted",
                "Evicted oldest OTP record at capacity"
            );
        }
        debug!(
            identity = %mask_identity(identity),
            ttl_minutes,
            "Persisted issued OTP"
        );

        Ok(())
    }

    async fn verify(&self, identity: &str, candidate: &str) -> Result<bool, StorageError> {
        let mut state = self.state.lock().await;

        let mut next = state.clone();
        let outcome = next.verify(identity, candidate, Utc::now());

        // Consumption and lazy expiry both change the collection
        if next != *state {
            self.persist(&next).await?;
            *state = next;
        }

        match outcome {
            VerifyOutcome::Consumed => Ok(true),
            VerifyOutcome::Expired => {
                warn!(
                    identity = %mask_identity(identity),
                    event = "otp_expired",
                    "Verification attempted against an expired code"
                );
                Ok(false)
            }
            VerifyOutcome::Mismatch | VerifyOutcome::NotFound => Ok(false),
        }
    }

    async fn list_active(&self) -> Result<Vec<OtpRecord>, StorageError> {
        let mut state = self.state.lock().await;

        let mut next = state.clone();
        let snapshot = next.snapshot(Utc::now());

        if next != *state {
            self.persist(&next).await?;
            *state = next;
        }

        Ok(snapshot)
    }
}
