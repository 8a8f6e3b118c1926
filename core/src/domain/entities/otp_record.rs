//! One-time passcode record entity

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single outstanding one-time passcode bound to an identity
///
/// Records are immutable once created: the only transitions are removal on
/// consumption, expiry, capacity eviction, or a superseding issuance for the
/// same identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Recipient address this code was issued for
    pub identity: String,

    /// The numeric passcode
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Create a record expiring `ttl_minutes` after `now`
    pub fn new(identity: impl Into<String>, code: impl Into<String>, ttl_minutes: i64, now: DateTime<Utc>) -> Self {
        Self {
            identity: identity.into(),
            code: code.into(),
            issued_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    /// Check whether the record has expired as of `now`
    ///
    /// A record whose expiry equals `now` exactly counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let now = Utc::now();
        let record = OtpRecord::new("+15551234567", "042917", 5, now);

        assert_eq!(record.identity, "+15551234567");
        assert_eq!(record.code, "042917");
        assert_eq!(record.issued_at, now);
        assert_eq!(record.expires_at, now + Duration::minutes(5));
        assert!(!record.is_expired(now));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let record = OtpRecord::new("+15551234567", "042917", 5, now);

        // Exactly at expiry counts as expired
        assert!(record.is_expired(now + Duration::minutes(5)));
        assert!(record.is_expired(now + Duration::minutes(6)));
        assert!(!record.is_expired(now + Duration::minutes(4)));
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = OtpRecord::new("+15551234567", "042917", 5, Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: OtpRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
