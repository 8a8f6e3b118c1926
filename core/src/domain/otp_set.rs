//! Bounded, insertion-ordered collection of outstanding OTP records
//!
//! `OtpSet` owns the whole OTP lifecycle: the one-active-per-identity rule,
//! the capacity bound with oldest-first eviction, lazy expiry, and one-time
//! consumption. It is a pure in-memory structure; stores wrap it in a mutex
//! and add persistence around each mutation.
//!
//! Per identity, a code moves through
//! `Issued -> Active -> {Consumed | Expired | Evicted | Superseded}`,
//! and every right-hand state is terminal.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;

use crate::domain::entities::OtpRecord;

/// Default maximum number of outstanding records
pub const DEFAULT_CAPACITY: usize = 10;

/// Outcome of a verification attempt against the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The candidate matched; the record has been removed
    Consumed,
    /// A record exists for the identity but the candidate did not match
    Mismatch,
    /// A record existed for the identity but was purged as expired
    Expired,
    /// No record exists for the identity
    NotFound,
}

impl VerifyOutcome {
    /// Whether the attempt consumed a record
    pub fn is_consumed(self) -> bool {
        matches!(self, VerifyOutcome::Consumed)
    }
}

/// Insertion-ordered OTP collection with a hard capacity bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSet {
    records: Vec<OtpRecord>,
    capacity: usize,
}

impl OtpSet {
    /// Create an empty collection holding at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a collection from previously persisted records
    ///
    /// Insertion order is the order of `records`. If the persisted list is
    /// somehow larger than `capacity`, the oldest entries are dropped so the
    /// bound holds from the start.
    pub fn with_records(capacity: usize, mut records: Vec<OtpRecord>) -> Self {
        if records.len() > capacity {
            records.drain(..records.len() - capacity);
        }
        Self { records, capacity }
    }

    /// Number of records currently held, including not-yet-purged expired ones
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Configured capacity bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw view of the records in insertion order, for persistence
    pub fn records(&self) -> &[OtpRecord] {
        &self.records
    }

    /// Record a freshly issued code for `identity`
    ///
    /// Overwrite-wins: any existing record for the identity is removed first,
    /// even if it has not expired. If appending the new record exceeds the
    /// capacity, the single oldest-inserted record is evicted and returned.
    pub fn issue(
        &mut self,
        identity: &str,
        code: &str,
        ttl_minutes: i64,
        now: DateTime<Utc>,
    ) -> Option<OtpRecord> {
        self.records.retain(|r| r.identity != identity);
        self.records.push(OtpRecord::new(identity, code, ttl_minutes, now));

        if self.records.len() > self.capacity {
            Some(self.records.remove(0))
        } else {
            None
        }
    }

    /// Attempt to consume the code held for `identity`
    ///
    /// All expired records are purged first, across the whole collection, not
    /// just the queried identity. A successful match removes the record; a
    /// failed match leaves the record in place for further attempts.
    pub fn verify(&mut self, identity: &str, candidate: &str, now: DateTime<Utc>) -> VerifyOutcome {
        let had_record = self.records.iter().any(|r| r.identity == identity);
        self.purge_expired(now);

        let position = self
            .records
            .iter()
            .position(|r| r.identity == identity && code_matches(&r.code, candidate));

        if let Some(index) = position {
            self.records.remove(index);
            return VerifyOutcome::Consumed;
        }

        if self.records.iter().any(|r| r.identity == identity) {
            VerifyOutcome::Mismatch
        } else if had_record {
            VerifyOutcome::Expired
        } else {
            VerifyOutcome::NotFound
        }
    }

    /// Remove every record whose expiry has passed, returning how many went
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.is_expired(now));
        before - self.records.len()
    }

    /// Purge expired records and return a snapshot of what remains
    ///
    /// Diagnostic only: beyond the expiry purge, consumption state is left
    /// untouched.
    pub fn snapshot(&mut self, now: DateTime<Utc>) -> Vec<OtpRecord> {
        self.purge_expired(now);
        self.records.clone()
    }
}

impl Default for OtpSet {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Constant-time candidate comparison; length difference short-circuits,
/// which leaks nothing useful since code lengths are public.
fn code_matches(stored: &str, candidate: &str) -> bool {
    stored.len() == candidate.len() && constant_time_eq(stored.as_bytes(), candidate.as_bytes())
}
