//! In-process payment record store.

use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;

use gateway_types::PaymentRecord;

/// Status written when a refund succeeds.
const REFUNDED: &str = "refunded";

/// Thread-safe, best-effort store of payments created by this process.
///
/// Eviction: entries older than the TTL (default 24h) are swept on every
/// insert. The store is advisory - nothing reads it for authorization
/// decisions, the provider is the source of truth - and it is lost on
/// restart.
pub struct PaymentStore {
    records: DashMap<String, PaymentRecord>,
    ttl: chrono::Duration,
}

impl Default for PaymentStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(24 * 60 * 60))
    }
}

impl PaymentStore {
    /// Creates a store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: DashMap::new(),
            ttl: chrono::Duration::seconds(ttl.as_secs() as i64),
        }
    }

    /// Records a payment, sweeping expired entries first.
    pub fn insert(&self, payment_id: impl Into<String>, record: PaymentRecord) {
        self.evict_expired();
        self.records.insert(payment_id.into(), record);
    }

    /// Returns a snapshot of the record for a payment, if still held.
    pub fn get(&self, payment_id: &str) -> Option<PaymentRecord> {
        self.records.get(payment_id).map(|record| record.clone())
    }

    /// Updates the recorded status for a payment. Missing ids are ignored.
    pub fn update_status(&self, payment_id: &str, status: &str) {
        if let Some(mut record) = self.records.get_mut(payment_id) {
            record.status = status.to_string();
        }
    }

    /// Marks a payment refunded and remembers the refund id.
    pub fn mark_refunded(&self, payment_id: &str, refund_id: &str) {
        if let Some(mut record) = self.records.get_mut(payment_id) {
            record.status = REFUNDED.to_string();
            record.refund_id = Some(refund_id.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn evict_expired(&self) {
        let cutoff = Utc::now() - self.ttl;
        self.records.retain(|_, record| record.created_at > cutoff);
    }
}
