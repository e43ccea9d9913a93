//! Ephemeral per-process payment records.

use chrono::{DateTime, Utc};

use super::currency::Currency;

/// Best-effort record of a payment created through this process.
///
/// Never consulted for authorization decisions - the provider is the source
/// of truth. Lost on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    /// Last observed intent status, or `"refunded"` after a refund
    pub status: String,
    pub amount: i64,
    pub currency: Currency,
    pub created_at: DateTime<Utc>,
    pub refund_id: Option<String>,
}

impl PaymentRecord {
    pub fn new(status: impl Into<String>, amount: i64, currency: Currency) -> Self {
        Self {
            status: status.into(),
            amount,
            currency,
            created_at: Utc::now(),
            refund_id: None,
        }
    }
}
