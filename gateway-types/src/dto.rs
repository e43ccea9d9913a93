//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PaymentIntentStatus;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentRequest {
    /// Amount in the smallest currency unit (e.g., cents)
    #[schema(example = 1000)]
    pub amount: i64,
    /// ISO currency code, case-insensitive
    #[serde(default = "default_currency")]
    #[schema(example = "usd")]
    pub currency: String,
    /// Existing provider payment-method id; omit to let the provider
    /// resolve one automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

fn default_currency() -> String {
    "usd".to_string()
}

/// Response after creating a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    /// Provider-issued payment id
    #[schema(example = "pi_3Nv1cd2eZvKYlo2C1xyzABCD")]
    pub payment_id: String,
    pub status: PaymentIntentStatus,
    /// Secret the frontend uses to confirm the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Refund DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to refund a payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefundRequest {
    /// Provider-issued payment id to refund
    #[schema(example = "pi_3Nv1cd2eZvKYlo2C1xyzABCD")]
    pub payment_id: String,
    /// Partial refund amount in minor units; omit for a full refund
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Response after a refund was issued.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefundResponse {
    /// Provider-issued refund id
    #[schema(example = "re_3Nv1cd2eZvKYlo2C1xyzABCD")]
    pub refund_id: String,
    /// Refund status as reported by the provider
    pub status: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Status DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Normalized status projection of a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentStatusResponse {
    pub id: String,
    pub status: PaymentIntentStatus,
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Lowercase ISO currency code
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_request_defaults() {
        let req: PaymentRequest = serde_json::from_str(r#"{"amount": 1000}"#).unwrap();
        assert_eq!(req.amount, 1000);
        assert_eq!(req.currency, "usd");
        assert!(req.payment_method.is_none());
    }

    #[test]
    fn test_payment_request_explicit_method() {
        let req: PaymentRequest =
            serde_json::from_str(r#"{"amount": 500, "currency": "eur", "payment_method": "pm_1"}"#)
                .unwrap();
        assert_eq!(req.currency, "eur");
        assert_eq!(req.payment_method.as_deref(), Some("pm_1"));
    }

    #[test]
    fn test_refund_request_amount_is_optional() {
        let req: RefundRequest = serde_json::from_str(r#"{"payment_id": "pi_1"}"#).unwrap();
        assert_eq!(req.payment_id, "pi_1");
        assert!(req.amount.is_none());
    }
}
