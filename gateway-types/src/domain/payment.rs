//! Projections of the Stripe objects the gateway touches.
//!
//! These are deliberately partial: only the fields the gateway reads or
//! forwards are modeled, everything else stays with the provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a payment intent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
}

impl PaymentIntentStatus {
    /// The wire form of the status (`requires_payment_method`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentIntentStatus::RequiresPaymentMethod => "requires_payment_method",
            PaymentIntentStatus::RequiresConfirmation => "requires_confirmation",
            PaymentIntentStatus::RequiresAction => "requires_action",
            PaymentIntentStatus::Processing => "processing",
            PaymentIntentStatus::RequiresCapture => "requires_capture",
            PaymentIntentStatus::Canceled => "canceled",
            PaymentIntentStatus::Succeeded => "succeeded",
        }
    }

    /// Only fully captured intents can be refunded.
    pub fn is_refundable(&self) -> bool {
        matches!(self, PaymentIntentStatus::Succeeded)
    }
}

impl fmt::Display for PaymentIntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal projection of a Stripe PaymentIntent.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentIntent {
    /// Provider-issued id (`pi_...`)
    pub id: String,
    pub status: PaymentIntentStatus,
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Lowercase ISO currency code as reported by the provider
    pub currency: String,
    /// Secret handed to the frontend to confirm the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Unix timestamp of creation on the provider side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

/// Minimal projection of a Stripe Refund.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Refund {
    /// Provider-issued id (`re_...`)
    pub id: String,
    /// `pending`, `succeeded`, `failed` or `canceled`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The intent this refund was issued against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<String>,
}

/// Minimal projection of a Stripe PaymentMethod.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentMethod {
    /// Provider-issued id (`pm_...`)
    pub id: String,
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

/// Card summary as tokenized by the provider. Never the full number.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CardSummary {
    pub brand: String,
    pub last4: String,
    pub exp_month: i64,
    pub exp_year: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BillingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The externally-configured fixture card used by the demo
/// payment-method endpoint.
///
/// Values come from the environment; the raw number must never appear in
/// source or logs.
#[derive(Clone)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    pub cvc: String,
    pub holder_name: Option<String>,
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last4 = if self.number.len() >= 4 {
            &self.number[self.number.len() - 4..]
        } else {
            "****"
        };
        f.debug_struct("CardDetails")
            .field("number", &format_args!("****{}", last4))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &"***")
            .field("holder_name", &self.holder_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: PaymentIntentStatus =
            serde_json::from_str("\"requires_payment_method\"").unwrap();
        assert_eq!(status, PaymentIntentStatus::RequiresPaymentMethod);
        assert_eq!(
            serde_json::to_string(&PaymentIntentStatus::Succeeded).unwrap(),
            "\"succeeded\""
        );
    }

    #[test]
    fn test_only_succeeded_is_refundable() {
        assert!(PaymentIntentStatus::Succeeded.is_refundable());
        assert!(!PaymentIntentStatus::RequiresPaymentMethod.is_refundable());
        assert!(!PaymentIntentStatus::Processing.is_refundable());
        assert!(!PaymentIntentStatus::Canceled.is_refundable());
    }

    #[test]
    fn test_intent_deserializes_from_provider_shape() {
        let body = r#"{
            "id": "pi_123",
            "status": "succeeded",
            "amount": 1000,
            "currency": "usd",
            "client_secret": "pi_123_secret_abc",
            "created": 1700000000
        }"#;
        let intent: PaymentIntent = serde_json::from_str(body).unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.status, PaymentIntentStatus::Succeeded);
        assert_eq!(intent.amount, 1000);
        assert_eq!(intent.client_secret.as_deref(), Some("pi_123_secret_abc"));
    }

    #[test]
    fn test_card_details_debug_redacts_number() {
        let card = CardDetails {
            number: "4000056655665556".to_string(),
            exp_month: 12,
            exp_year: 2034,
            cvc: "123".to_string(),
            holder_name: Some("Jane Doe".to_string()),
        };
        let debug = format!("{:?}", card);
        assert!(!debug.contains("4000056655665556"));
        assert!(debug.contains("5556"));
        assert!(!debug.contains("\"123\""));
    }
}
