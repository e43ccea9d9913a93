//! Stripe webhook event envelope.

use serde::Deserialize;

/// Event envelope posted by the provider to the webhook endpoint.
///
/// `data.object` stays untyped: the gateway only inspects the fields it
/// needs per event type.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookEventData,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub livemode: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEventData {
    pub object: serde_json::Value,
}
