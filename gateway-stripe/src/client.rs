//! Stripe REST client.
//!
//! One network call per operation, no retries, no request timeout - a hung
//! provider call hangs that request only.

use gateway_types::{
    CardDetails, CreateIntentRequest, PaymentIntent, PaymentMethod, PaymentProvider,
    ProviderError, Refund,
};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::signature;

const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Stripe API client.
///
/// Authenticates every request with the secret key as a bearer token and
/// sends parameters form-encoded, the way Stripe's own client libraries do.
#[derive(Clone)]
pub struct StripeClient {
    http: Client,
    api_base: String,
    secret_key: String,
    webhook_secret: Option<String>,
}

impl StripeClient {
    /// Creates a client for the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            secret_key: secret_key.into(),
            webhook_secret: None,
        }
    }

    /// Overrides the API base URL (sandbox proxies, stripe-mock).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the webhook signing secret.
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let resp = self
            .http
            .post(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.secret_key)
            .form(params)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        let resp = self
            .http
            .get(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ProviderError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&body)
                .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
        } else {
            Err(parse_api_error(status.as_u16(), &body))
        }
    }
}

/// Stripe error envelope: `{"error": {"type", "code", "message", ...}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Maps a non-2xx Stripe response onto a typed provider error.
///
/// `resource_missing` is Stripe's "no such object" code; it becomes
/// `NotFound` so callers can remap it to a domain error.
pub(crate) fn parse_api_error(status: u16, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_default();

    let message = detail
        .message
        .unwrap_or_else(|| format!("HTTP {} from provider", status));

    if status == 404 || detail.code.as_deref() == Some("resource_missing") {
        ProviderError::NotFound(message)
    } else {
        ProviderError::Api {
            status,
            code: detail.code,
            message,
        }
    }
}

#[async_trait::async_trait]
impl PaymentProvider for StripeClient {
    #[tracing::instrument(skip(self, req), fields(amount = req.amount, currency = %req.currency))]
    async fn create_payment_intent(
        &self,
        req: CreateIntentRequest,
    ) -> Result<PaymentIntent, ProviderError> {
        let mut params = vec![
            ("amount", req.amount.to_string()),
            ("currency", req.currency.to_string()),
        ];
        if let Some(pm) = req.payment_method {
            params.push(("payment_method", pm));
        }
        if req.automatic_payment_methods {
            params.push(("automatic_payment_methods[enabled]", "true".to_string()));
        }

        self.post_form("/v1/payment_intents", &params).await
    }

    #[tracing::instrument(skip(self))]
    async fn retrieve_payment_intent(
        &self,
        payment_id: &str,
    ) -> Result<PaymentIntent, ProviderError> {
        self.get_json(&format!("/v1/payment_intents/{}", payment_id))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn create_refund(
        &self,
        payment_id: &str,
        amount: Option<i64>,
    ) -> Result<Refund, ProviderError> {
        let mut params = vec![("payment_intent", payment_id.to_string())];
        if let Some(amount) = amount {
            params.push(("amount", amount.to_string()));
        }

        self.post_form("/v1/refunds", &params).await
    }

    #[tracing::instrument(skip(self, card))]
    async fn create_payment_method(
        &self,
        card: &CardDetails,
    ) -> Result<PaymentMethod, ProviderError> {
        let mut params = vec![
            ("type", "card".to_string()),
            ("card[number]", card.number.clone()),
            ("card[exp_month]", card.exp_month.to_string()),
            ("card[exp_year]", card.exp_year.to_string()),
            ("card[cvc]", card.cvc.clone()),
        ];
        if let Some(name) = &card.holder_name {
            params.push(("billing_details[name]", name.clone()));
        }

        self.post_form("/v1/payment_methods", &params).await
    }

    fn verify_webhook_signature(&self, payload: &[u8], signature_header: &str) -> bool {
        match &self.webhook_secret {
            Some(secret) => signature::verify(
                payload,
                signature_header,
                secret,
                signature::DEFAULT_TOLERANCE_SECS,
            ),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        let client = StripeClient::new("sk_test_abc");
        assert_eq!(client.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let client = StripeClient::new("sk_test_abc").with_api_base("http://localhost:12111/");
        assert_eq!(client.api_base, "http://localhost:12111");
    }

    #[test]
    fn test_resource_missing_maps_to_not_found() {
        let body = r#"{"error": {"type": "invalid_request_error", "code": "resource_missing", "message": "No such payment_intent: 'pi_nope'"}}"#;
        let err = parse_api_error(400, body);
        assert!(matches!(err, ProviderError::NotFound(msg) if msg.contains("pi_nope")));
    }

    #[test]
    fn test_http_404_maps_to_not_found() {
        let err = parse_api_error(404, "{}");
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[test]
    fn test_card_error_maps_to_api() {
        let body = r#"{"error": {"type": "card_error", "code": "card_declined", "message": "Your card was declined."}}"#;
        let err = parse_api_error(402, body);
        match err {
            ProviderError::Api { status, code, message } => {
                assert_eq!(status, 402);
                assert_eq!(code.as_deref(), Some("card_declined"));
                assert!(message.contains("declined"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_body_keeps_status() {
        let err = parse_api_error(500, "<html>gateway timeout</html>");
        assert!(matches!(
            err,
            ProviderError::Api { status: 500, code: None, .. }
        ));
    }

    #[test]
    fn test_no_webhook_secret_means_never_verified() {
        let client = StripeClient::new("sk_test_abc");
        assert!(!client.verify_webhook_signature(b"{}", "t=1,v1=deadbeef"));
    }
}
