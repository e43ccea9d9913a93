//! # Gateway Client SDK
//!
//! A typed Rust client for the Payment Gateway API.

use gateway_types::{
    PaymentMethod, PaymentRequest, PaymentResponse, PaymentStatusResponse, RefundRequest,
    RefundResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payment Gateway API client.
pub struct GatewayClient {
    base_url: String,
    http: Client,
}

impl GatewayClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the gateway is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a payment intent.
    pub async fn pay(
        &self,
        amount: i64,
        currency: &str,
        payment_method: Option<String>,
    ) -> Result<PaymentResponse, ClientError> {
        let req = PaymentRequest {
            amount,
            currency: currency.to_string(),
            payment_method,
        };
        self.post("/pay", &req).await
    }

    /// Creates the gateway's fixture payment method.
    pub async fn payment_methods(&self) -> Result<PaymentMethod, ClientError> {
        self.get("/paymentMethods").await
    }

    /// Refunds a payment, optionally partially.
    pub async fn refund(
        &self,
        payment_id: &str,
        amount: Option<i64>,
    ) -> Result<RefundResponse, ClientError> {
        let req = RefundRequest {
            payment_id: payment_id.to_string(),
            amount,
        };
        self.post("/refund", &req).await
    }

    /// Looks up the status of a payment.
    pub async fn status(&self, payment_id: &str) -> Result<PaymentStatusResponse, ClientError> {
        self.get(&format!("/status/{}", payment_id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
