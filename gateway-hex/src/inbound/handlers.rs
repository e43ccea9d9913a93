//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use gateway_types::{
    AppError, PaymentProvider, PaymentRequest, PaymentResponse, RefundRequest, RefundResponse,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<P: PaymentProvider> {
    pub service: PaymentService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Provider(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({ "detail": message });

        (status, Json(body)).into_response()
    }
}

/// Liveness banner.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Payment gateway is running" }))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a payment intent.
#[tracing::instrument(skip(state, req), fields(amount = req.amount, currency = %req.currency))]
pub async fn pay<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let intent = state.service.create_payment_intent(req).await?;

    Ok(Json(PaymentResponse {
        payment_id: intent.id,
        status: intent.status,
        client_secret: intent.client_secret,
    }))
}

/// Create the fixture payment method. Demo-only endpoint.
#[tracing::instrument(skip(state))]
pub async fn payment_methods<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let method = state.service.get_payment_method().await?;
    Ok(Json(method))
}

/// Refund a payment.
#[tracing::instrument(skip(state, req), fields(payment_id = %req.payment_id))]
pub async fn refund<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<RefundRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let refund = state
        .service
        .refund_payment(&req.payment_id, req.amount)
        .await?;

    Ok(Json(RefundResponse {
        refund_id: refund.id,
        status: refund.status,
    }))
}

/// Look up the status of a payment.
#[tracing::instrument(skip(state), fields(payment_id = %payment_id))]
pub async fn status<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state.service.get_payment_status(&payment_id).await?;
    Ok(Json(status))
}

/// Receive a provider webhook.
///
/// The payload is only acknowledged after its signature verifies against
/// the configured signing secret. Verified `payment_intent.*` events update
/// the local record store best-effort.
#[tracing::instrument(skip(state, headers, body))]
pub async fn webhook<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !state.service.verify_webhook_signature(&body, signature) {
        return Err(AppError::Validation("Invalid webhook signature".into()).into());
    }

    if let Some(event_type) = state.service.handle_webhook_event(&body) {
        tracing::info!(event = %event_type, "webhook event received");
    }

    Ok(Json(serde_json::json!({ "received": true })))
}
