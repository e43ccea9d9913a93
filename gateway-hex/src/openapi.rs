//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use gateway_types::domain::{
    BillingDetails, CardSummary, Currency, PaymentIntentStatus, PaymentMethod,
};
use gateway_types::dto::{
    PaymentRequest, PaymentResponse, PaymentStatusResponse, RefundRequest, RefundResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service banner", body = inline(serde_json::Value), example = json!({"message": "Payment gateway is running"}))
    )
)]
async fn root() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create a payment intent
#[utoipa::path(
    post,
    path = "/pay",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentResponse),
        (status = 400, description = "Amount or currency rejected"),
        (status = 502, description = "Provider error")
    )
)]
async fn pay() {}

/// Create the fixture payment method (demo-only)
#[utoipa::path(
    get,
    path = "/paymentMethods",
    tag = "payments",
    responses(
        (status = 200, description = "Tokenized fixture card", body = PaymentMethod),
        (status = 500, description = "No test card configured"),
        (status = 502, description = "Provider error")
    )
)]
async fn payment_methods() {}

/// Refund a succeeded payment
#[utoipa::path(
    post,
    path = "/refund",
    tag = "payments",
    request_body = RefundRequest,
    responses(
        (status = 200, description = "Refund issued", body = RefundResponse),
        (status = 400, description = "Payment is not refundable"),
        (status = 404, description = "Payment not found"),
        (status = 502, description = "Provider error")
    )
)]
async fn refund() {}

/// Look up payment status
#[utoipa::path(
    get,
    path = "/status/{payment_id}",
    tag = "payments",
    params(
        ("payment_id" = String, Path, description = "Provider-issued payment id")
    ),
    responses(
        (status = 200, description = "Payment status", body = PaymentStatusResponse),
        (status = 404, description = "Payment not found"),
        (status = 502, description = "Provider error")
    )
)]
async fn status() {}

/// Receive a provider webhook
#[utoipa::path(
    post,
    path = "/webhook",
    tag = "webhooks",
    responses(
        (status = 200, description = "Event acknowledged", body = inline(serde_json::Value), example = json!({"received": true})),
        (status = 400, description = "Signature verification failed")
    )
)]
async fn webhook() {}

/// OpenAPI documentation for the Payment Gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Gateway API",
        version = "1.0.0",
        description = "A thin HTTP facade over the Stripe API: validated payment creation, refunds, status lookups, and signed webhook intake.",
        license(name = "MIT"),
    ),
    paths(
        root,
        health,
        pay,
        payment_methods,
        refund,
        status,
        webhook,
    ),
    components(
        schemas(
            PaymentRequest,
            PaymentResponse,
            RefundRequest,
            RefundResponse,
            PaymentStatusResponse,
            PaymentIntentStatus,
            PaymentMethod,
            CardSummary,
            BillingDetails,
            Currency,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment creation, refunds, and status lookups"),
        (name = "webhooks", description = "Provider webhook intake"),
    )
)]
pub struct ApiDoc;
