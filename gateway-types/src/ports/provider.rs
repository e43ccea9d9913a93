//! Payment provider port.
//!
//! The outbound port of the hexagonal architecture. The Stripe adapter
//! implements this trait; tests substitute a mock.

use crate::domain::{CardDetails, Currency, PaymentIntent, PaymentMethod, Refund};
use crate::error::ProviderError;

/// Parameters for creating a payment intent with the provider.
#[derive(Debug, Clone)]
pub struct CreateIntentRequest {
    /// Amount in the smallest currency unit
    pub amount: i64,
    pub currency: Currency,
    /// Explicit payment method to attach, if the caller supplied one
    pub payment_method: Option<String>,
    /// Ask the provider to resolve a payment method itself
    pub automatic_payment_methods: bool,
}

/// The remote payment provider, reached synchronously per request.
///
/// Implementations perform one network call per method, no retries.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync + 'static {
    /// Creates a payment intent.
    async fn create_payment_intent(
        &self,
        req: CreateIntentRequest,
    ) -> Result<PaymentIntent, ProviderError>;

    /// Retrieves a payment intent by its provider id.
    async fn retrieve_payment_intent(
        &self,
        payment_id: &str,
    ) -> Result<PaymentIntent, ProviderError>;

    /// Issues a refund against a payment intent. `None` refunds in full.
    async fn create_refund(
        &self,
        payment_id: &str,
        amount: Option<i64>,
    ) -> Result<Refund, ProviderError>;

    /// Tokenizes a card into a payment method.
    async fn create_payment_method(
        &self,
        card: &CardDetails,
    ) -> Result<PaymentMethod, ProviderError>;

    /// Checks a webhook payload against its signature header.
    ///
    /// Must return false on every failure mode, including a missing
    /// signing secret.
    fn verify_webhook_signature(&self, payload: &[u8], signature_header: &str) -> bool;
}
