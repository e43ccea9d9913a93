//! Payment Application Service
//!
//! Validates requests, delegates to the payment provider port, and reshapes
//! responses. Contains NO transport logic - pure orchestration.

use gateway_types::{
    AppError, CardDetails, CreateIntentRequest, Currency, DomainError, PaymentIntent,
    PaymentMethod, PaymentProvider, PaymentRecord, PaymentRequest, PaymentStatusResponse,
    ProviderError, Refund, WebhookEvent,
};

use crate::store::PaymentStore;

/// Smallest chargeable amount, in minor units.
pub const MIN_CHARGE_AMOUNT: i64 = 50;
/// Largest chargeable amount, in minor units.
pub const MAX_CHARGE_AMOUNT: i64 = 99_999_999;

/// Returns true iff the amount is within the chargeable range.
pub fn validate_amount(amount: i64) -> bool {
    (MIN_CHARGE_AMOUNT..=MAX_CHARGE_AMOUNT).contains(&amount)
}

/// Returns true iff the currency is on the allow-list, case-insensitively.
pub fn validate_currency(currency: &str) -> bool {
    currency.parse::<Currency>().is_ok()
}

/// Application service for gateway operations.
///
/// Generic over `P: PaymentProvider` - the adapter is injected at compile
/// time. This enables:
/// - Swapping providers without code changes
/// - Testing with an in-memory provider
/// - Compile-time checks for port implementation
pub struct PaymentService<P: PaymentProvider> {
    provider: P,
    records: PaymentStore,
    test_card: Option<CardDetails>,
}

impl<P: PaymentProvider> PaymentService<P> {
    /// Creates a new payment service with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            records: PaymentStore::default(),
            test_card: None,
        }
    }

    /// Replaces the record store (custom TTL).
    pub fn with_record_store(mut self, records: PaymentStore) -> Self {
        self.records = records;
        self
    }

    /// Configures the fixture card backing `get_payment_method`.
    pub fn with_test_card(mut self, card: CardDetails) -> Self {
        self.test_card = Some(card);
        self
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the record store.
    pub fn records(&self) -> &PaymentStore {
        &self.records
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a payment intent after validating amount and currency.
    ///
    /// Automatic payment-method resolution is requested unless the caller
    /// supplied an explicit method. An empty method string counts as
    /// "not supplied".
    pub async fn create_payment_intent(
        &self,
        req: PaymentRequest,
    ) -> Result<PaymentIntent, AppError> {
        if !validate_amount(req.amount) {
            return Err(DomainError::AmountOutOfRange(req.amount).into());
        }
        let currency: Currency = req
            .currency
            .parse()
            .map_err(|_| DomainError::UnsupportedCurrency(req.currency.clone()))?;

        let payment_method = req.payment_method.filter(|method| !method.is_empty());
        let automatic = payment_method.is_none();

        let intent = self
            .provider
            .create_payment_intent(CreateIntentRequest {
                amount: req.amount,
                currency,
                payment_method,
                automatic_payment_methods: automatic,
            })
            .await?;

        self.records.insert(
            intent.id.clone(),
            PaymentRecord::new(intent.status.as_str(), req.amount, currency),
        );

        Ok(intent)
    }

    /// Looks up an intent and returns the normalized status projection.
    pub async fn get_payment_status(
        &self,
        payment_id: &str,
    ) -> Result<PaymentStatusResponse, AppError> {
        let intent = self.retrieve_intent(payment_id).await?;

        Ok(PaymentStatusResponse {
            id: intent.id,
            status: intent.status,
            amount: intent.amount,
            currency: intent.currency,
        })
    }

    /// Refunds a succeeded payment, optionally partially.
    ///
    /// The intent is fetched first; anything other than `succeeded` is
    /// rejected before the provider's refund endpoint is touched.
    pub async fn refund_payment(
        &self,
        payment_id: &str,
        amount: Option<i64>,
    ) -> Result<Refund, AppError> {
        let intent = self.retrieve_intent(payment_id).await?;

        if !intent.status.is_refundable() {
            return Err(DomainError::NotRefundable {
                status: intent.status,
            }
            .into());
        }
        if let Some(amount) = amount {
            if !validate_amount(amount) || amount > intent.amount {
                return Err(DomainError::AmountOutOfRange(amount).into());
            }
        }

        let refund = self.provider.create_refund(payment_id, amount).await?;

        self.records.mark_refunded(payment_id, &refund.id);

        Ok(refund)
    }

    /// Creates a payment method from the configured fixture card.
    ///
    /// Demo helper, not a registration flow.
    pub async fn get_payment_method(&self) -> Result<PaymentMethod, AppError> {
        let card = self
            .test_card
            .as_ref()
            .ok_or_else(|| AppError::Internal("No test card configured".into()))?;

        Ok(self.provider.create_payment_method(card).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Webhooks
    // ─────────────────────────────────────────────────────────────────────────────

    /// Checks a webhook payload against its signature header.
    pub fn verify_webhook_signature(&self, payload: &[u8], signature_header: &str) -> bool {
        self.provider
            .verify_webhook_signature(payload, signature_header)
    }

    /// Applies a verified webhook event to the record store, best-effort.
    ///
    /// Returns the event type when the payload parses.
    pub fn handle_webhook_event(&self, payload: &[u8]) -> Option<String> {
        let event: WebhookEvent = serde_json::from_slice(payload).ok()?;

        if event.event_type.starts_with("payment_intent.") {
            if let (Some(id), Some(status)) = (
                event.data.object.get("id").and_then(|value| value.as_str()),
                event.data.object.get("status").and_then(|value| value.as_str()),
            ) {
                self.records.update_status(id, status);
            }
        }

        Some(event.event_type)
    }

    /// Retrieves an intent, remapping the provider's "no such object" error
    /// to a domain not-found.
    async fn retrieve_intent(&self, payment_id: &str) -> Result<PaymentIntent, AppError> {
        if payment_id.trim().is_empty() {
            return Err(DomainError::InvalidPaymentId.into());
        }

        self.provider
            .retrieve_payment_intent(payment_id)
            .await
            .map_err(|err| match err {
                ProviderError::NotFound(_) => {
                    DomainError::PaymentNotFound(payment_id.to_string()).into()
                }
                e => e.into(),
            })
    }
}
