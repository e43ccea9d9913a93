//! Error types for the payment gateway.

use crate::domain::PaymentIntentStatus;

/// Domain-level errors (validation failures caught before any remote call).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount {0} is outside the chargeable range")]
    AmountOutOfRange(i64),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Payment id must be a non-empty string")]
    InvalidPaymentId,

    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    #[error("Payment in status {status} cannot be refunded")]
    NotRefundable { status: PaymentIntentStatus },
}

/// Errors surfaced by the payment provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unparseable provider response: {0}")]
    InvalidResponse(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes: Validation 400, NotFound 404,
/// Provider 502, Internal 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payment provider error: {0}")]
    Provider(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PaymentNotFound(id) => {
                AppError::NotFound(format!("Payment not found: {}", id))
            }
            e => AppError::Validation(e.to_string()),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(msg) => AppError::NotFound(msg),
            ProviderError::InvalidResponse(msg) => AppError::Internal(msg),
            e => AppError::Provider(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_validation_maps_to_validation() {
        let err: AppError = DomainError::AmountOutOfRange(49).into();
        assert!(matches!(err, AppError::Validation(_)));

        let err: AppError = DomainError::UnsupportedCurrency("xyz".into()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_domain_not_found_maps_to_not_found() {
        let err: AppError = DomainError::PaymentNotFound("pi_missing".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_provider_not_found_maps_to_not_found() {
        let err: AppError = ProviderError::NotFound("No such payment_intent".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_provider_api_error_maps_to_provider() {
        let err: AppError = ProviderError::Api {
            status: 402,
            code: Some("card_declined".into()),
            message: "Your card was declined.".into(),
        }
        .into();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[test]
    fn test_not_refundable_message_names_the_status() {
        let err = DomainError::NotRefundable {
            status: PaymentIntentStatus::RequiresPaymentMethod,
        };
        assert!(err.to_string().contains("requires_payment_method"));
    }
}
