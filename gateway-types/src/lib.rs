//! # Gateway Types
//!
//! Domain types and port traits for the Stripe payment gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, PaymentIntent, PaymentRecord)
//! - `ports/` - The provider port the Stripe adapter implements
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain, provider, and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BillingDetails, CardDetails, CardSummary, Currency, PaymentIntent, PaymentIntentStatus,
    PaymentMethod, PaymentRecord, Refund, WebhookEvent,
};
pub use dto::*;
pub use error::{AppError, DomainError, ProviderError};
pub use ports::{CreateIntentRequest, PaymentProvider};
