//! # Gateway Hex
//!
//! Application service layer and HTTP adapter for the payment gateway.
//!
//! ## Architecture
//!
//! - `service` - validation plus call-and-reshape orchestration
//! - `store` - ephemeral payment record store
//! - `inbound` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: PaymentProvider`, allowing the Stripe
//! adapter or a test double to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;
pub mod store;


pub use service::{
    MAX_CHARGE_AMOUNT, MIN_CHARGE_AMOUNT, PaymentService, validate_amount, validate_currency,
};
pub use store::PaymentStore;
