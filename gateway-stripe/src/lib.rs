//! # Gateway Stripe
//!
//! Outbound adapter for the payment gateway: a Stripe REST client
//! implementing the `PaymentProvider` port, plus webhook signature
//! verification.
//!
//! The client speaks Stripe's form-encoded wire protocol directly over
//! reqwest; responses deserialize into the minimal projections defined in
//! `gateway-types`.

pub mod client;
pub mod signature;

pub use client::StripeClient;
