//! Port traits the adapters implement.

mod provider;

pub use provider::{CreateIntentRequest, PaymentProvider};
