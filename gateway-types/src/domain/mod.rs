//! Domain types for the payment gateway.

mod currency;
mod payment;
mod record;
mod webhook;

pub use currency::Currency;
pub use payment::{
    BillingDetails, CardDetails, CardSummary, PaymentIntent, PaymentIntentStatus, PaymentMethod,
    Refund,
};
pub use record::PaymentRecord;
pub use webhook::{WebhookEvent, WebhookEventData};
