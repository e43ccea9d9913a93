//! Configuration loading from environment.

use std::env;

use gateway_types::CardDetails;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: Option<String>,
    pub stripe_api_base: Option<String>,
    pub rate_limit_per_minute: u32,
    pub test_card: Option<CardDetails>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Startup fails when `STRIPE_SECRET_KEY` is absent or does not carry
    /// the provider's secret-key prefix.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")
            .map_err(|_| anyhow::anyhow!("STRIPE_SECRET_KEY environment variable is required"))?;
        validate_secret_key(&stripe_secret_key)?;

        let stripe_webhook_secret = env::var("STRIPE_WEBHOOK_SECRET").ok();
        let stripe_api_base = env::var("STRIPE_API_BASE").ok();

        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()?;

        let test_card = load_test_card()?;

        Ok(Self {
            port,
            stripe_secret_key,
            stripe_webhook_secret,
            stripe_api_base,
            rate_limit_per_minute,
            test_card,
        })
    }
}

/// Stripe hands out secret keys prefixed `sk_` (and `sk_test_` in sandbox).
pub(crate) fn validate_secret_key(key: &str) -> anyhow::Result<()> {
    if !key.starts_with("sk_") {
        anyhow::bail!(
            "STRIPE_SECRET_KEY does not look like a Stripe secret key (expected an sk_ prefix)"
        );
    }
    Ok(())
}

/// The fixture card comes entirely from the environment; the gateway ships
/// no card numbers of its own.
fn load_test_card() -> anyhow::Result<Option<CardDetails>> {
    let number = match env::var("TEST_CARD_NUMBER") {
        Ok(number) => number,
        Err(_) => return Ok(None),
    };

    let exp_month = required_card_var("TEST_CARD_EXP_MONTH")?.parse()?;
    let exp_year = required_card_var("TEST_CARD_EXP_YEAR")?.parse()?;
    let cvc = required_card_var("TEST_CARD_CVC")?;
    let holder_name = env::var("TEST_CARD_HOLDER").ok();

    Ok(Some(CardDetails {
        number,
        exp_month,
        exp_year,
        cvc,
        holder_name,
    }))
}

fn required_card_var(name: &str) -> anyhow::Result<String> {
    env::var(name)
        .map_err(|_| anyhow::anyhow!("{} must be set together with TEST_CARD_NUMBER", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_prefix_accepted() {
        assert!(validate_secret_key("sk_test_abc123").is_ok());
        assert!(validate_secret_key("sk_live_abc123").is_ok());
    }

    #[test]
    fn test_publishable_key_rejected() {
        assert!(validate_secret_key("pk_test_abc123").is_err());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(validate_secret_key("").is_err());
    }
}
