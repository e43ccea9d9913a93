//! Webhook signature verification.
//!
//! Stripe signs each webhook delivery with HMAC-SHA256 over
//! `"{timestamp}.{body}"` and ships the result in the `Stripe-Signature`
//! header as `t=<unix>,v1=<hex>[,v1=<hex>...]`. Multiple `v1` entries occur
//! while a signing secret is being rolled.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Reject signatures whose timestamp is further than this from now.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Parsed `Stripe-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    pub timestamp: i64,
    pub signatures: Vec<String>,
}

/// Parses a `t=...,v1=...` header.
///
/// Unknown schemes (`v0=...`) are skipped; the result requires a timestamp
/// and at least one `v1` signature.
pub fn parse_signature_header(header: &str) -> Option<SignatureHeader> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let (key, value) = part.trim().split_once('=')?;
        match key {
            "t" => timestamp = Some(value.parse::<i64>().ok()?),
            "v1" => signatures.push(value.to_string()),
            _ => {}
        }
    }

    if signatures.is_empty() {
        return None;
    }

    Some(SignatureHeader {
        timestamp: timestamp?,
        signatures,
    })
}

/// Computes the hex HMAC-SHA256 signature for a timestamped payload.
pub fn sign_payload(timestamp: i64, payload: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a payload against its signature header using constant-time
/// comparison. Any failure mode yields false.
pub fn verify(payload: &[u8], header: &str, secret: &str, tolerance_secs: i64) -> bool {
    let Some(parsed) = parse_signature_header(header) else {
        return false;
    };

    let now = chrono::Utc::now().timestamp();
    if (now - parsed.timestamp).abs() > tolerance_secs {
        return false;
    }

    let expected = sign_payload(parsed.timestamp, payload, secret);
    parsed
        .signatures
        .iter()
        .any(|sig| expected.as_bytes().ct_eq(sig.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test123secret456";
    const PAYLOAD: &[u8] = br#"{"type":"payment_intent.succeeded"}"#;

    fn current_timestamp() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn signed_header(payload: &[u8], secret: &str, timestamp: i64) -> String {
        format!("t={},v1={}", timestamp, sign_payload(timestamp, payload, secret))
    }

    #[test]
    fn test_valid_signature_accepted() {
        let header = signed_header(PAYLOAD, SECRET, current_timestamp());
        assert!(verify(PAYLOAD, &header, SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let header = signed_header(PAYLOAD, "wrong_secret", current_timestamp());
        assert!(!verify(PAYLOAD, &header, SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let header = signed_header(PAYLOAD, SECRET, current_timestamp());
        assert!(!verify(
            br#"{"type":"payment_intent.succeeded","hacked":true}"#,
            &header,
            SECRET,
            DEFAULT_TOLERANCE_SECS
        ));
    }

    #[test]
    fn test_stale_timestamp_rejected() {
        // 10 minutes old, beyond the 5-minute tolerance
        let header = signed_header(PAYLOAD, SECRET, current_timestamp() - 600);
        assert!(!verify(PAYLOAD, &header, SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_missing_timestamp_rejected() {
        let signature = sign_payload(current_timestamp(), PAYLOAD, SECRET);
        let header = format!("v1={}", signature);
        assert!(!verify(PAYLOAD, &header, SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_malformed_header_rejected() {
        assert!(!verify(PAYLOAD, "", SECRET, DEFAULT_TOLERANCE_SECS));
        assert!(!verify(PAYLOAD, "not a header", SECRET, DEFAULT_TOLERANCE_SECS));
        assert!(!verify(PAYLOAD, "t=abc,v1=zzz", SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_second_v1_entry_accepted_during_secret_roll() {
        let timestamp = current_timestamp();
        let good = sign_payload(timestamp, PAYLOAD, SECRET);
        let stale = sign_payload(timestamp, PAYLOAD, "previous_secret");
        let header = format!("t={},v1={},v1={}", timestamp, stale, good);
        assert!(verify(PAYLOAD, &header, SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_unknown_scheme_entries_ignored() {
        let timestamp = current_timestamp();
        let header = format!(
            "t={},v0=legacy,v1={}",
            timestamp,
            sign_payload(timestamp, PAYLOAD, SECRET)
        );
        assert!(verify(PAYLOAD, &header, SECRET, DEFAULT_TOLERANCE_SECS));
    }

    #[test]
    fn test_parse_extracts_all_v1_entries() {
        let parsed = parse_signature_header("t=12345,v1=aaa,v1=bbb").unwrap();
        assert_eq!(parsed.timestamp, 12345);
        assert_eq!(parsed.signatures, vec!["aaa".to_string(), "bbb".to_string()]);
    }
}
