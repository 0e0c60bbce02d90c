//! Signature verification for incoming Kapso webhooks
//!
//! When a webhook secret is configured, Kapso signs every payload with
//! HMAC-SHA256 over the raw body and sends the hex digest in the
//! `X-Webhook-Signature` header. A `sha256=` prefix is tolerated.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// MAC of a raw webhook body keyed with the webhook secret
fn payload_mac(payload: &[u8], secret: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload);
    Some(mac)
}

/// Digest bytes carried by a signature header, `None` when not hex
fn decode_header(signature_header: &str) -> Option<Vec<u8>> {
    let signature_hex = signature_header.trim();
    let signature_hex = signature_hex
        .strip_prefix("sha256=")
        .unwrap_or(signature_hex);

    hex::decode(signature_hex).ok()
}

/// Checks a signature header against the raw body, in constant time
pub fn verify_signature(signature_header: &str, payload: &[u8], secret: &str) -> bool {
    let Some(signature) = decode_header(signature_header) else {
        logfire::warn!("Webhook signature header is not a hex digest");
        return false;
    };

    let is_valid = payload_mac(payload, secret)
        .is_some_and(|mac| mac.verify_slice(&signature).is_ok());

    if !is_valid {
        logfire::warn!("Webhook signature does not match payload");
    }

    is_valid
}

/// Hex HMAC-SHA256 of `payload`, as Kapso sends it
#[cfg(test)]
pub fn sign(payload: &[u8], secret: &str) -> String {
    let mac = payload_mac(payload, secret).unwrap();
    hex::encode(mac.finalize().into_bytes())
}
