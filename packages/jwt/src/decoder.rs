//! Unverified token decoding
//!
//! Splits a compact token and decodes its header and payload for display.
//! The signature is never checked, so nothing returned here may be trusted.

use crate::error::{JwtError, JwtResult};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::Value;

/// Header and payload of a token, decoded without verification
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    /// Decoded header object
    pub header: Value,
    /// Decoded payload object
    pub payload: Value,
}

impl DecodedToken {
    /// Subject claim
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.payload.get("sub").and_then(Value::as_str)
    }

    /// Issued-at claim
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.payload.get("iat").and_then(Value::as_i64)
    }

    /// Expiration claim
    #[must_use]
    pub fn expiration(&self) -> Option<i64> {
        self.payload.get("exp").and_then(Value::as_i64)
    }

    /// Header algorithm
    #[must_use]
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get("alg").and_then(Value::as_str)
    }
}

/// Decode a compact token without verifying its signature
pub fn decode_unverified(token: &str) -> JwtResult<DecodedToken> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(JwtError::invalid_token(&format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    }

    Ok(DecodedToken {
        header: decode_segment(parts[0], "header")?,
        payload: decode_segment(parts[1], "payload")?,
    })
}

fn decode_segment(segment: &str, name: &str) -> JwtResult<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| JwtError::invalid_token(&format!("{name} is not base64url: {e}")))?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::invalid_token(&format!("{name} is not JSON: {e}")))?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(JwtError::invalid_token(&format!("{name} is not a JSON object")))
    }
}
