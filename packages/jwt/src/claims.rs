//! Payload parsing and timing claim defaulting.

use crate::error::{JwtError, JwtResult};
use serde_json::{Map, Value};

/// Issued-at claim name.
pub const ISSUED_AT: &str = "iat";

/// Expiration claim name.
pub const EXPIRATION: &str = "exp";

/// Parse the operator supplied payload text.
///
/// The text must decode to a JSON object; arrays and scalars are rejected.
pub fn parse_payload(text: &str) -> JwtResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| JwtError::invalid_payload(&format!("Invalid JSON payload: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => {
            tracing::debug!(kind = json_kind(&other), "rejected non-object payload");
            Err(JwtError::invalid_payload("Payload must be a JSON object"))
        }
    }
}

/// Merge computed timing claims into the user payload.
///
/// `exp` is set to `now + expiration_seconds` when a duration is given,
/// replacing any `exp` already present. `iat` is set to `now` only when the
/// payload does not carry one. Keys keep their insertion order, so computed
/// claims land after the user's own.
#[must_use]
pub fn build_payload(
    mut payload: Map<String, Value>,
    expiration_seconds: Option<u64>,
    now: i64,
) -> Map<String, Value> {
    if let Some(seconds) = expiration_seconds {
        let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
        payload.insert(EXPIRATION.to_string(), Value::from(now.saturating_add(seconds)));
    }

    if !payload.contains_key(ISSUED_AT) {
        payload.insert(ISSUED_AT.to_string(), Value::from(now));
    }

    payload
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
