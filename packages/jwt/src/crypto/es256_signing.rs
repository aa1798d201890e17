//! ES256 signing with ECDSA P-256

use crate::{
    crypto::es256_keys::Es256SigningKey,
    error::{JwtError, JwtResult},
    types::{JwtHeader, JwtToken},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p256::ecdsa::{signature::Signer, Signature};
use serde_json::{Map, Value};

/// Sign a payload into a compact ES256 token
///
/// The header is always `{"alg":"ES256","typ":"JWT"}`. The signature segment
/// is the fixed-width 64 byte `R || S` encoding required by RFC 7518, not DER.
pub fn es256_sign(payload: &Map<String, Value>, key: &Es256SigningKey) -> JwtResult<JwtToken> {
    let header_json = serde_json::to_vec(&JwtHeader::es256())
        .map_err(|e| JwtError::signing(&format!("header serialization failed: {e}")))?;
    let header_b64 = URL_SAFE_NO_PAD.encode(&header_json);

    let claims_json = serde_json::to_vec(payload)
        .map_err(|e| JwtError::signing(&format!("payload serialization failed: {e}")))?;
    let claims_b64 = URL_SAFE_NO_PAD.encode(&claims_json);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&claims_b64);

    // SHA-256 digest is implied by the P-256 signing key
    let signature: Signature = key
        .signing_key()
        .try_sign(signing_input.as_bytes())
        .map_err(|e| JwtError::signing(&e.to_string()))?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    let mut jwt = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    jwt.push_str(&signing_input);
    jwt.push('.');
    jwt.push_str(&signature_b64);

    tracing::debug!(claims = payload.len(), "signed ES256 token");
    Ok(JwtToken(jwt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::{signature::Verifier, SigningKey};
    use p256::pkcs8::{EncodePrivateKey, LineEnding};
    use rand_core::OsRng;
    use serde_json::json;

    fn test_key() -> Es256SigningKey {
        let secret = SigningKey::random(&mut OsRng);
        let pem = secret.to_pkcs8_pem(LineEnding::LF).unwrap();
        Es256SigningKey::from_pem(&pem).unwrap()
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_header_segment_is_fixed() {
        let token = es256_sign(&Map::new(), &test_key()).unwrap();
        let header = token.as_str().split('.').next().unwrap();
        assert_eq!(header, "eyJhbGciOiJFUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn test_signature_is_raw_and_verifies() {
        let key = test_key();
        let token = es256_sign(&object(json!({"sub": "user123", "iat": 1})), &key).unwrap();

        let parts: Vec<&str> = token.as_str().split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(!token.as_str().contains('='));

        let raw = URL_SAFE_NO_PAD.decode(parts[2]).unwrap();
        assert_eq!(raw.len(), 64);

        let signature = Signature::from_slice(&raw).unwrap();
        key.verifying_key()
            .verify(token.signing_input().as_bytes(), &signature)
            .unwrap();
    }

    #[test]
    fn test_tampered_payload_fails_verification() {
        let key = test_key();
        let token = es256_sign(&object(json!({"role": "user"})), &key).unwrap();
        let parts: Vec<&str> = token.as_str().split('.').collect();

        let forged_claims = URL_SAFE_NO_PAD.encode(br#"{"role":"admin"}"#);
        let forged_input = format!("{}.{}", parts[0], forged_claims);
        let signature = Signature::from_slice(&URL_SAFE_NO_PAD.decode(parts[2]).unwrap()).unwrap();

        assert!(key
            .verifying_key()
            .verify(forged_input.as_bytes(), &signature)
            .is_err());
    }

    #[test]
    fn test_payload_segment_is_compact_json_in_insertion_order() {
        let payload = crate::claims::parse_payload(r#"{"sub": "x", "aud": ["a", "b"]}"#).unwrap();
        let token = es256_sign(&payload, &test_key()).unwrap();
        let claims_b64 = token.as_str().split('.').nth(1).unwrap();
        let claims = URL_SAFE_NO_PAD.decode(claims_b64).unwrap();
        assert_eq!(claims, br#"{"sub":"x","aud":["a","b"]}"#);
    }
}
