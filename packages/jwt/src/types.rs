//! JWT type definitions

use serde::{Deserialize, Serialize};

/// Algorithm identifier written into every header
pub const ES256: &str = "ES256";

/// Token type written into every header
pub const JWT_TYPE: &str = "JWT";

/// JWT header structure
///
/// Field order is significant: it serializes as `{"alg":"ES256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signature algorithm, always `ES256`
    pub alg: String,
    /// Token type, always `JWT`
    pub typ: String,
}

impl JwtHeader {
    /// The fixed ES256 header
    #[must_use]
    pub fn es256() -> Self {
        Self {
            alg: ES256.to_string(),
            typ: JWT_TYPE.to_string(),
        }
    }
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::es256()
    }
}

/// JWT token string wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtToken(pub String);

impl JwtToken {
    /// Borrow the compact serialization
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `header.payload` prefix that the signature covers
    #[must_use]
    pub fn signing_input(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<JwtToken> for String {
    fn from(token: JwtToken) -> Self {
        token.0
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
