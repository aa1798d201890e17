//! JWT error types

use std::path::PathBuf;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum JwtError {
    /// The private key file is missing or unreadable
    #[error("Private key file not found: {} ({reason})", .path.display())]
    KeyNotFound {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },
    /// The private key file could not be parsed as an unencrypted P-256 key
    #[error("Failed to load private key: {0}")]
    KeyParse(String),
    /// Malformed JSON or a JSON value that is not an object
    #[error("{0}")]
    InvalidPayload(String),
    /// Serialization or the signature primitive failed
    #[error("Failed to sign JWT: {0}")]
    Signing(String),
    /// A token could not be split or decoded
    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

impl JwtError {
    /// Create a key not found error
    #[inline]
    #[must_use]
    pub fn key_not_found(path: impl Into<PathBuf>, reason: &str) -> Self {
        JwtError::KeyNotFound {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a key parse error
    #[inline]
    #[must_use]
    pub fn key_parse(msg: &str) -> Self {
        JwtError::KeyParse(msg.to_string())
    }

    /// Create an invalid payload error
    #[inline]
    #[must_use]
    pub fn invalid_payload(msg: &str) -> Self {
        JwtError::InvalidPayload(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        JwtError::Signing(msg.to_string())
    }

    /// Create an invalid token error
    #[inline]
    #[must_use]
    pub fn invalid_token(msg: &str) -> Self {
        JwtError::InvalidToken(msg.to_string())
    }

    /// Stable name of the error kind, used as the diagnostic prefix
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JwtError::KeyNotFound { .. } => "KeyNotFound",
            JwtError::KeyParse(_) => "KeyParseError",
            JwtError::InvalidPayload(_) => "InvalidPayload",
            JwtError::Signing(_) => "SigningError",
            JwtError::InvalidToken(_) => "InvalidToken",
        }
    }
}
