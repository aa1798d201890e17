//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of key material
//! and issued tokens, integrated with the standard log crate.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// This sets up `env_logger`, which writes to standard error.
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=mintjwt_jwt=debug` - Module-specific levels
    ///
    /// Without `RUST_LOG` only errors are printed.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a private key load attempt. Only the path is recorded.
    pub fn log_key_load(path: &Path, success: bool) {
        if success {
            info!("Private key loaded from {}", path.display());
        } else {
            warn!("Private key could not be loaded from {}", path.display());
        }
    }

    /// Log a freshly minted token without exposing it
    ///
    /// The token is reduced to a short SHA-256 fingerprint so log files
    /// never hold a usable bearer credential.
    pub fn log_token_issued(token: &str, claim_count: usize, expires: bool) {
        let fingerprint = Self::fingerprint(token);
        info!("Token issued (fingerprint: {fingerprint}, claims: {claim_count}, expires: {expires})");
    }

    /// Secure logging of cryptographic errors
    ///
    /// Logs the operation and error type without the error payload. Kept
    /// below the default `error` filter: the driver reports the failure itself.
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        warn!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Short SHA-256 fingerprint for log lines.
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    pub fn fingerprint(value: &str) -> String {
        let hash = Sha256::digest(value.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        LoggingTransformer::init_test();

        let a = LoggingTransformer::fingerprint("header.payload.signature");
        let b = LoggingTransformer::fingerprint("header.payload.other");

        assert_ne!(a, b);
        assert_eq!(a, LoggingTransformer::fingerprint("header.payload.signature"));
        assert!(a.starts_with('#'));
        assert_eq!(a.len(), 13);
    }

    #[test]
    fn test_fingerprint_is_digest_prefix() {
        // SHA-256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        assert_eq!(LoggingTransformer::fingerprint("abc"), "#ba7816bf8f01");
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        // These should not panic
        LoggingTransformer::log_key_load(Path::new("/tmp/private.pem"), true);
        LoggingTransformer::log_key_load(Path::new("/tmp/missing.pem"), false);
        LoggingTransformer::log_token_issued("a.b.c", 2, true);
        LoggingTransformer::log_crypto_error("sign", &std::fmt::Error);
    }
}
