//! JWT cryptographic operations

pub mod es256_keys;
pub mod es256_signing;
