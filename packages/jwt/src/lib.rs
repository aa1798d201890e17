//! ES256 JSON Web Token minting
//!
//! This crate provides the token pipeline behind `sign-jwt`:
//! - PEM private key loading (SEC1 and PKCS#8, P-256 only)
//! - Payload parsing and `iat`/`exp` claim defaulting
//! - ES256 signing into the compact `header.payload.signature` form
//! - Unverified decoding for inspection

pub mod claims;
pub mod crypto;
pub mod decoder;
mod error;
mod types;

pub use claims::{build_payload, parse_payload};
pub use crypto::es256_keys::{load_private_key, Es256SigningKey, KeyEncoding};
pub use crypto::es256_signing::es256_sign;
pub use decoder::{decode_unverified, DecodedToken};
pub use error::*;
pub use types::*;
