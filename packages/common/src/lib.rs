//! Common infrastructure for the mintjwt tools
//!
//! This crate provides the shared logging setup used by the signing library
//! and the `sign-jwt` binary. All output goes to standard error so that
//! standard output stays reserved for the minted token.

pub mod logging;

pub use logging::LoggingTransformer;
