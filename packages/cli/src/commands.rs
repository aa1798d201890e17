//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted when `--key` is not given
pub const KEY_ENV_VAR: &str = "SIGN_JWT_KEY";

const EXAMPLES: &str = r#"Examples:
  sign-jwt '{"sub": "user123", "name": "John Doe"}'
  sign-jwt --exp 3600 '{"sub": "admin", "role": "admin"}'
  sign-jwt --key /path/to/key.pem '{"user": "jay"}'
  echo '{"sub": "test"}' | sign-jwt -

  # Pipe output to clipboard
  sign-jwt '{"sub": "test"}' | xclip -selection clipboard"#;

/// Command line arguments of `sign-jwt`
#[derive(Debug, Parser)]
#[command(name = "sign-jwt")]
#[command(version)]
#[command(about = "Sign JWT tokens with ES256 private key")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// JSON payload to sign (as string, or `-` to read it from stdin)
    pub payload: String,

    /// Path to private key PEM file (default: ../private.pem next to the executable)
    #[arg(long, short = 'k', env = KEY_ENV_VAR)]
    pub key: Option<PathBuf>,

    /// Expiration time in seconds from now (optional)
    #[arg(long, short = 'e', value_name = "SECONDS")]
    pub exp: Option<u64>,

    /// Pretty-print the JWT header and payload to stderr for verification
    #[arg(long, short = 'p')]
    pub pretty: bool,
}
