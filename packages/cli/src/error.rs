//! Command line error type and exit code mapping

use mintjwt_jwt::JwtError;

/// Result alias for the command line driver
pub type CliResult<T> = Result<T, CliError>;

/// Every failure the driver can report
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad flags or arguments, rendered by clap
    #[error("{}", usage_message(.0))]
    Usage(#[from] clap::Error),
    /// Runtime configuration could not be resolved (e.g. default key location)
    #[error("Configuration error: {0}")]
    Config(String),
    /// Payload, key or signing failure from the token library
    #[error(transparent)]
    Jwt(#[from] JwtError),
    /// Reading or writing the standard streams failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Stable kind name printed in front of every diagnostic
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Usage(_) | CliError::Config(_) => "ConfigError",
            CliError::Jwt(e) => e.kind(),
            CliError::Io(_) => "IoError",
        }
    }

    /// Process exit code for this error
    ///
    /// Usage problems exit with 2, every runtime failure with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Config(_) | CliError::Jwt(_) | CliError::Io(_) => 1,
        }
    }
}

fn usage_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .strip_prefix("error: ")
        .unwrap_or(&rendered)
        .trim_end()
        .to_string()
}
