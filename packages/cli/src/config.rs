//! Resolved run configuration

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};

/// File name of the default signing key
pub const DEFAULT_KEY_FILE: &str = "private.pem";

/// Payload argument value that selects standard input
pub const STDIN_MARKER: &str = "-";

/// Where the payload text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// JSON given directly on the command line
    Literal(String),
    /// JSON read in full from standard input
    Stdin,
}

impl PayloadSource {
    fn from_arg(arg: String) -> Self {
        if arg == STDIN_MARKER {
            PayloadSource::Stdin
        } else {
            PayloadSource::Literal(arg)
        }
    }
}

/// Everything one invocation needs, after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintConfig {
    /// Where the JSON claims come from
    pub payload: PayloadSource,
    /// PEM private key to sign with
    pub key_path: PathBuf,
    /// Lifetime added to `now` for the `exp` claim
    pub exp_seconds: Option<u64>,
    /// Dump the decoded header and payload to stderr
    pub pretty: bool,
}

impl MintConfig {
    /// Resolve parsed arguments, falling back to the default key location
    pub fn from_cli(cli: Cli) -> CliResult<Self> {
        let key_path = match cli.key {
            Some(path) => path,
            None => default_key_path()?,
        };

        Ok(Self {
            payload: PayloadSource::from_arg(cli.payload),
            key_path,
            exp_seconds: cli.exp,
            pretty: cli.pretty,
        })
    }
}

/// `../private.pem` relative to the directory holding the running executable
pub fn default_key_path() -> CliResult<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| CliError::Config(format!("cannot locate the running executable: {e}")))?;
    let install_dir = exe.parent().ok_or_else(|| {
        CliError::Config(format!("executable path has no parent: {}", exe.display()))
    })?;
    Ok(key_path_for_install_dir(install_dir))
}

fn key_path_for_install_dir(install_dir: &Path) -> PathBuf {
    install_dir
        .parent()
        .unwrap_or(install_dir)
        .join(DEFAULT_KEY_FILE)
}
