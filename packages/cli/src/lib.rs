//! `sign-jwt` command line driver
//!
//! Parses arguments into a [`MintConfig`], runs the minting pipeline and maps
//! every failure to one diagnostic line and an exit code. Nothing below
//! [`main_entry`] terminates the process.

pub mod commands;
pub mod config;
mod error;
pub mod mint;

pub use commands::Cli;
pub use config::{MintConfig, PayloadSource};
pub use error::{CliError, CliResult};
pub use mint::run;

use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

/// Parse `args`, run against the real stdio handles and return the exit code
pub fn main_entry<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => {
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(e) => return report(&CliError::from(e)),
    };

    let result = MintConfig::from_cli(cli).and_then(|config| {
        log::debug!("resolved configuration: {config:?}");
        run(
            &config,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            chrono::Utc::now().timestamp(),
        )
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(err: &CliError) -> ExitCode {
    eprintln!("ERROR [{}]: {err}", err.kind());
    ExitCode::from(err.exit_code())
}
