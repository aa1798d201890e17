//! Main entry point for the sign-jwt CLI application

use mintjwt_common::LoggingTransformer;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize structured logging
    LoggingTransformer::init();

    mintjwt_cli::main_entry(std::env::args_os())
}
