//! Token minting pipeline driven by a resolved [`MintConfig`]

use crate::config::{MintConfig, PayloadSource};
use crate::error::CliResult;
use mintjwt_common::LoggingTransformer;
use mintjwt_jwt::{
    build_payload, decode_unverified, es256_sign, load_private_key, parse_payload, JwtError,
    JwtToken,
};
use std::io::{Read, Write};

/// Run one signing pass.
///
/// Steps run strictly in order: read payload, validate it, load the key,
/// build claims, sign, write. The payload is validated before the key file is
/// touched. `stdout` receives exactly one line (the token) and only after
/// signing succeeded; the optional decoded dump goes to `stderr`.
pub fn run<R, O, E>(
    config: &MintConfig,
    stdin: R,
    stdout: &mut O,
    stderr: &mut E,
    now: i64,
) -> CliResult<JwtToken>
where
    R: Read,
    O: Write,
    E: Write,
{
    let text = read_payload(&config.payload, stdin)?;
    let user_claims = parse_payload(&text)?;

    let key = match load_private_key(&config.key_path) {
        Ok(key) => {
            LoggingTransformer::log_key_load(&config.key_path, true);
            key
        }
        Err(e) => {
            LoggingTransformer::log_key_load(&config.key_path, false);
            return Err(e.into());
        }
    };

    let payload = build_payload(user_claims, config.exp_seconds, now);
    let token = es256_sign(&payload, &key).inspect_err(|e| {
        LoggingTransformer::log_crypto_error("es256_sign", e);
    })?;
    LoggingTransformer::log_token_issued(token.as_str(), payload.len(), config.exp_seconds.is_some());

    writeln!(stdout, "{token}")?;
    stdout.flush()?;

    if config.pretty {
        write_decoded(token.as_str(), stderr)?;
    }

    Ok(token)
}

fn read_payload<R: Read>(source: &PayloadSource, mut stdin: R) -> CliResult<String> {
    match source {
        PayloadSource::Literal(text) => Ok(text.clone()),
        PayloadSource::Stdin => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).map_err(|e| {
                JwtError::invalid_payload(&format!("Failed to read payload from stdin: {e}"))
            })?;
            log::debug!("read {} bytes of payload from stdin", text.len());
            Ok(text)
        }
    }
}

/// Dump header and payload of `token` as indented JSON
fn write_decoded<E: Write>(token: &str, stderr: &mut E) -> CliResult<()> {
    let decoded = decode_unverified(token)?;
    let header = serde_json::to_string_pretty(&decoded.header)
        .map_err(|e| JwtError::invalid_token(&e.to_string()))?;
    let payload = serde_json::to_string_pretty(&decoded.payload)
        .map_err(|e| JwtError::invalid_token(&e.to_string()))?;

    writeln!(stderr, "\n--- JWT Header ---")?;
    writeln!(stderr, "{header}")?;
    writeln!(stderr, "\n--- JWT Payload ---")?;
    writeln!(stderr, "{payload}")?;
    stderr.flush()?;
    Ok(())
}
