//! Handler for the `decode` subcommand.
//!
//! Decodes and pretty-prints a JWT's header and payload, optionally
//! validating its signature. Supports reading the token from a CLI
//! argument, environment variable, or stdin, and key material from
//! arguments, files, or environment variables.

use std::io::Read;

use anyhow::{Result, bail};
use zeroize::Zeroizing;

use crate::cli::DecodeArgs;
use crate::commands::{read_env_var, read_env_var_opt, read_key_file};
use crate::core::{Algorithm, TokenCodec};
use crate::error::JwtError;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    // Normalize once at the boundary; the registry itself is strict.
    let algorithm: Algorithm = args.algorithm.to_uppercase().parse()?;
    let codec = TokenCodec::new(algorithm);

    let token = resolve_token(args)?;
    let key = if args.validate {
        resolve_key(args, algorithm)?
    } else {
        None
    };

    let rendering = codec.decode(&token, args.validate, key.as_ref().map(|k| k.as_slice()))?;
    print!("{rendering}");
    if !rendering.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Resolve the token from, in order: positional argument, --token-env,
/// stdin.
fn resolve_token(args: &DecodeArgs) -> Result<String> {
    if let Some(token) = &args.token {
        if token.is_empty() {
            return Err(JwtError::NoTokenProvided.into());
        }
        return Ok(token.clone());
    }

    if let Some(name) = &args.token_env {
        let value = read_env_var(name)?;
        return Ok(value.trim().to_string());
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let token = buffer.trim();
    if token.is_empty() {
        return Err(JwtError::NoTokenProvided.into());
    }
    Ok(token.to_string())
}

/// Resolve key material for validation.
///
/// HMAC: --secret, then --secret-env, then JWT_SECRET_KEY.
/// RS256: --key-file, then JWT_PUBLIC_KEY; a secret flag is rejected
/// rather than silently ignored.
///
/// Absence is not an error here; the codec classifies a missing key as
/// `MissingKey` before any cryptographic attempt.
fn resolve_key(args: &DecodeArgs, algorithm: Algorithm) -> Result<Option<Zeroizing<Vec<u8>>>> {
    if algorithm.is_symmetric() {
        if let Some(secret) = &args.secret {
            return Ok(Some(Zeroizing::new(secret.as_bytes().to_vec())));
        }
        if let Some(name) = &args.secret_env {
            let value = read_env_var(name)?;
            return Ok(Some(Zeroizing::new(value.as_bytes().to_vec())));
        }
        Ok(read_env_var_opt("JWT_SECRET_KEY").map(|v| Zeroizing::new(v.as_bytes().to_vec())))
    } else {
        if args.secret.is_some() || args.secret_env.is_some() {
            bail!(
                "--secret and --secret-env apply to HMAC algorithms only; \
                 {algorithm} validation needs a PEM public key \
                 (use --key-file or JWT_PUBLIC_KEY)"
            );
        }
        if let Some(path) = &args.key_file {
            return Ok(Some(read_key_file(path)?));
        }
        Ok(read_env_var_opt("JWT_PUBLIC_KEY").map(|v| Zeroizing::new(v.as_bytes().to_vec())))
    }
}
