//! CLI argument definitions for jwt-inspect.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `DecodeArgs` and `GenerateArgs` implement custom `Debug` to redact
//! sensitive fields (tokens and secrets) and prevent accidental leakage
//! through debug formatting, error chains, or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// An offline CLI for decoding, validating, and generating
/// JSON Web Tokens (JWTs).
#[derive(Debug, Parser)]
#[command(name = "jwt-inspect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a JWT and optionally validate its signature.
    Decode(DecodeArgs),

    /// Generate a signed sample JWT with realistic claims.
    Generate(GenerateArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to decode. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Validate the token's signature.
    #[arg(long)]
    pub validate: bool,

    /// Signing algorithm the token is expected to use
    /// (HS256, HS384, HS512, or RS256; case-insensitive).
    #[arg(long, value_name = "ALG", default_value = "HS256")]
    pub algorithm: String,

    /// HMAC shared secret for signature validation.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env or JWT_SECRET_KEY instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    ///
    /// Falls back to JWT_SECRET_KEY when neither --secret nor
    /// --secret-env is given.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Path to a PEM-encoded PKCS#1 public key file (RS256 only).
    ///
    /// Falls back to the JWT_PUBLIC_KEY environment variable.
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
}

/// Custom `Debug` that redacts token and secret fields to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("validate", &self.validate)
            .field("algorithm", &self.algorithm)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("key_file", &self.key_file)
            .finish()
    }
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Signing algorithm for the generated token
    /// (HS256, HS384, HS512, or RS256; case-insensitive).
    #[arg(long, value_name = "ALG", default_value = "HS256")]
    pub algorithm: String,

    /// HMAC shared secret to sign with. Defaults to a built-in demo
    /// secret, which is echoed after the token.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Path to a PEM-encoded PKCS#1 private key file (RS256 only).
    ///
    /// Falls back to the JWT_PRIVATE_KEY environment variable.
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
}

/// Custom `Debug` that redacts the secret field.
impl fmt::Debug for GenerateArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateArgs")
            .field("algorithm", &self.algorithm)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("key_file", &self.key_file)
            .finish()
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}
