//! Handler for the `generate` subcommand.
//!
//! Builds a signed sample token with realistic claims for testing.
//! This is a convenience path, not production issuance: no claim
//! policy beyond the illustrative set below.

use anyhow::{Result, bail};
use chrono::Utc;
use serde_json::{Map, Value, json};
use zeroize::Zeroizing;

use crate::cli::GenerateArgs;
use crate::commands::{read_env_var, read_env_var_opt, read_key_file};
use crate::core::{Algorithm, TokenCodec};

/// Demo secret used when no HMAC secret is supplied. Echoed after the
/// token so the user can decode what they just generated.
const DEMO_SECRET: &str = "your-super-secret-key-123!@#$%^&*()";

/// Execute the `generate` subcommand with the given arguments.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.to_uppercase().parse()?;
    let codec = TokenCodec::new(algorithm);
    let claims = sample_claims();

    if algorithm.is_symmetric() {
        let (secret, is_demo) = resolve_secret(args)?;
        let token = codec.encode(&claims, secret.as_bytes())?;
        println!("Test JWT Token:\n{token}");
        if is_demo {
            println!("\nSecret Key (for decoding):\n{DEMO_SECRET}");
        }
    } else {
        let key = resolve_private_key(args)?;
        let token = codec.encode(&claims, &key)?;
        println!("Test JWT Token:\n{token}");
    }
    Ok(())
}

/// Resolve the HMAC secret: --secret, then --secret-env, then
/// JWT_SECRET_KEY, then the built-in demo secret. The flag reports
/// whether the demo secret was used (only that one is echoed).
fn resolve_secret(args: &GenerateArgs) -> Result<(Zeroizing<String>, bool)> {
    if let Some(secret) = &args.secret {
        return Ok((secret.clone(), false));
    }
    if let Some(name) = &args.secret_env {
        return Ok((read_env_var(name)?, false));
    }
    if let Some(value) = read_env_var_opt("JWT_SECRET_KEY") {
        return Ok((value, false));
    }
    Ok((Zeroizing::new(DEMO_SECRET.to_string()), true))
}

/// Resolve the RS256 private key: --key-file, then JWT_PRIVATE_KEY.
fn resolve_private_key(args: &GenerateArgs) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(path) = &args.key_file {
        return Ok(read_key_file(path)?);
    }
    if let Some(value) = read_env_var_opt("JWT_PRIVATE_KEY") {
        return Ok(Zeroizing::new(value.as_bytes().to_vec()));
    }
    bail!(
        "a PKCS#1 private key is required to generate RS256 tokens \
         (use --key-file or set JWT_PRIVATE_KEY)"
    );
}

/// Illustrative claims: identity, temporal, and authorization fields a
/// real token might carry. `iat` is now, `exp` is 24 hours out.
fn sample_claims() -> Map<String, Value> {
    let now = Utc::now().timestamp();
    let claims = json!({
        "iss": "test-issuer",
        "sub": "test-user-123",
        "aud": "test-audience",
        "iat": now,
        "exp": now + 24 * 3600,
        "name": "Test User",
        "email": "test@example.com",
        "roles": ["user", "admin"],
        "permissions": ["read:users", "write:users", "delete:users"],
        "metadata": {
            "department": "Engineering",
            "location": "HQ",
            "employee_id": "EMP123"
        }
    });
    claims
        .as_object()
        .expect("sample claims are a JSON object")
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_claims_contain_identity_and_temporal_fields() {
        let claims = sample_claims();
        for key in ["iss", "sub", "aud", "iat", "exp", "name", "email", "roles"] {
            assert!(claims.contains_key(key), "missing claim: {key}");
        }
    }

    #[test]
    fn test_sample_claims_expiry_is_after_issuance() {
        let claims = sample_claims();
        let iat = claims["iat"].as_i64().unwrap();
        let exp = claims["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 24 * 3600);
    }

    #[test]
    fn test_generated_token_round_trips_through_codec() {
        let codec = TokenCodec::new(Algorithm::HS256);
        let token = codec
            .encode(&sample_claims(), DEMO_SECRET.as_bytes())
            .unwrap();
        let rendering = codec
            .decode(&token, true, Some(DEMO_SECRET.as_bytes()))
            .unwrap();
        assert!(rendering.contains("\"iss\": \"test-issuer\""));
        assert!(rendering.ends_with("\nSignature: Valid"));
    }

    #[test]
    fn test_resolve_secret_falls_back_to_demo() {
        let args = GenerateArgs {
            algorithm: "HS256".to_string(),
            secret: None,
            secret_env: None,
            key_file: None,
        };
        // JWT_SECRET_KEY may be set in the environment of a dev shell;
        // only assert the demo path when it is absent.
        if std::env::var("JWT_SECRET_KEY").is_err() {
            let (secret, is_demo) = resolve_secret(&args).unwrap();
            assert!(is_demo);
            assert_eq!(&*secret, DEMO_SECRET);
        }
    }

    #[test]
    fn test_resolve_secret_prefers_inline_secret() {
        let args = GenerateArgs {
            algorithm: "HS256".to_string(),
            secret: Some(Zeroizing::new("hunter2".to_string())),
            secret_env: None,
            key_file: None,
        };
        let (secret, is_demo) = resolve_secret(&args).unwrap();
        assert!(!is_demo);
        assert_eq!(&*secret, "hunter2");
    }
}
