//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes
//! a single `execute` function that receives the parsed arguments.
//! Shared input-sourcing helpers (environment variables, key files)
//! live here.

pub mod decode;
pub mod generate;

use std::path::Path;

use zeroize::Zeroizing;

use crate::error::JwtError;

/// Read a value from the named environment variable.
///
/// The name is validated first: it must be non-empty and contain no
/// `=`, so a user cannot smuggle an assignment through the CLI.
pub fn read_env_var(name: &str) -> Result<Zeroizing<String>, JwtError> {
    if name.is_empty() || name.contains('=') {
        return Err(JwtError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    match std::env::var(name) {
        Ok(value) => Ok(Zeroizing::new(value)),
        Err(_) => Err(JwtError::EnvVarNotFound {
            name: name.to_string(),
        }),
    }
}

/// Like [`read_env_var`] but treats an unset variable as absence
/// rather than an error, for optional fallback sourcing.
pub fn read_env_var_opt(name: &str) -> Option<Zeroizing<String>> {
    std::env::var(name).ok().map(Zeroizing::new)
}

/// Read key material (a PEM file) from disk.
pub fn read_key_file(path: &Path) -> Result<Zeroizing<Vec<u8>>, JwtError> {
    std::fs::read(path)
        .map(Zeroizing::new)
        .map_err(|e| JwtError::KeyFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_env_var_rejects_empty_name() {
        let err = read_env_var("").unwrap_err();
        assert!(matches!(err, JwtError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_read_env_var_rejects_name_with_equals() {
        let err = read_env_var("BAD=NAME").unwrap_err();
        assert!(matches!(err, JwtError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_read_env_var_missing_variable() {
        let err = read_env_var("JWT_INSPECT_DEFINITELY_UNSET").unwrap_err();
        assert!(matches!(err, JwtError::EnvVarNotFound { .. }));
    }

    #[test]
    fn test_read_key_file_missing_file() {
        let err = read_key_file(Path::new("/nonexistent/key.pem")).unwrap_err();
        assert!(matches!(err, JwtError::KeyFileError { .. }));
    }
}
