//! Domain error types for jwt-inspect.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use thiserror::Error;

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The token string was empty.
    #[error("empty token provided")]
    EmptyToken,

    /// The token did not split into exactly three dot-separated segments.
    #[error("invalid JWT format: expected 3 parts, got {count}")]
    InvalidSegmentCount {
        /// The number of segments actually found.
        count: usize,
    },

    /// A token segment was empty.
    #[error("invalid JWT format: part {index} is empty")]
    EmptySegment {
        /// 1-indexed position of the offending segment.
        index: usize,
    },

    /// A token segment was not valid base64url.
    #[error("invalid JWT format: part {index} is not valid base64url")]
    InvalidSegmentEncoding {
        /// 1-indexed position of the offending segment.
        index: usize,
    },

    /// A decoded segment did not parse as a JSON object.
    #[error("invalid JWT format: {segment} is not a valid JSON object")]
    InvalidSegmentJson {
        /// Which segment failed to parse ("header" or "payload").
        segment: &'static str,
    },

    /// The header's `alg` was missing, non-string, or did not match the
    /// algorithm the codec is bound to; also raised by the registry for
    /// an unrecognized algorithm selector.
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The algorithm that was encountered (or "missing").
        algorithm: String,
    },

    /// Validation was requested but no key material was available.
    #[error("a {kind} is required for validation")]
    MissingKey {
        /// Human-readable key kind ("secret key" or "public key").
        kind: &'static str,
    },

    /// Signature verification was performed and failed.
    #[error("invalid signature")]
    InvalidSignature,

    /// The supplied key could not be used for signing.
    #[error("invalid signing key: {reason}")]
    InvalidKey {
        /// Description of why the key was rejected.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable name is not usable.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Failed to read the provided key file.
    #[error("failed to read key file '{path}': {reason}")]
    KeyFileError {
        /// Path to the key file.
        path: String,
        /// Description of the read failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_display() {
        assert_eq!(JwtError::EmptyToken.to_string(), "empty token provided");
    }

    #[test]
    fn test_segment_count_display_includes_count() {
        let err = JwtError::InvalidSegmentCount { count: 2 };
        assert_eq!(
            err.to_string(),
            "invalid JWT format: expected 3 parts, got 2"
        );
    }

    #[test]
    fn test_empty_segment_display_is_one_indexed() {
        let err = JwtError::EmptySegment { index: 3 };
        assert_eq!(err.to_string(), "invalid JWT format: part 3 is empty");
    }

    #[test]
    fn test_segment_encoding_display() {
        let err = JwtError::InvalidSegmentEncoding { index: 1 };
        assert_eq!(
            err.to_string(),
            "invalid JWT format: part 1 is not valid base64url"
        );
    }

    #[test]
    fn test_segment_json_display() {
        let err = JwtError::InvalidSegmentJson { segment: "payload" };
        assert_eq!(
            err.to_string(),
            "invalid JWT format: payload is not a valid JSON object"
        );
    }

    #[test]
    fn test_unsupported_algorithm_display() {
        let err = JwtError::UnsupportedAlgorithm {
            algorithm: "none".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported algorithm: none");
    }

    #[test]
    fn test_missing_key_display() {
        let err = JwtError::MissingKey { kind: "secret key" };
        assert_eq!(err.to_string(), "a secret key is required for validation");
    }

    #[test]
    fn test_invalid_signature_display() {
        assert_eq!(JwtError::InvalidSignature.to_string(), "invalid signature");
    }

    #[test]
    fn test_env_var_not_found_display() {
        let err = JwtError::EnvVarNotFound {
            name: "JWT_TOKEN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable 'JWT_TOKEN' is not set"
        );
    }

    #[test]
    fn test_key_file_error_display() {
        let err = JwtError::KeyFileError {
            path: "/tmp/key.pem".to_string(),
            reason: "file not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read key file '/tmp/key.pem': file not found"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtError>();
    }
}
