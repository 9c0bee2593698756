//! Token codec: decode/validate and encode/sign of the three-part
//! JWT compact serialization.
//!
//! The codec is bound to one algorithm at construction time. A token's
//! declared `alg` must match that binding exactly; the codec never
//! negotiates an algorithm from the token itself.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

use crate::core::algorithm::{Algorithm, Signer};
use crate::error::JwtError;

/// Decodes, validates, and builds JWTs with a fixed algorithm binding.
///
/// Holds no mutable state; a codec may be shared freely across threads
/// and every call is independent of every other.
pub struct TokenCodec {
    algorithm: Algorithm,
    signer: Box<dyn Signer + Send + Sync>,
}

impl TokenCodec {
    /// Create a codec bound to the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            signer: algorithm.signer(),
        }
    }

    /// Decode a token into a human-readable rendering, optionally
    /// verifying its signature.
    ///
    /// The rendering contains a `Header:` block and a `Payload:` block,
    /// each pretty-printed with 2-space indentation and sorted keys.
    /// When `validate` is true a non-empty `key` must be supplied
    /// (shared secret for HMAC, PEM public key for RS256) and the
    /// rendering gains a trailing `Signature: Valid` line.
    ///
    /// # Errors
    ///
    /// Fails without producing any rendering when the token is empty or
    /// malformed, when the header's `alg` does not match the bound
    /// algorithm, when validation is requested without a key, or when
    /// the signature does not verify.
    pub fn decode(
        &self,
        token: &str,
        validate: bool,
        key: Option<&[u8]>,
    ) -> Result<String, JwtError> {
        if token.is_empty() {
            return Err(JwtError::EmptyToken);
        }

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(JwtError::InvalidSegmentCount { count: parts.len() });
        }

        let mut decoded = Vec::with_capacity(2);
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(JwtError::EmptySegment { index: i + 1 });
            }
            match URL_SAFE_NO_PAD.decode(part) {
                Ok(bytes) if i < 2 => decoded.push(bytes),
                Ok(_) => {}
                Err(_) => return Err(JwtError::InvalidSegmentEncoding { index: i + 1 }),
            }
        }

        let header: Map<String, Value> = serde_json::from_slice(&decoded[0])
            .map_err(|_| JwtError::InvalidSegmentJson { segment: "header" })?;

        // Strict caller-pinned algorithm check, not a lookup.
        match header.get("alg") {
            Some(Value::String(alg)) if alg == self.signer.name() => {}
            Some(Value::String(alg)) => {
                return Err(JwtError::UnsupportedAlgorithm {
                    algorithm: alg.clone(),
                });
            }
            Some(other) => {
                return Err(JwtError::UnsupportedAlgorithm {
                    algorithm: other.to_string(),
                });
            }
            None => {
                return Err(JwtError::UnsupportedAlgorithm {
                    algorithm: "missing".to_string(),
                });
            }
        }

        let payload: Map<String, Value> = serde_json::from_slice(&decoded[1])
            .map_err(|_| JwtError::InvalidSegmentJson { segment: "payload" })?;

        let mut rendering = format!(
            "Header:\n{}\n\nPayload:\n{}\n",
            pretty(&header),
            pretty(&payload)
        );

        if validate {
            let key = match key {
                Some(k) if !k.is_empty() => k,
                _ => {
                    return Err(JwtError::MissingKey {
                        kind: if self.algorithm.is_symmetric() {
                            "secret key"
                        } else {
                            "public key"
                        },
                    });
                }
            };

            // The signing input is the still-encoded first two segments,
            // never re-serialized JSON.
            let signing_input = format!("{}.{}", parts[0], parts[1]);
            if !self.signer.verify(signing_input.as_bytes(), parts[2], key) {
                return Err(JwtError::InvalidSignature);
            }
            rendering.push_str("\nSignature: Valid");
        }

        Ok(rendering)
    }

    /// Build and sign a token from the given claims.
    ///
    /// The header is `{"alg": <bound algorithm>, "typ": "JWT"}`. This
    /// path generates illustrative/test tokens; no claim policy is
    /// enforced beyond what the caller supplies.
    ///
    /// # Errors
    ///
    /// Fails with [`JwtError::InvalidKey`] when the key is empty or
    /// (for RS256) not a parseable PKCS#1 private key.
    pub fn encode(&self, claims: &Map<String, Value>, key: &[u8]) -> Result<String, JwtError> {
        let mut header = Map::new();
        header.insert(
            "alg".to_string(),
            Value::String(self.algorithm.name().to_string()),
        );
        header.insert("typ".to_string(), Value::String("JWT".to_string()));

        let header_json =
            serde_json::to_vec(&header).expect("JSON object serialization cannot fail");
        let payload_json =
            serde_json::to_vec(claims).expect("JSON object serialization cannot fail");

        let header_b64 = URL_SAFE_NO_PAD.encode(&header_json);
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload_json);
        let signing_input = format!("{header_b64}.{payload_b64}");

        let signature = self.signer.sign(signing_input.as_bytes(), key);
        if signature.is_empty() {
            return Err(JwtError::InvalidKey {
                reason: if key.is_empty() {
                    "key is empty".to_string()
                } else {
                    format!("key is not usable for {}", self.algorithm)
                },
            });
        }

        Ok(format!("{signing_input}.{signature}"))
    }
}

/// Pretty-print a JSON object with 2-space indentation.
///
/// `serde_json::Map` keeps its keys sorted, so the output is
/// deterministic for any insertion order.
fn pretty(object: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(object).expect("JSON object serialization cannot fail")
}
