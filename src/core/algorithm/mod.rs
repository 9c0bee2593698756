//! Algorithm registry and the `Signer` abstraction.
//!
//! Maps a symbolic algorithm name (`HS256`, `HS384`, `HS512`, `RS256`)
//! to a concrete signer/verifier implementation. The registry itself is
//! case-sensitive; callers normalize user input (upper-casing) before
//! lookup.

pub mod hmac;
pub mod rsa;

use std::fmt;
use std::str::FromStr;

use crate::error::JwtError;

/// The closed set of supported signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// HMAC with SHA-256.
    HS256,
    /// HMAC with SHA-384.
    HS384,
    /// HMAC with SHA-512.
    HS512,
    /// RSA PKCS#1 v1.5 with SHA-256.
    RS256,
}

impl Algorithm {
    /// The algorithm's canonical name as it appears in a JWT header.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
        }
    }

    /// Whether the algorithm uses a shared secret (HMAC) rather than an
    /// asymmetric key pair.
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, Algorithm::RS256)
    }

    /// Instantiate the signer/verifier bound to this algorithm.
    ///
    /// Pure factory: no side effects, no state beyond the returned value.
    pub fn signer(&self) -> Box<dyn Signer + Send + Sync> {
        match self {
            Algorithm::HS256 => Box::new(hmac::Hs256),
            Algorithm::HS384 => Box::new(hmac::Hs384),
            Algorithm::HS512 => Box::new(hmac::Hs512),
            Algorithm::RS256 => Box::new(rsa::Rs256),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact-case lookup. Callers are responsible for normalizing user
/// input (e.g. upper-casing) before parsing.
impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            "RS256" => Ok(Algorithm::RS256),
            other => Err(JwtError::UnsupportedAlgorithm {
                algorithm: other.to_string(),
            }),
        }
    }
}

/// A signer/verifier bound to one algorithm.
///
/// HMAC and RSA have disjoint key models (shared secret vs. PEM key
/// pair) and disjoint failure modes, so signature computation is
/// delegated per algorithm rather than unified.
pub trait Signer {
    /// The algorithm's canonical name (e.g. `"HS256"`).
    fn name(&self) -> &'static str;

    /// Compute a base64url-encoded (no padding) signature over `data`.
    ///
    /// Returns an empty string when signing is not possible: an empty
    /// key for any variant, or an unparseable PEM/PKCS#1 private key
    /// for RSA. Callers must treat an empty result as "signing was not
    /// possible", never as a legitimate signature.
    fn sign(&self, data: &[u8], key: &[u8]) -> String;

    /// Check `signature` (base64url) over `data` with the given key.
    ///
    /// Never errors: any failure along the way (empty key, bad PEM,
    /// undecodable signature, mismatch) yields `false`. HMAC variants
    /// use a constant-time comparison.
    fn verify(&self, data: &[u8], signature: &str, key: &[u8]) -> bool;
}
