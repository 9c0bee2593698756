//! RSA signer (RS256: PKCS#1 v1.5 over SHA-256).
//!
//! Key material is PEM-encoded PKCS#1: a private key for signing, a
//! public key for verification. Unlike the HMAC variants, RSA has real
//! parse failure paths; all of them degrade to the documented sentinels
//! (empty string for `sign`, `false` for `verify`).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer as _, Verifier as _};
use rsa::{RsaPrivateKey, RsaPublicKey};

use super::Signer;

/// RSA-SHA256 signer.
pub struct Rs256;

impl Signer for Rs256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    /// Returns the empty-string sentinel when the key is empty, not
    /// valid PEM, or not a parseable PKCS#1 private key.
    fn sign(&self, data: &[u8], key: &[u8]) -> String {
        if key.is_empty() {
            return String::new();
        }
        let Ok(pem) = std::str::from_utf8(key) else {
            return String::new();
        };
        let Ok(private_key) = RsaPrivateKey::from_pkcs1_pem(pem) else {
            return String::new();
        };

        let signing_key = SigningKey::<Sha256>::new(private_key);
        let signature = signing_key.sign(data);
        URL_SAFE_NO_PAD.encode(signature.to_bytes())
    }

    /// Returns `false` for an empty key, unparseable PEM/PKCS#1 public
    /// key, or undecodable signature; `true` iff PKCS#1 v1.5
    /// verification succeeds.
    fn verify(&self, data: &[u8], signature: &str, key: &[u8]) -> bool {
        if key.is_empty() {
            return false;
        }
        let Ok(pem) = std::str::from_utf8(key) else {
            return false;
        };
        let Ok(public_key) = RsaPublicKey::from_pkcs1_pem(pem) else {
            return false;
        };
        let Ok(signature_bytes) = URL_SAFE_NO_PAD.decode(signature) else {
            return false;
        };
        let Ok(signature) = Signature::try_from(signature_bytes.as_slice()) else {
            return false;
        };

        VerifyingKey::<Sha256>::new(public_key)
            .verify(data, &signature)
            .is_ok()
    }
}
