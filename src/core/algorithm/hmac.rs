//! HMAC signers (HS256, HS384, HS512).
//!
//! Signing computes an HMAC over the signing input and base64url-encodes
//! the MAC bytes. Verification recomputes the signature and compares it
//! to the presented one in constant time.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use super::Signer;

macro_rules! hmac_signer {
    ($(#[$doc:meta])* $name:ident, $digest:ty, $alg:literal) => {
        $(#[$doc])*
        pub struct $name;

        impl Signer for $name {
            fn name(&self) -> &'static str {
                $alg
            }

            /// An empty key yields the empty-string sentinel rather
            /// than a degenerate MAC.
            fn sign(&self, data: &[u8], key: &[u8]) -> String {
                if key.is_empty() {
                    return String::new();
                }
                let mut mac = Hmac::<$digest>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
            }

            /// Recomputes the signature and compares the encoded
            /// strings in constant time. A length or content mismatch
            /// both yield `false`, never an error.
            fn verify(&self, data: &[u8], signature: &str, key: &[u8]) -> bool {
                let expected = self.sign(data, key);
                constant_time_eq(expected.as_bytes(), signature.as_bytes())
            }
        }
    };
}

hmac_signer!(
    /// HMAC-SHA256 signer.
    Hs256, Sha256, "HS256"
);
hmac_signer!(
    /// HMAC-SHA384 signer.
    Hs384, Sha384, "HS384"
);
hmac_signer!(
    /// HMAC-SHA512 signer.
    Hs512, Sha512, "HS512"
);
