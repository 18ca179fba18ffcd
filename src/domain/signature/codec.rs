//! Webhook signature computation.
//!
//! Implements the Square webhook signing scheme: an HMAC-SHA1 digest over
//! the notification URL concatenated with the raw request body, rendered as
//! a standard base64 token. The 160-bit digest is fixed by the signing
//! party; interoperability requires matching it exactly.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;

/// Length in bytes of the digest underlying a signature token.
pub const SIGNATURE_LEN: usize = 20;

/// A computed webhook signature.
///
/// Wraps the raw 20-byte HMAC-SHA1 digest. The transport form is the
/// standard base64 (padded) encoding of these bytes, as carried in the
/// `X-Square-Signature` header. Two signatures are equal iff their digest
/// bytes are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Computes the signature for a notification URL and raw body under the
    /// given key.
    ///
    /// The signed message is the URL string immediately followed by the body
    /// bytes, with no separator. Any change to the URL serialization
    /// (trailing slash, query ordering) produces a different signature, so
    /// the URL must be passed exactly as the signer serialized it.
    ///
    /// Pure and deterministic: same inputs always produce the same
    /// signature.
    pub fn compute(url: &str, body: &[u8], key: &[u8]) -> Self {
        let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(url.as_bytes());
        mac.update(body);
        Self(mac.finalize().into_bytes().into())
    }

    /// Returns the base64 transport token for this signature.
    pub fn token(&self) -> String {
        BASE64.encode(self.0)
    }

    /// Compares this signature's token against a declared token in constant
    /// time.
    ///
    /// Token length is derived from the digest length and is not secret;
    /// declared tokens of a different length compare unequal.
    pub fn matches_token(&self, declared: &str) -> bool {
        self.token().as_bytes().ct_eq(declared.as_bytes()).into()
    }
}

/// Verifies a declared token against the signature computed from
/// `(url, body, key)`.
pub fn verify(declared: &str, url: &str, body: &[u8], key: &[u8]) -> bool {
    Signature::compute(url, body, key).matches_token(declared)
}
