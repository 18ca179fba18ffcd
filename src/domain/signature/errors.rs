//! Webhook authentication error types.

use thiserror::Error;

/// Errors produced while authenticating an inbound webhook request.
///
/// All variants are returned to the immediate caller; the core never
/// retries and never chooses a transport-level status code. HTTP mapping
/// lives in the webhook adapter.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Declared signature does not match the computed expected signature.
    ///
    /// Carries both tokens for diagnostics. Tokens are derived from the
    /// request contents and are not secret; the signature key itself never
    /// appears here.
    #[error("invalid signature: expected \"{expected}\", got \"{declared}\"")]
    InvalidSignature {
        /// Token computed from the request URL and body.
        expected: String,
        /// Token the request declared in its signature header.
        declared: String,
    },

    /// Request carried no `X-Square-Signature` header.
    #[error("missing X-Square-Signature header")]
    MissingSignature,

    /// Signature header was present but not readable as a token.
    #[error("malformed X-Square-Signature header")]
    MalformedSignature,

    /// The request body could not be fully read.
    ///
    /// Covers transport failures and bodies exceeding the capture cap.
    /// Authentication never proceeds on a partially captured body.
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),
}
