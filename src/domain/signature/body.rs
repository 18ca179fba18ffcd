//! Request body capture.
//!
//! An inbound request body is a single-read stream: draining it for
//! signature verification would leave nothing for downstream extractors.
//! [`capture`] reads the stream fully into memory under a hard cap and
//! installs an equivalent in-memory body in its place, so the call site
//! sees the bytes exactly as received.

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::Request;

use super::errors::AuthError;

/// Hard cap on captured body size (1 MiB).
///
/// Bounds memory use against hostile or malformed senders. Bodies larger
/// than this fail the read outright; a truncated prefix is never used for
/// signing.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Drains the request body into memory and restores an equivalent body.
///
/// On success the request carries a fresh body over the captured bytes
/// that yields identical content for any subsequent single read-through.
///
/// On failure the original stream has already been consumed and the
/// request is left with an empty body; the caller must reject the request
/// rather than pass it on.
///
/// # Errors
///
/// Returns [`AuthError::BodyRead`] if the underlying stream fails or the
/// body exceeds [`MAX_BODY_BYTES`].
pub async fn capture(request: &mut Request) -> Result<Bytes, AuthError> {
    let body = std::mem::replace(request.body_mut(), Body::empty());
    let bytes = to_bytes(body, MAX_BODY_BYTES).await?;
    *request.body_mut() = Body::from(bytes.clone());
    Ok(bytes)
}
