//! Webhook signature authentication.
//!
//! Proves the integrity and origin of inbound webhook requests against a
//! shared signature key, without consuming the request body.
//!
//! # Module Structure
//!
//! - `codec` - HMAC-SHA1 signature computation and token encoding
//! - `body` - single-read body capture and restoration
//! - `authenticator` - request-level orchestration
//! - `errors` - typed authentication failures

mod authenticator;
mod body;
mod codec;
mod errors;

pub use authenticator::{RequestAuthenticator, SIGNATURE_HEADER};
pub use body::{capture, MAX_BODY_BYTES};
pub use codec::{verify, Signature, SIGNATURE_LEN};
pub use errors::AuthError;
