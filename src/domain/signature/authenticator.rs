//! Inbound webhook request authentication.
//!
//! Verifies that a request was produced by the holder of the shared
//! signature key, then leaves the request readable for the next consumer.

use axum::extract::Request;
use secrecy::{ExposeSecret, SecretString};

use super::body;
use super::codec::Signature;
use super::errors::AuthError;

/// Header carrying the webhook signature token.
pub const SIGNATURE_HEADER: &str = "x-square-signature";

/// Authenticator for inbound Square webhook requests.
///
/// Holds the shared signature key for the lifetime of the process. All
/// methods take `&self` and each call is a single-shot, stateless
/// verification, so one instance can be shared freely across concurrent
/// requests.
pub struct RequestAuthenticator {
    signature_key: SecretString,
}

impl RequestAuthenticator {
    /// Creates an authenticator with the given signature key.
    pub fn new(signature_key: impl Into<String>) -> Self {
        Self {
            signature_key: SecretString::new(signature_key.into()),
        }
    }

    /// Authenticates an inbound request against the signature key.
    ///
    /// Compares the `X-Square-Signature` header to the signature computed
    /// from the request URL and body. The URL is taken in its exact
    /// serialized form (`request.uri()`) and never re-normalized; a host
    /// that rewrites the URI upstream must preserve the absolute form the
    /// sender signed.
    ///
    /// The body is captured and restored: when this returns `Ok` or
    /// [`AuthError::InvalidSignature`], the request body yields the same
    /// bytes it would have yielded had authentication never been attempted.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingSignature`] / [`AuthError::MalformedSignature`]
    ///   if the header is absent or unreadable (body untouched).
    /// - [`AuthError::BodyRead`] if the body stream fails or exceeds the
    ///   capture cap; the mismatch check is never reached.
    /// - [`AuthError::InvalidSignature`] on a verification mismatch.
    pub async fn authenticate_request(&self, request: &mut Request) -> Result<(), AuthError> {
        let url = request.uri().to_string();
        let declared = match request.headers().get(SIGNATURE_HEADER) {
            Some(value) => value
                .to_str()
                .map_err(|_| AuthError::MalformedSignature)?
                .to_owned(),
            None => return Err(AuthError::MissingSignature),
        };

        let captured = body::capture(request).await?;
        self.authenticate_signature(&declared, &url, &captured)
    }

    /// Authenticates a declared signature token against `(url, body)`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidSignature`] carrying the expected and
    /// declared tokens if they differ.
    pub fn authenticate_signature(
        &self,
        declared: &str,
        url: &str,
        body: &[u8],
    ) -> Result<(), AuthError> {
        let expected = Signature::compute(url, body, self.signature_key.expose_secret().as_bytes());

        if expected.matches_token(declared) {
            Ok(())
        } else {
            tracing::warn!(url = %url, declared = %declared, "webhook signature mismatch");
            Err(AuthError::InvalidSignature {
                expected: expected.token(),
                declared: declared.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::extract::Request;
    use futures::stream;

    use super::super::body::MAX_BODY_BYTES;
    use super::*;

    const GOOD_SIGNATURE: &str = "DwwpgL5sy1WXHwPSsLNN27tGRSY=";
    const REQUEST_BODY: &str = r#"{"event": "test"}"#;
    const REQUEST_URL: &str = "http://www.example.com/events";
    const SIGNATURE_KEY: &str = "test_key";

    fn stub_request(signature: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri(REQUEST_URL)
            .header(SIGNATURE_HEADER, signature)
            .body(Body::from(REQUEST_BODY))
            .unwrap()
    }

    #[tokio::test]
    async fn good_signature_authenticates() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let mut request = stub_request(GOOD_SIGNATURE);

        authenticator.authenticate_request(&mut request).await.unwrap();
    }

    #[tokio::test]
    async fn bad_signature_is_rejected_with_both_tokens() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let mut request = stub_request("bad_signature");

        let err = authenticator.authenticate_request(&mut request).await.unwrap_err();

        match err {
            AuthError::InvalidSignature { expected, declared } => {
                assert_eq!(expected, GOOD_SIGNATURE);
                assert_eq!(declared, "bad_signature");
            }
            other => panic!("expected InvalidSignature, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_key_rejects_a_valid_token() {
        let authenticator = RequestAuthenticator::new("example_key");
        let mut request = stub_request(GOOD_SIGNATURE);

        let err = authenticator.authenticate_request(&mut request).await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidSignature { .. }));
    }

    #[tokio::test]
    async fn missing_header_is_rejected_before_the_body_is_touched() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let mut request = Request::builder()
            .method("POST")
            .uri(REQUEST_URL)
            .body(Body::from(REQUEST_BODY))
            .unwrap();

        let err = authenticator.authenticate_request(&mut request).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingSignature));

        let body = to_bytes(request.into_body(), MAX_BODY_BYTES).await.unwrap();
        assert_eq!(&body[..], REQUEST_BODY.as_bytes());
    }

    #[tokio::test]
    async fn non_utf8_header_is_rejected_as_malformed() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let mut request = Request::builder()
            .method("POST")
            .uri(REQUEST_URL)
            .header(SIGNATURE_HEADER, http::HeaderValue::from_bytes(b"\xff\xfe").unwrap())
            .body(Body::from(REQUEST_BODY))
            .unwrap();

        let err = authenticator.authenticate_request(&mut request).await.unwrap_err();

        assert!(matches!(err, AuthError::MalformedSignature));
    }

    #[tokio::test]
    async fn body_read_error_is_not_reported_as_invalid_signature() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let failing = Body::from_stream(stream::once(async {
            Err::<axum::body::Bytes, std::io::Error>(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "read error",
            ))
        }));
        let mut request = Request::builder()
            .method("POST")
            .uri(REQUEST_URL)
            .header(SIGNATURE_HEADER, GOOD_SIGNATURE)
            .body(failing)
            .unwrap();

        let err = authenticator.authenticate_request(&mut request).await.unwrap_err();

        assert!(matches!(err, AuthError::BodyRead(_)));
    }

    #[tokio::test]
    async fn body_is_replayable_after_successful_authentication() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let mut request = stub_request(GOOD_SIGNATURE);

        authenticator.authenticate_request(&mut request).await.unwrap();

        let body = to_bytes(request.into_body(), MAX_BODY_BYTES).await.unwrap();
        assert_eq!(&body[..], REQUEST_BODY.as_bytes());
    }

    #[tokio::test]
    async fn body_is_replayable_after_rejected_authentication() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);
        let mut request = stub_request("bad_signature");

        let _ = authenticator.authenticate_request(&mut request).await.unwrap_err();

        let body = to_bytes(request.into_body(), MAX_BODY_BYTES).await.unwrap();
        assert_eq!(&body[..], REQUEST_BODY.as_bytes());
    }

    #[test]
    fn authenticate_signature_accepts_reference_vector() {
        let authenticator = RequestAuthenticator::new("example_key");

        authenticator
            .authenticate_signature(
                "n96t75ZEk8OvwpqHZk/O4HMnt1E=",
                REQUEST_URL,
                REQUEST_BODY.as_bytes(),
            )
            .unwrap();
    }

    #[test]
    fn query_string_participates_in_the_signature() {
        let authenticator = RequestAuthenticator::new(SIGNATURE_KEY);

        let err = authenticator
            .authenticate_signature(
                GOOD_SIGNATURE,
                "http://www.example.com/events?retry=1",
                REQUEST_BODY.as_bytes(),
            )
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidSignature { .. }));
    }
}
