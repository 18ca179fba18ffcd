//! Payments gateway port.
//!
//! Defines the contract for fetching payment resources from the payments
//! API. The webhook flow only proves a notification's origin; handlers that
//! need the payment itself fetch it through this port.

use async_trait::async_trait;
use thiserror::Error;

/// Port for the payments API.
///
/// Implementations hold their credential and base URL at construction and
/// expose a single fetch operation. Must be safe to share across concurrent
/// webhook handlers.
#[async_trait]
pub trait PaymentsGateway: Send + Sync {
    /// Fetch a payment by location and payment ID.
    ///
    /// Returns the decoded payment resource as received from the API. The
    /// business payload is intentionally untyped; interpreting it is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::NotAuthorized`] if the API rejects the credential.
    /// - [`PaymentError::NotFound`] if no such payment exists.
    /// - [`PaymentError::Network`] / [`PaymentError::Decode`] for transport
    ///   and malformed-response failures, passed through without retry.
    async fn fetch_payment(
        &self,
        location_id: &str,
        payment_id: &str,
    ) -> Result<serde_json::Value, PaymentError>;
}

/// Errors from payments API operations.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The API rejected the bearer credential (HTTP 401).
    #[error("not authorized: {message}")]
    NotAuthorized {
        /// Message extracted from the API error body.
        message: String,
    },

    /// The requested payment does not exist (HTTP 404).
    #[error("payment not found: {message}")]
    NotFound {
        /// Message extracted from the API error body.
        message: String,
    },

    /// Transport-level failure reaching the API.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PaymentError {
    /// True if the failure is transient and a caller-level retry could
    /// succeed. The gateway itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Network(_))
    }
}
