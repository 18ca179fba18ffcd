//! Mock payments gateway for testing.
//!
//! Provides a configurable in-memory implementation of `PaymentsGateway`
//! for unit and integration tests. Supports pre-configured payments, error
//! injection, and call tracking.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{PaymentError, PaymentsGateway};

/// Mock payments gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentsGateway::new();
/// mock.set_payment("location_id", "payment_id", serde_json::json!({"id": "payment_id"}));
///
/// let payment = mock.fetch_payment("location_id", "payment_id").await?;
/// assert_eq!(mock.calls().len(), 1);
/// ```
#[derive(Default)]
pub struct MockPaymentsGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Pre-configured payments keyed by (location_id, payment_id).
    payments: HashMap<(String, String), serde_json::Value>,

    /// When set, every call fails with a not-authorized rejection.
    reject_all: bool,

    /// Recorded (location_id, payment_id) fetches for assertions.
    call_log: Vec<(String, String)>,
}

impl MockPaymentsGateway {
    /// Creates a mock with no configured payments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that rejects every fetch as not authorized.
    pub fn rejecting_all() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().reject_all = true;
        mock
    }

    /// Registers a payment to be returned for the given IDs.
    pub fn set_payment(
        &self,
        location_id: impl Into<String>,
        payment_id: impl Into<String>,
        payment: serde_json::Value,
    ) {
        self.inner
            .lock()
            .unwrap()
            .payments
            .insert((location_id.into(), payment_id.into()), payment);
    }

    /// Returns the recorded fetch calls.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().call_log.clone()
    }
}

#[async_trait]
impl PaymentsGateway for MockPaymentsGateway {
    async fn fetch_payment(
        &self,
        location_id: &str,
        payment_id: &str,
    ) -> Result<serde_json::Value, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state
            .call_log
            .push((location_id.to_string(), payment_id.to_string()));

        if state.reject_all {
            return Err(PaymentError::NotAuthorized {
                message: "Not Authorized".to_string(),
            });
        }

        state
            .payments
            .get(&(location_id.to_string(), payment_id.to_string()))
            .cloned()
            .ok_or_else(|| PaymentError::NotFound {
                message: format!("Payment {payment_id} not found"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_payment() {
        let mock = MockPaymentsGateway::new();
        mock.set_payment("loc", "pay", serde_json::json!({"id": "pay"}));

        let payment = mock.fetch_payment("loc", "pay").await.unwrap();

        assert_eq!(payment["id"], "pay");
    }

    #[tokio::test]
    async fn unknown_payment_is_not_found() {
        let mock = MockPaymentsGateway::new();

        let err = mock.fetch_payment("loc", "missing").await.unwrap_err();

        assert!(matches!(err, PaymentError::NotFound { .. }));
    }

    #[tokio::test]
    async fn rejecting_mock_fails_every_fetch() {
        let mock = MockPaymentsGateway::rejecting_all();
        mock.set_payment("loc", "pay", serde_json::json!({}));

        let err = mock.fetch_payment("loc", "pay").await.unwrap_err();

        assert!(matches!(err, PaymentError::NotAuthorized { .. }));
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let mock = MockPaymentsGateway::new();
        let _ = mock.fetch_payment("loc", "pay").await;

        assert_eq!(mock.calls(), vec![("loc".to_string(), "pay".to_string())]);
    }
}
