//! Square Connect v1 API client.
//!
//! Implements the `PaymentsGateway` port against the Square Connect API.
//! The client holds its bearer credential and base URL at construction and
//! owns a pooled `reqwest::Client`.
//!
//! # Security
//!
//! The access token is held as a `secrecy::SecretString` and only exposed
//! at the moment the `Authorization` header is built. It never appears in
//! logs or error values.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::config::SquareConfig;
use crate::ports::{PaymentError, PaymentsGateway};

/// Square Connect API client.
pub struct SquareClient {
    config: SquareConfig,
    http_client: reqwest::Client,
}

/// Error body returned by the Connect API on non-success statuses.
///
/// Example: `{"type":"service.not_authorized","message":"Not Authorized"}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl SquareClient {
    /// Creates a client from the given configuration.
    pub fn new(config: SquareConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Formats the fetch-payment route for a location and payment ID.
    fn payment_url(&self, location_id: &str, payment_id: &str) -> String {
        format!(
            "{}/v1/{}/payments/{}",
            self.config.api_base_url, location_id, payment_id
        )
    }

    /// Extracts the `message` field from an API error body.
    ///
    /// The Connect API reports errors as `{"type": ..., "message": ...}`;
    /// anything unparseable falls back to the raw text.
    fn error_message(body: &[u8]) -> String {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) if !parsed.message.is_empty() => parsed.message,
            _ => String::from_utf8_lossy(body).into_owned(),
        }
    }
}

#[async_trait]
impl PaymentsGateway for SquareClient {
    async fn fetch_payment(
        &self,
        location_id: &str,
        payment_id: &str,
    ) -> Result<serde_json::Value, PaymentError> {
        let url = self.payment_url(location_id, payment_id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.config.access_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        match status {
            reqwest::StatusCode::NOT_FOUND => {
                let message = Self::error_message(&body);
                tracing::warn!(location_id, payment_id, %message, "payment not found");
                Err(PaymentError::NotFound { message })
            }
            reqwest::StatusCode::UNAUTHORIZED => {
                let message = Self::error_message(&body);
                tracing::warn!(location_id, payment_id, %message, "payments API rejected credential");
                Err(PaymentError::NotAuthorized { message })
            }
            // All other outcomes pass through as decoded JSON; the API
            // reports field-level problems inside the payload itself.
            _ => Ok(serde_json::from_slice(&body)?),
        }
    }
}
