//! ProcessPaymentNotificationHandler - Command handler for authenticated
//! webhook notification payloads.
//!
//! Runs after `RequestAuthenticator` has proven the payload's origin. The
//! notification itself only names an entity; for payment events the handler
//! fetches the full payment through the `PaymentsGateway` port.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::ports::{PaymentError, PaymentsGateway};

/// Command to process an authenticated webhook notification.
#[derive(Debug, Clone)]
pub struct ProcessPaymentNotificationCommand {
    /// Raw notification payload, exactly as authenticated.
    pub payload: Vec<u8>,
}

/// Square v1 webhook notification envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentNotification {
    /// Merchant the notification belongs to.
    pub merchant_id: String,
    /// Location the referenced entity lives under.
    pub location_id: String,
    /// Event type, e.g. `PAYMENT_UPDATED`.
    pub event_type: String,
    /// ID of the entity the event refers to.
    pub entity_id: String,
}

/// Result of processing a notification.
#[derive(Debug, Clone)]
pub enum ProcessPaymentNotificationResult {
    /// A payment event was received and the payment was fetched.
    PaymentFetched {
        entity_id: String,
        payment: serde_json::Value,
    },
    /// Event acknowledged but no action taken (unknown or unsupported type).
    Ignored { event_type: String },
}

/// Errors from notification processing.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The payload was not a well-formed notification envelope.
    #[error("malformed notification payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Fetching the referenced payment failed.
    #[error(transparent)]
    Gateway(#[from] PaymentError),
}

/// Handler for authenticated payment notifications.
pub struct ProcessPaymentNotificationHandler {
    payments: Arc<dyn PaymentsGateway>,
}

impl ProcessPaymentNotificationHandler {
    pub fn new(payments: Arc<dyn PaymentsGateway>) -> Self {
        Self { payments }
    }

    /// Parses the notification and fetches the referenced payment for
    /// payment events. Unknown event types are acknowledged and ignored,
    /// never treated as failures.
    pub async fn handle(
        &self,
        cmd: ProcessPaymentNotificationCommand,
    ) -> Result<ProcessPaymentNotificationResult, NotificationError> {
        let notification: PaymentNotification = serde_json::from_slice(&cmd.payload)?;

        match notification.event_type.as_str() {
            "PAYMENT_UPDATED" => {
                let payment = self
                    .payments
                    .fetch_payment(&notification.location_id, &notification.entity_id)
                    .await?;

                tracing::info!(
                    merchant_id = %notification.merchant_id,
                    location_id = %notification.location_id,
                    entity_id = %notification.entity_id,
                    "fetched payment for notification"
                );

                Ok(ProcessPaymentNotificationResult::PaymentFetched {
                    entity_id: notification.entity_id,
                    payment,
                })
            }
            other => {
                tracing::debug!(event_type = %other, "ignoring notification");
                Ok(ProcessPaymentNotificationResult::Ignored {
                    event_type: other.to_string(),
                })
            }
        }
    }
}
