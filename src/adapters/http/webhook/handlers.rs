//! HTTP handlers for webhook ingestion.
//!
//! The webhook endpoint carries no user authentication; requests are
//! authenticated by their signature. Status codes steer Square's retry
//! behavior: 4xx rejections are final, 5xx responses are retried.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::{
    NotificationError, ProcessPaymentNotificationCommand, ProcessPaymentNotificationHandler,
    ProcessPaymentNotificationResult,
};
use crate::domain::signature::{self, AuthError, RequestAuthenticator};
use crate::ports::PaymentsGateway;

use super::dto::{ErrorResponse, WebhookAckResponse};

/// Shared application state for the webhook routes.
#[derive(Clone)]
pub struct WebhookAppState {
    pub authenticator: Arc<RequestAuthenticator>,
    pub payments: Arc<dyn PaymentsGateway>,
}

impl WebhookAppState {
    /// Create handlers on demand from the shared state.
    pub fn notification_handler(&self) -> ProcessPaymentNotificationHandler {
        ProcessPaymentNotificationHandler::new(self.payments.clone())
    }
}

/// Handle an inbound Square webhook.
///
/// Authenticates the request signature, then hands the (restored) payload
/// to the notification handler.
pub async fn handle_square_webhook(
    State(state): State<WebhookAppState>,
    mut request: Request,
) -> Response {
    if let Err(err) = state.authenticator.authenticate_request(&mut request).await {
        return auth_error_response(&err);
    }

    // The authenticator restored the body; read it the same way any
    // downstream consumer would.
    let payload = match signature::capture(&mut request).await {
        Ok(bytes) => bytes,
        Err(err) => return auth_error_response(&err),
    };

    let result = state
        .notification_handler()
        .handle(ProcessPaymentNotificationCommand {
            payload: payload.to_vec(),
        })
        .await;

    match result {
        Ok(ProcessPaymentNotificationResult::PaymentFetched { entity_id, .. }) => {
            tracing::info!(%entity_id, "webhook processed");
            (StatusCode::OK, Json(WebhookAckResponse::new())).into_response()
        }
        Ok(ProcessPaymentNotificationResult::Ignored { event_type }) => {
            tracing::debug!(%event_type, "webhook acknowledged without action");
            (StatusCode::OK, Json(WebhookAckResponse::new())).into_response()
        }
        Err(NotificationError::Malformed(err)) => {
            tracing::warn!(error = %err, "malformed notification payload");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "MALFORMED_NOTIFICATION",
                    "Notification payload could not be parsed",
                )),
            )
                .into_response()
        }
        // The payload was authentic but the fetch failed; answer 502 so
        // Square redelivers the notification.
        Err(NotificationError::Gateway(err)) => {
            tracing::error!(error = %err, "payment fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "PAYMENT_FETCH_FAILED",
                    "Failed to fetch the referenced payment",
                )),
            )
                .into_response()
        }
    }
}

/// Maps an authentication failure to its transport-level rejection.
fn auth_error_response(err: &AuthError) -> Response {
    let (status, error_code) = match err {
        AuthError::InvalidSignature { .. } => (StatusCode::UNAUTHORIZED, "INVALID_SIGNATURE"),
        AuthError::MissingSignature => (StatusCode::UNAUTHORIZED, "MISSING_SIGNATURE"),
        AuthError::MalformedSignature => (StatusCode::BAD_REQUEST, "MALFORMED_SIGNATURE"),
        AuthError::BodyRead(_) => (StatusCode::INTERNAL_SERVER_ERROR, "BODY_READ_FAILED"),
    };

    (status, Json(ErrorResponse::new(error_code, err.to_string()))).into_response()
}
