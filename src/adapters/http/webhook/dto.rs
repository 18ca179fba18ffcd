//! Data transfer objects for the webhook endpoint.

use serde::Serialize;

/// Acknowledgement returned for an accepted webhook.
#[derive(Debug, Serialize)]
pub struct WebhookAckResponse {
    /// True once the notification was authenticated and handled.
    pub received: bool,
}

impl WebhookAckResponse {
    pub fn new() -> Self {
        Self { received: true }
    }
}

impl Default for WebhookAckResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_serializes_received_flag() {
        let json = serde_json::to_value(WebhookAckResponse::new()).unwrap();
        assert_eq!(json, serde_json::json!({"received": true}));
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let json =
            serde_json::to_value(ErrorResponse::new("INVALID_SIGNATURE", "invalid signature"))
                .unwrap();
        assert_eq!(json["error_code"], "INVALID_SIGNATURE");
        assert_eq!(json["message"], "invalid signature");
    }
}
