//! Axum router configuration for webhook endpoints.
//!
//! Webhook routes carry no user authentication middleware; each request is
//! authenticated individually via its signature header.

use axum::routing::post;
use axum::Router;

use super::handlers::{handle_square_webhook, WebhookAppState};

/// Create the webhook router.
///
/// # Routes
///
/// - `POST /square` - Authenticate and process a Square webhook
///
/// Mount under the path Square is configured to deliver to, e.g.
/// `/webhooks`:
///
/// ```ignore
/// let app = Router::new()
///     .nest("/webhooks", webhook_routes())
///     .with_state(state);
/// ```
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route("/square", post(handle_square_webhook))
}
