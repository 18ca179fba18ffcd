//! Webhook ingestion endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, WebhookAckResponse};
pub use handlers::{handle_square_webhook, WebhookAppState};
pub use routes::webhook_routes;
