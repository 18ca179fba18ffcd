//! HTTP adapters.
//!
//! Axum routers and handlers exposing the crate's endpoints.

pub mod webhook;

pub use webhook::{webhook_routes, WebhookAppState};
