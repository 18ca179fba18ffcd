//! Square Connect API adapter.
//!
//! Implements the `PaymentsGateway` port against the Square Connect v1
//! API, plus a configurable mock for tests.

mod client;
mod mock_gateway;

pub use client::SquareClient;
pub use mock_gateway::MockPaymentsGateway;
