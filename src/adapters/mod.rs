//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `square` - Square Connect API client (and a test mock)
//! - `http` - Axum webhook ingestion endpoint

pub mod http;
pub mod square;

pub use square::{MockPaymentsGateway, SquareClient};
