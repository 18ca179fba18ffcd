//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentsGateway` - Port for fetching payments from the payments API

mod payments;

pub use payments::{PaymentError, PaymentsGateway};
