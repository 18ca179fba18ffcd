//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod process_payment_notification;

pub use process_payment_notification::{
    NotificationError, PaymentNotification, ProcessPaymentNotificationCommand,
    ProcessPaymentNotificationHandler, ProcessPaymentNotificationResult,
};
