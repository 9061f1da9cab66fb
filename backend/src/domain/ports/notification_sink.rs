//! Outbound port for operator notifications.
//!
//! Delivery is best effort. Callers log failures and carry on, so adapters
//! should report the cause precisely rather than retry.

use async_trait::async_trait;

use crate::domain::Notification;

use super::define_port_error;

define_port_error! {
    /// Errors raised when delivering a notification.
    pub enum NotificationError {
        /// Mail credentials are missing.
        NotConfigured => "mail relay credentials are not configured",
        /// The message could not be built from the notification.
        Composition { message: String } =>
            "notification could not be composed: {message}",
        /// The relay refused the message or the credentials.
        Rejected { message: String } =>
            "mail relay rejected the notification: {message}",
        /// The relay could not be reached or the session failed.
        Transport { message: String } =>
            "mail relay transport failed: {message}",
    }
}

/// Port for sending notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Sink used when no mail relay is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotificationSink;

#[async_trait]
impl NotificationSink for DisabledNotificationSink {
    async fn send(&self, _notification: &Notification) -> Result<(), NotificationError> {
        Err(NotificationError::not_configured())
    }
}
