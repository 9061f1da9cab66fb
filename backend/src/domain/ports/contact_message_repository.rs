//! Write-side port for contact messages.

use async_trait::async_trait;

use crate::domain::{ContactMessage, ContactMessageId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when storing contact messages.
    pub enum ContactMessageRepositoryError {
        /// The store is not configured or could not be reached.
        Connection { message: String } =>
            "contact store connection failed: {message}",
        /// The insert was rejected or returned an unusable identifier.
        Query { message: String } =>
            "contact store write failed: {message}",
    }
}

/// Port for persisting contact messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Insert a message atomically and return its store identifier.
    async fn insert(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessageId, ContactMessageRepositoryError>;
}

/// Fixture implementation that accepts every message without storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactMessageRepository;

impl FixtureContactMessageRepository {
    /// Identifier returned for every insert.
    pub const MESSAGE_ID: &'static str = "65f0c0ffee0000000000c0de";
}

#[async_trait]
impl ContactMessageRepository for FixtureContactMessageRepository {
    async fn insert(
        &self,
        _message: &ContactMessage,
    ) -> Result<ContactMessageId, ContactMessageRepositoryError> {
        ContactMessageId::new(Self::MESSAGE_ID)
            .ok_or_else(|| ContactMessageRepositoryError::query("fixture id is blank"))
    }
}
