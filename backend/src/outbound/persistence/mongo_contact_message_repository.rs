//! MongoDB-backed contact message store.

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document, doc};

use crate::domain::ports::{ContactMessageRepository, ContactMessageRepositoryError};
use crate::domain::{ContactMessage, ContactMessageId};

use super::store::{DocumentStore, is_connectivity_failure};

/// Inserts each contact message as a single document.
#[derive(Clone)]
pub struct MongoContactMessageRepository {
    store: DocumentStore,
}

impl MongoContactMessageRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

pub(crate) fn message_document(message: &ContactMessage) -> Document {
    doc! {
        "email": message.email(),
        "message": message.message(),
        "timestamp": bson::DateTime::from_millis(message.timestamp().timestamp_millis()),
    }
}

/// The driver assigns an `ObjectId` unless the document carried its own `_id`.
pub(crate) fn message_id(inserted: Bson) -> Result<ContactMessageId, ContactMessageRepositoryError> {
    let raw = match inserted {
        Bson::ObjectId(id) => id.to_hex(),
        Bson::String(id) => id,
        other => {
            return Err(ContactMessageRepositoryError::query(format!(
                "unexpected inserted id type: {other}"
            )));
        }
    };
    ContactMessageId::new(raw)
        .ok_or_else(|| ContactMessageRepositoryError::query("store returned a blank id"))
}

#[async_trait]
impl ContactMessageRepository for MongoContactMessageRepository {
    async fn insert(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessageId, ContactMessageRepositoryError> {
        let result = self
            .store
            .messages()
            .insert_one(message_document(message))
            .await
            .map_err(|err| {
                if is_connectivity_failure(&err) {
                    ContactMessageRepositoryError::connection(err.to_string())
                } else {
                    ContactMessageRepositoryError::query(err.to_string())
                }
            })?;
        message_id(result.inserted_id)
    }
}
