//! MongoDB persistence adapters.
//!
//! [`DocumentStore`] owns the driver client; the repositories translate
//! between BSON documents and domain types and map driver failures onto the
//! port error variants. [`UnavailableStore`] stands in when no store could be
//! connected.

mod mongo_contact_message_repository;
mod mongo_product_repository;
mod store;
mod unavailable;

pub use mongo_contact_message_repository::MongoContactMessageRepository;
pub use mongo_product_repository::MongoProductRepository;
pub use store::{DEFAULT_MESSAGES_COLLECTION, DocumentStore, StoreConfig, StoreError};
pub use unavailable::UnavailableStore;
