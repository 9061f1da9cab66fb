//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`CatalogueQuery`, `ContactCommand`) are what inbound
//! adapters call. Driven ports (`ProductRepository`,
//! `ContactMessageRepository`, `NotificationSink`) are what the services
//! call; each returns a typed error so adapters map their failures into
//! predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod contact_command;
mod contact_message_repository;
mod notification_sink;
mod product_repository;

#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueQuery, DEFAULT_TOP_DEALS_LIMIT, FixtureCatalogueQuery};
#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_command::{ContactCommand, FixtureContactCommand};
#[cfg(test)]
pub use contact_message_repository::MockContactMessageRepository;
pub use contact_message_repository::{
    ContactMessageRepository, ContactMessageRepositoryError, FixtureContactMessageRepository,
};
#[cfg(test)]
pub use notification_sink::MockNotificationSink;
pub use notification_sink::{DisabledNotificationSink, NotificationError, NotificationSink};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{
    FixtureProductRepository, ProductRepository, ProductRepositoryError,
};
