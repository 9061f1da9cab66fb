//! Builders wiring driven adapters into the HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::warn;

use storefront::domain::ports::{
    ContactMessageRepository, DisabledNotificationSink, NotificationSink, ProductRepository,
};
use storefront::domain::{CatalogueService, ContactService};
use storefront::inbound::http::state::HttpState;
use storefront::outbound::mail::SmtpNotificationSink;
use storefront::outbound::persistence::{
    MongoContactMessageRepository, MongoProductRepository, UnavailableStore,
};

use super::ServerConfig;

type StoreAdapters = (
    Arc<dyn ProductRepository>,
    Arc<dyn ContactMessageRepository>,
);

fn build_store_adapters(config: &ServerConfig) -> StoreAdapters {
    match &config.store {
        Some(store) => (
            Arc::new(MongoProductRepository::new(store.clone())),
            Arc::new(MongoContactMessageRepository::new(store.clone())),
        ),
        None => (Arc::new(UnavailableStore), Arc::new(UnavailableStore)),
    }
}

fn build_notifier(config: &ServerConfig) -> Arc<dyn NotificationSink> {
    let Some(smtp) = config.smtp.clone() else {
        return Arc::new(DisabledNotificationSink);
    };
    match SmtpNotificationSink::new(smtp) {
        Ok(sink) => Arc::new(sink),
        Err(error) => {
            warn!(%error, "mail relay unusable; contact notifications disabled");
            Arc::new(DisabledNotificationSink)
        }
    }
}

/// Build the HTTP state from the configured adapters, substituting
/// unavailable or disabled stand-ins for anything missing.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let (products, messages) = build_store_adapters(config);
    let catalogue = CatalogueService::new(products);
    let contact = ContactService::new(
        messages,
        build_notifier(config),
        Arc::new(DefaultClock),
        config.operator.clone(),
    );
    HttpState::new(Arc::new(catalogue), Arc::new(contact))
}
