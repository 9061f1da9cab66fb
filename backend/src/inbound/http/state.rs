//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueQuery, ContactCommand, FixtureCatalogueQuery, FixtureContactCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub contact: Arc<dyn ContactCommand>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use storefront::domain::ports::{FixtureCatalogueQuery, FixtureContactCommand};
    /// use storefront::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCatalogueQuery), Arc::new(FixtureContactCommand));
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(catalogue: Arc<dyn CatalogueQuery>, contact: Arc<dyn ContactCommand>) -> Self {
        Self { catalogue, contact }
    }
}

impl Default for HttpState {
    /// Fixture-backed state for tests that do not exercise the ports.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureCatalogueQuery),
            Arc::new(FixtureContactCommand),
        )
    }
}
