//! HTTP server configuration object.

use std::net::SocketAddr;

use storefront::inbound::http::health::Dependencies;
use storefront::outbound::mail::SmtpConfig;
use storefront::outbound::persistence::DocumentStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Option<DocumentStore>,
    pub(crate) smtp: Option<SmtpConfig>,
    pub(crate) operator: Option<String>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: None,
            smtp: None,
            operator: None,
        }
    }

    /// Attach a connected document store. Without one, catalogue and contact
    /// requests fail with `service_unavailable`.
    #[must_use]
    pub fn with_store(mut self, store: Option<DocumentStore>) -> Self {
        self.store = store;
        self
    }

    /// Attach relay settings for operator notifications.
    #[must_use]
    pub fn with_smtp(mut self, smtp: Option<SmtpConfig>) -> Self {
        self.smtp = smtp;
        self
    }

    /// Address that receives contact alerts.
    #[must_use]
    pub fn with_operator(mut self, operator: Option<String>) -> Self {
        self.operator = operator;
        self
    }

    /// Backing services reported by the readiness probe.
    #[must_use]
    pub fn dependencies(&self) -> Dependencies {
        Dependencies {
            store_connected: self.store.is_some(),
            mail_configured: self.smtp.is_some(),
        }
    }
}
