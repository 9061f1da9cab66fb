//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `STOREFRONT_*` environment variables, CLI flags or a
//! config file. Everything is optional: a missing store or mail relay
//! degrades the matching feature rather than stopping the process.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::mail::{DEFAULT_SMTP_HOST, SmtpConfig};
use crate::outbound::persistence::{DEFAULT_MESSAGES_COLLECTION, StoreConfig};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Storefront configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// MongoDB connection string.
    pub mongodb_uri: Option<String>,
    /// Database holding the catalogue.
    pub database_name: Option<String>,
    /// Products collection.
    pub collection_name: Option<String>,
    /// Collection receiving contact messages.
    pub messages_collection: Option<String>,
    /// Relay account, also the sender and recipient of operator alerts.
    pub mail_user: Option<String>,
    pub mail_password: Option<String>,
    pub smtp_host: Option<String>,
    #[ortho_config(default = 587)]
    pub smtp_port: u16,
    /// Listen address.
    pub host: Option<String>,
    #[ortho_config(default = 8080)]
    pub port: u16,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl StorefrontSettings {
    pub fn messages_collection(&self) -> &str {
        present(self.messages_collection.as_ref()).unwrap_or(DEFAULT_MESSAGES_COLLECTION)
    }

    pub fn smtp_host(&self) -> &str {
        present(self.smtp_host.as_ref()).unwrap_or(DEFAULT_SMTP_HOST)
    }

    pub fn host(&self) -> &str {
        present(self.host.as_ref()).unwrap_or(DEFAULT_HOST)
    }

    /// Operator address for contact alerts.
    pub fn operator_address(&self) -> Option<&str> {
        present(self.mail_user.as_ref())
    }

    /// Store settings, or `None` unless the URI, database and collection are
    /// all set.
    pub fn store_config(&self) -> Option<StoreConfig> {
        let uri = present(self.mongodb_uri.as_ref())?;
        let database = present(self.database_name.as_ref())?;
        let collection = present(self.collection_name.as_ref())?;
        Some(
            StoreConfig::new(uri, database, collection)
                .with_messages_collection(self.messages_collection()),
        )
    }

    /// Relay settings, or `None` without both credentials.
    pub fn smtp_config(&self) -> Option<SmtpConfig> {
        let user = present(self.mail_user.as_ref())?;
        let password = self.mail_password.as_deref().filter(|p| !p.is_empty())?;
        Some(SmtpConfig {
            host: self.smtp_host().to_owned(),
            port: self.smtp_port,
            user: user.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host(), self.port).parse()
    }
}
