//! MongoDB client handle shared by the persistence adapters.
//!
//! The driver pools connections internally, so a single [`DocumentStore`] is
//! built at startup and cloned into each repository. Construction pings the
//! server so an unreachable store is detected before any request is served.

use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// Collection receiving contact messages unless configured otherwise.
pub const DEFAULT_MESSAGES_COLLECTION: &str = "messages";

/// Errors that can occur while connecting to the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string or client options were rejected.
    #[error("failed to configure document store client: {message}")]
    Build { message: String },

    /// The server did not answer the initial ping.
    #[error("document store did not respond to ping: {message}")]
    Ping { message: String },
}

impl StoreError {
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Configuration for the document store connection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use storefront::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017", "halfsy", "products")
///     .with_messages_collection("contact_messages")
///     .with_server_selection_timeout(Duration::from_secs(2));
/// assert_eq!(config.messages_collection(), "contact_messages");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    uri: String,
    database: String,
    products_collection: String,
    messages_collection: String,
    server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with the default messages collection and a
    /// five second server selection timeout.
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        products_collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            products_collection: products_collection.into(),
            messages_collection: DEFAULT_MESSAGES_COLLECTION.to_owned(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_messages_collection(mut self, name: impl Into<String>) -> Self {
        self.messages_collection = name.into();
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn products_collection(&self) -> &str {
        &self.products_collection
    }

    pub fn messages_collection(&self) -> &str {
        &self.messages_collection
    }

    pub fn server_selection_timeout(&self) -> Duration {
        self.server_selection_timeout
    }
}

/// Connected database handle.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    database: Database,
    products_collection: String,
    messages_collection: String,
}

impl DocumentStore {
    /// Connect and verify the server answers a ping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Build`] for an unusable connection string and
    /// [`StoreError::Ping`] when the server cannot be reached.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::build(err.to_string()))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_owned());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client =
            Client::with_options(options).map_err(|err| StoreError::build(err.to_string()))?;
        let database = client.database(config.database());
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::ping(err.to_string()))?;

        Ok(Self {
            database,
            products_collection: config.products_collection,
            messages_collection: config.messages_collection,
        })
    }

    pub(crate) fn products(&self) -> Collection<Document> {
        self.database.collection(&self.products_collection)
    }

    pub(crate) fn messages(&self) -> Collection<Document> {
        self.database.collection(&self.messages_collection)
    }
}

/// Whether a driver error means the store could not be reached, as opposed
/// to a query the server rejected.
pub(crate) fn is_connectivity_failure(error: &MongoError) -> bool {
    matches!(
        *error.kind,
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
    )
}
