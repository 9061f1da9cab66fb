//! Stand-in repositories used when the document store is not configured or
//! could not be reached at startup.
//!
//! Every call fails with a connection error so the services report
//! `service_unavailable` instead of the process refusing to start.

use async_trait::async_trait;

use crate::domain::ports::{
    ContactMessageRepository, ContactMessageRepositoryError, ProductRepository,
    ProductRepositoryError,
};
use crate::domain::{
    ContactMessage, ContactMessageId, Product, ProductFilter, ProductId, ProductListingQuery,
    STORE_UNAVAILABLE_MESSAGE,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

fn products_down<T>() -> Result<T, ProductRepositoryError> {
    Err(ProductRepositoryError::connection(STORE_UNAVAILABLE_MESSAGE))
}

#[async_trait]
impl ProductRepository for UnavailableStore {
    async fn list(
        &self,
        _query: &ProductListingQuery,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        products_down()
    }

    async fn count(&self, _filter: &ProductFilter) -> Result<u64, ProductRepositoryError> {
        products_down()
    }

    async fn discounted(&self, _limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        products_down()
    }

    async fn excluding_links(
        &self,
        _links: &[String],
        _limit: u64,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        products_down()
    }

    async fn first(&self, _limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        products_down()
    }

    async fn find_by_id(&self, _id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        products_down()
    }

    async fn distinct_brands(&self) -> Result<Vec<String>, ProductRepositoryError> {
        products_down()
    }
}

#[async_trait]
impl ContactMessageRepository for UnavailableStore {
    async fn insert(
        &self,
        _message: &ContactMessage,
    ) -> Result<ContactMessageId, ContactMessageRepositoryError> {
        Err(ContactMessageRepositoryError::connection(
            STORE_UNAVAILABLE_MESSAGE,
        ))
    }
}
