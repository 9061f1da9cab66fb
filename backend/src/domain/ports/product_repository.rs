//! Read-side port for the product catalogue.
//!
//! The catalogue lives in an externally populated document collection. This
//! port keeps query construction (filters, ranking, pagination) inside the
//! adapter while the domain owns the semantics through
//! [`ProductListingQuery`].

use async_trait::async_trait;

use crate::domain::{Product, ProductFilter, ProductId, ProductListingQuery};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the product catalogue.
    pub enum ProductRepositoryError {
        /// The store is not configured or could not be reached.
        Connection { message: String } =>
            "product store connection failed: {message}",
        /// Query failed during execution or document conversion.
        Query { message: String } =>
            "product store query failed: {message}",
    }
}

/// Port for reading catalogue products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Return one ranked, sorted page of products matching the query.
    ///
    /// Without a brand filter, priority brands sort ahead of all others; the
    /// optional sort applies within each rank.
    async fn list(
        &self,
        query: &ProductListingQuery,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Count every product matching `filter`, ignoring pagination.
    async fn count(&self, filter: &ProductFilter) -> Result<u64, ProductRepositoryError>;

    /// Up to `limit` products carrying a non-empty `disc_pct`, in store order.
    async fn discounted(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Up to `limit` products whose `product_link` is not in `links`, in
    /// store order.
    async fn excluding_links(
        &self,
        links: &[String],
        limit: u64,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// First `limit` products in store order.
    async fn first(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch a single product by its store identifier.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Distinct string `brand_name` values in store order.
    async fn distinct_brands(&self) -> Result<Vec<String>, ProductRepositoryError>;
}

/// Fixture implementation backed by an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductRepository;

#[async_trait]
impl ProductRepository for FixtureProductRepository {
    async fn list(
        &self,
        _query: &ProductListingQuery,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self, _filter: &ProductFilter) -> Result<u64, ProductRepositoryError> {
        Ok(0)
    }

    async fn discounted(&self, _limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(Vec::new())
    }

    async fn excluding_links(
        &self,
        _links: &[String],
        _limit: u64,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(Vec::new())
    }

    async fn first(&self, _limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(None)
    }

    async fn distinct_brands(&self) -> Result<Vec<String>, ProductRepositoryError> {
        Ok(Vec::new())
    }
}
