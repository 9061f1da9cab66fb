//! Driving port for catalogue browsing.
//!
//! Inbound adapters use this port to list, rank and look up products without
//! depending on how the catalogue is stored.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId, ProductListingQuery, ProductPage};

/// Number of products returned by top deals when the caller sets no limit.
pub const DEFAULT_TOP_DEALS_LIMIT: u64 = 4;

/// Driving port for catalogue read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), storefront::domain::Error> {
/// use storefront::domain::ProductListingQuery;
/// use storefront::domain::ports::{CatalogueQuery, FixtureCatalogueQuery};
///
/// let page = FixtureCatalogueQuery
///     .list_products(ProductListingQuery::default())
///     .await?;
/// assert!(page.products.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Return one page of the filtered, ranked catalogue with totals.
    async fn list_products(&self, query: ProductListingQuery) -> Result<ProductPage, Error>;

    /// Return up to `limit` products with the deepest discounts, topped up
    /// with other products when too few are discounted.
    async fn top_deals(&self, limit: u64) -> Result<Vec<Product>, Error>;

    /// Fetch one product; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn product(&self, id: &ProductId) -> Result<Product, Error>;

    /// Distinct brand names in store order.
    async fn brands(&self) -> Result<Vec<String>, Error>;
}

/// Fixture query over an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueQuery;

#[async_trait]
impl CatalogueQuery for FixtureCatalogueQuery {
    async fn list_products(&self, query: ProductListingQuery) -> Result<ProductPage, Error> {
        let page = query.page();
        Ok(ProductPage {
            products: Vec::new(),
            page,
            summary: page.summarise(0),
        })
    }

    async fn top_deals(&self, _limit: u64) -> Result<Vec<Product>, Error> {
        Ok(Vec::new())
    }

    async fn product(&self, id: &ProductId) -> Result<Product, Error> {
        Err(Error::not_found(format!("product {id} not found")))
    }

    async fn brands(&self) -> Result<Vec<String>, Error> {
        Ok(Vec::new())
    }
}
