//! Catalogue browsing service.
//!
//! Implements [`CatalogueQuery`] over a [`ProductRepository`]. Listing and
//! lookups map store failures straight onto domain errors; top deals retries
//! once with a plain store-order read before giving up.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::ports::{CatalogueQuery, ProductRepository, ProductRepositoryError};
use crate::domain::{
    Error, Product, ProductId, ProductListingQuery, ProductPage, STORE_UNAVAILABLE_MESSAGE,
    backfill_deals, select_top_deals, selected_links,
};

/// Catalogue service implementing the catalogue driving port.
#[derive(Clone)]
pub struct CatalogueService<R: ?Sized> {
    products: Arc<R>,
}

impl<R: ?Sized> CatalogueService<R> {
    /// Create a new service over the given repository.
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }
}

/// Driver text stays in the log; clients only see the fixed message.
fn map_repository_error(failure: ProductRepositoryError) -> Error {
    match failure {
        ProductRepositoryError::Connection { message } => {
            error!(cause = %message, "product store unavailable");
            Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE)
        }
        ProductRepositoryError::Query { message } => {
            error!(cause = %message, "product store query failed");
            Error::internal(format!("product store error: {message}"))
        }
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

impl<R> CatalogueService<R>
where
    R: ProductRepository + ?Sized,
{
    async fn ranked_deals(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        let wanted = to_usize(limit);
        let candidates = self.products.discounted(limit.saturating_mul(2)).await?;
        let selection = select_top_deals(candidates, wanted);
        if selection.len() >= wanted {
            return Ok(selection);
        }

        let links = selected_links(&selection);
        let missing = limit.saturating_sub(selection.len() as u64);
        let extras = self.products.excluding_links(&links, missing).await?;
        Ok(backfill_deals(selection, extras, wanted))
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueService<R>
where
    R: ProductRepository + ?Sized,
{
    async fn list_products(&self, query: ProductListingQuery) -> Result<ProductPage, Error> {
        let products = self
            .products
            .list(&query)
            .await
            .map_err(map_repository_error)?;
        let total = self
            .products
            .count(query.filter())
            .await
            .map_err(map_repository_error)?;

        let page = query.page();
        Ok(ProductPage {
            products,
            page,
            summary: page.summarise(total),
        })
    }

    async fn top_deals(&self, limit: u64) -> Result<Vec<Product>, Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        match self.ranked_deals(limit).await {
            Ok(deals) => Ok(deals),
            Err(err) => {
                warn!(error = %err, limit, "top deals ranking failed; falling back to store order");
                self.products
                    .first(limit)
                    .await
                    .map_err(map_repository_error)
            }
        }
    }

    async fn product(&self, id: &ProductId) -> Result<Product, Error> {
        self.products
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Product not found"))
    }

    async fn brands(&self) -> Result<Vec<String>, Error> {
        self.products
            .distinct_brands()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
