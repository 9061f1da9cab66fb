//! Product catalogue endpoints.
//!
//! ```text
//! GET /api/products/top-deals
//! GET /api/products
//! GET /api/products/{id}
//! ```
//!
//! `top-deals` must be registered ahead of `{id}` so the literal segment wins.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::DEFAULT_TOP_DEALS_LIMIT;
use crate::domain::{
    Error, Product, ProductFilter, ProductListingQuery, ProductPage, SortOrder, SortSpec,
    parse_min_discount,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ProductSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    LIMIT, parse_count_limit, parse_page_request, parse_product_id,
};

/// Raw listing query string.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub brand: Option<String>,
    /// Kept as text so non-numeric values can be ignored instead of rejected.
    pub min_discount: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl TryFrom<ProductListParams> for ProductListingQuery {
    type Error = Error;

    fn try_from(params: ProductListParams) -> Result<Self, Self::Error> {
        let page = parse_page_request(params.page, params.limit)?;
        let filter = ProductFilter::new(
            params.brand,
            parse_min_discount(params.min_discount.as_deref()),
        );
        let order = SortOrder::from_param(params.sort_order.as_deref());
        let sort = params
            .sort_by
            .and_then(|field| SortSpec::new(field, order));
        Ok(ProductListingQuery::new(page, filter, sort))
    }
}

/// Raw top deals query string.
#[derive(Debug, Default, Deserialize)]
pub struct TopDealsParams {
    pub limit: Option<i64>,
}

/// One page of products with pagination totals.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    #[schema(value_type = Vec<ProductSchema>)]
    pub products: Vec<Product>,
    /// Products matching the filters across all pages.
    pub total_products: u64,
    pub limit: u64,
    pub page: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

impl From<ProductPage> for ProductListResponse {
    fn from(value: ProductPage) -> Self {
        Self {
            products: value.products,
            total_products: value.summary.total,
            limit: value.page.limit(),
            page: value.page.page(),
            total_pages: value.summary.total_pages,
            has_more: value.summary.has_more,
        }
    }
}

/// List the catalogue, priority brands first.
#[utoipa::path(
    get,
    path = "/api/products",
    description = "Page through products. Without a brand filter, Brunello Cucinelli, Brioni and Zimmermann lead the listing; sort_by then orders within each group.",
    params(
        ("page" = Option<i64>, Query, description = "One-based page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Page size, default 100"),
        ("brand" = Option<String>, Query, description = "Exact brand name"),
        ("min_discount" = Option<String>, Query, description = "Minimum numeric discount; ignored when not a number"),
        ("sort_by" = Option<String>, Query, description = "Attribute to sort by within each brand group"),
        ("sort_order" = Option<String>, Query, description = "asc (default) or desc")
    ),
    responses(
        (status = 200, description = "Product page", body = ProductListResponse),
        (status = 400, description = "Invalid page or limit", body = ErrorSchema),
        (status = 500, description = "Store unavailable or failed", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    params: web::Query<ProductListParams>,
) -> ApiResult<HttpResponse> {
    let query = ProductListingQuery::try_from(params.into_inner())?;
    let page = state.catalogue.list_products(query).await?;
    Ok(HttpResponse::Ok().json(ProductListResponse::from(page)))
}

/// Products with the deepest percentage discounts.
#[utoipa::path(
    get,
    path = "/api/products/top-deals",
    description = "Rank discounted products by their disc_pct label, topping up with other products when fewer than limit are discounted.",
    params(
        ("limit" = Option<i64>, Query, description = "Number of products, default 4; 0 yields an empty list")
    ),
    responses(
        (status = 200, description = "Top deals", body = Vec<ProductSchema>),
        (status = 400, description = "Negative limit", body = ErrorSchema),
        (status = 500, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listTopDeals"
)]
#[get("/products/top-deals")]
pub async fn top_deals(
    state: web::Data<HttpState>,
    params: web::Query<TopDealsParams>,
) -> ApiResult<HttpResponse> {
    let limit = parse_count_limit(params.limit, DEFAULT_TOP_DEALS_LIMIT, LIMIT)?;
    let deals = state.catalogue.top_deals(limit).await?;
    Ok(HttpResponse::Ok().json(deals))
}

/// Fetch one product by its store identifier.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24-character hexadecimal product identifier")),
    responses(
        (status = 200, description = "Product", body = ProductSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such product", body = ErrorSchema),
        (status = 500, description = "Store unavailable or failed", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_product_id(&path.into_inner())?;
    let product = state.catalogue.product(&id).await?;
    Ok(HttpResponse::Ok().json(product))
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
