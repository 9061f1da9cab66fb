//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every catalogue, contact and health endpoint along
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::brands::BrandsResponse;
use crate::inbound::http::contact::{ContactRequest, ContactResponse};
use crate::inbound::http::health::ReadinessReport;
use crate::inbound::http::products::ProductListResponse;
use crate::inbound::http::root::RootResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ProductSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Halfsy storefront API",
        description = "Product catalogue browsing and contact form intake for Halfsy.shop."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::root,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::top_deals,
        crate::inbound::http::products::get_product,
        crate::inbound::http::brands::list_brands,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProductSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ProductListResponse,
        BrandsResponse,
        ContactRequest,
        ContactResponse,
        RootResponse,
        ReadinessReport,
    )),
    tags(
        (name = "products", description = "Catalogue browsing"),
        (name = "contact", description = "Contact form intake"),
        (name = "meta", description = "Service banner"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
