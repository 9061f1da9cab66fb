//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod brands;
pub mod contact;
pub mod error;
pub mod health;
pub mod products;
pub mod root;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the root banner and the `/api` routes along with the extractor
/// configuration that renders malformed input in the error envelope.
///
/// Callers supply [`state::HttpState`] as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::query_config())
        .app_data(validation::json_config())
        .service(root::root)
        .service(
            web::scope("/api")
                .service(products::top_deals)
                .service(products::list_products)
                .service(products::get_product)
                .service(brands::list_brands)
                .service(contact::submit_contact),
        );
}
