//! Service banner.
//!
//! ```text
//! GET /
//! ```

use actix_web::{HttpResponse, get};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned by the root endpoint.
pub const BANNER: &str = "Halfsy API is running";

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Halfsy API is running")]
    pub message: &'static str,
}

/// Confirm the API process is serving requests.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = RootResponse)),
    tags = ["meta"],
    operation_id = "getRoot"
)]
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse { message: BANNER })
}
