//! Brand listing endpoint.
//!
//! ```text
//! GET /api/brands
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Distinct brand names.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandsResponse {
    #[schema(example = json!(["Brioni", "Zimmermann"]))]
    pub brands: Vec<String>,
}

/// List every brand present in the catalogue.
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "Distinct brands in store order", body = BrandsResponse),
        (status = 500, description = "Store unavailable or failed", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listBrands"
)]
#[get("/brands")]
pub async fn list_brands(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let brands = state.catalogue.brands().await?;
    Ok(HttpResponse::Ok().json(BrandsResponse { brands }))
}
