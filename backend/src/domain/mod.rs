//! Domain primitives, services and ports.
//!
//! Purpose: keep catalogue and contact semantics independent of HTTP, the
//! document store and the mail relay. Inbound adapters call the driving ports
//! in [`ports`]; services here implement them over the driven ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Product / ProductId: catalogue records and their store identifier.
//! - ProductListingQuery / ProductPage: listing request and result.
//! - ContactSubmission / ContactMessage / Notification: contact intake.
//! - CatalogueService / ContactService: driving port implementations.

pub mod catalogue_service;
pub mod contact;
pub mod contact_service;
pub mod error;
pub mod listing;
pub mod ports;
pub mod product;
pub mod trace_id;

pub use self::catalogue_service::CatalogueService;
pub use self::contact::{
    CONTACT_ACKNOWLEDGEMENT, ContactMessage, ContactMessageId, ContactReceipt, ContactSubmission,
    ContactValidationError, NOTIFICATION_SUBJECT, Notification,
};
pub use self::contact_service::ContactService;
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, STORE_UNAVAILABLE_MESSAGE, TRACE_ID_HEADER,
};
pub use self::listing::{
    PRIORITY_BRANDS, PRIORITY_BUCKET, ProductFilter, ProductListingQuery, ProductPage,
    STANDARD_BUCKET, SortOrder, SortSpec, backfill_deals, brand_priority, parse_min_discount,
    select_top_deals, selected_links,
};
pub use self::product::{
    BRAND_PRIORITY_FIELD, Product, ProductId, ProductIdValidationError, STORE_ID_FIELD,
    parse_discount_percentage,
};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use storefront::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
