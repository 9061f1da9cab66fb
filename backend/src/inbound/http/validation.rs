//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection is an [`Error::invalid_request`] whose details name the
//! offending field, a stable code and, where useful, the rejected value.

use actix_web::web;
use pagination::{DEFAULT_PAGE_LIMIT, FIRST_PAGE, PageRequest, PaginationError};
use serde_json::json;
use tracing::debug;

use crate::domain::{ContactSubmission, ContactValidationError, Error, ProductId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    OutOfRange,
    InvalidProductId,
    InvalidEmail,
    EmptyMessage,
    MalformedQuery,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidProductId => "invalid_product_id",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::EmptyMessage => "empty_message",
            ErrorCode::MalformedQuery => "malformed_query",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const PAGE: FieldName = FieldName::new("page");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");
pub(crate) const PRODUCT_ID: FieldName = FieldName::new("id");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const MESSAGE: FieldName = FieldName::new("message");

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(
    field: FieldName,
    code: ErrorCode,
    message: impl Into<String>,
    value: impl Into<serde_json::Value>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value.into(),
    }))
}

fn out_of_range_error(field: FieldName, value: i64) -> Error {
    let name = field.as_str();
    field_value_error(
        field,
        ErrorCode::OutOfRange,
        format!("{name} must be greater than or equal to 1"),
        value,
    )
}

/// Validate `page` and `limit`, applying the listing defaults.
pub(crate) fn parse_page_request(
    page: Option<i64>,
    limit: Option<i64>,
) -> Result<PageRequest, Error> {
    let page = page.unwrap_or(FIRST_PAGE as i64);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT as i64);
    PageRequest::new(page, limit).map_err(|err| match err {
        PaginationError::InvalidPage { page } => out_of_range_error(PAGE, page),
        PaginationError::InvalidLimit { limit } => out_of_range_error(LIMIT, limit),
    })
}

/// Validate an optional non-negative count, falling back to `default`.
pub(crate) fn parse_count_limit(
    value: Option<i64>,
    default: u64,
    field: FieldName,
) -> Result<u64, Error> {
    match value {
        None => Ok(default),
        Some(raw) => u64::try_from(raw).map_err(|_| out_of_range_error(field, raw)),
    }
}

pub(crate) fn parse_product_id(value: &str) -> Result<ProductId, Error> {
    ProductId::new(value).map_err(|_| {
        field_value_error(
            PRODUCT_ID,
            ErrorCode::InvalidProductId,
            "Invalid product ID format",
            value,
        )
    })
}

pub(crate) fn parse_contact_submission(
    email: &str,
    message: String,
) -> Result<ContactSubmission, Error> {
    ContactSubmission::new(email, message).map_err(|err| match err {
        ContactValidationError::InvalidEmail => field_value_error(
            EMAIL,
            ErrorCode::InvalidEmail,
            "email must be a valid email address",
            email,
        ),
        ContactValidationError::EmptyMessage => {
            field_error(MESSAGE, ErrorCode::EmptyMessage, "message must not be empty")
        }
    })
}

/// Query extractor configuration rendering parse failures in the error
/// envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting malformed query string");
        Error::invalid_request(format!("invalid query string: {err}"))
            .with_details(json!({ "code": ErrorCode::MalformedQuery.as_str() }))
            .into()
    })
}

/// JSON extractor configuration rendering body failures in the error
/// envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting malformed JSON body");
        Error::invalid_request(format!("invalid request body: {err}"))
            .with_details(json!({ "code": ErrorCode::MalformedBody.as_str() }))
            .into()
    })
}
