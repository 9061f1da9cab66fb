//! Contact form intake endpoint.
//!
//! ```text
//! POST /api/contact {"email":"ada@example.com","message":"Hello"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ContactReceipt, ContactSubmission, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_contact_submission;

/// Contact form body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Do you ship to Lisbon?")]
    pub message: String,
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = Error;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        parse_contact_submission(&value.email, value.message)
    }
}

/// Acknowledgement for a stored contact message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    #[schema(example = "Thank you for contacting us! We'll get back to you soon.")]
    pub message: &'static str,
    /// Store identifier of the saved message.
    #[schema(example = "65f0c0ffee0000000000c0de")]
    pub id: String,
}

impl From<ContactReceipt> for ContactResponse {
    fn from(value: ContactReceipt) -> Self {
        Self {
            success: true,
            message: value.message,
            id: value.id.to_string(),
        }
    }
}

/// Store a contact message and alert the operator.
///
/// A failed alert is logged and does not affect the response.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactResponse),
        (status = 400, description = "Invalid email or empty message", body = ErrorSchema),
        (status = 500, description = "Message could not be stored", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let submission = ContactSubmission::try_from(payload.into_inner())?;
    let receipt = state.contact.submit(submission).await?;
    Ok(HttpResponse::Ok().json(ContactResponse::from(receipt)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockCatalogueQuery, MockContactCommand};
    use crate::domain::{ContactMessageId, ErrorCode};
    use crate::inbound::http::test_utils::test_app;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn state_with(contact: MockContactCommand) -> HttpState {
        HttpState::new(Arc::new(MockCatalogueQuery::new()), Arc::new(contact))
    }

    async fn post_contact(state: HttpState, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(state)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let bytes = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&bytes).expect("JSON body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn valid_submission_is_acknowledged() {
        let mut contact = MockContactCommand::new();
        contact
            .expect_submit()
            .withf(|submission| {
                submission.email() == "ada@example.com" && submission.message() == "Hello"
            })
            .times(1)
            .return_once(|_| {
                Ok(ContactReceipt::new(
                    ContactMessageId::new("65f0c0ffee0000000000c0de").expect("id"),
                ))
            });

        let (status, body) = post_contact(
            state_with(contact),
            json!({ "email": "ada@example.com", "message": "Hello" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Thank you for contacting us! We'll get back to you soon.",
                "id": "65f0c0ffee0000000000c0de",
            })
        );
    }

    #[rstest]
    #[case(json!({ "email": "not-an-email", "message": "Hello" }), Some("email"))]
    #[case(json!({ "email": "ada@example.com", "message": "   " }), Some("message"))]
    #[case(json!({ "email": "ada@example.com" }), None)]
    #[case(json!({ "message": "Hello" }), None)]
    #[actix_web::test]
    async fn invalid_bodies_are_rejected_before_the_service(
        #[case] body: Value,
        #[case] field: Option<&str>,
    ) {
        let mut contact = MockContactCommand::new();
        contact.expect_submit().never();

        let (status, payload) = post_contact(state_with(contact), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            payload.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        if let Some(field) = field {
            assert_eq!(
                payload.pointer("/details/field").and_then(Value::as_str),
                Some(field)
            );
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn persistence_failure_is_a_server_error() {
        let mut contact = MockContactCommand::new();
        contact
            .expect_submit()
            .return_once(|_| Err(Error::service_unavailable("Database connection not available")));

        let (status, payload) = post_contact(
            state_with(contact),
            json!({ "email": "ada@example.com", "message": "Hello" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: Error = serde_json::from_value(payload).expect("error envelope");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
