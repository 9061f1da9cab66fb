//! Behavioural tests for contact intake.
#[path = "support/http_steps.rs"]
mod http_steps;
#[path = "support/http_world.rs"]
mod http_world;
#[expect(
    dead_code,
    reason = "Shared doubles include helpers used only by the catalogue suite."
)]
#[path = "support/in_memory_store.rs"]
mod in_memory_store;

use actix_web::http::Method;
use http_world::{HttpWorld, OPERATOR, frozen_timestamp};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use storefront::domain::{CONTACT_ACKNOWLEDGEMENT, NOTIFICATION_SUBJECT};

#[fixture]
fn world() -> HttpWorld {
    HttpWorld::new()
}

#[given("the mail relay is failing")]
fn the_mail_relay_is_failing(world: &HttpWorld) {
    world.notifier.fail_all();
}

#[given("the message store is offline")]
fn the_message_store_is_offline(world: &HttpWorld) {
    world.messages.go_offline();
}

#[when("a visitor submits {email} with message {message}")]
fn a_visitor_submits(world: &HttpWorld, email: String, message: String) {
    world.request(
        Method::POST,
        "/api/contact",
        Some(json!({ "email": email, "message": message })),
    );
}

#[then("the acknowledgement is returned with an identifier")]
fn the_acknowledgement_is_returned(world: &HttpWorld) {
    let body = world.last().body;
    assert_eq!(body.get("success"), Some(&Value::Bool(true)));
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(CONTACT_ACKNOWLEDGEMENT)
    );
    assert!(
        body.get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty())
    );
}

#[then("the stored message is from {email}")]
fn the_stored_message_is_from(world: &HttpWorld, email: String) {
    let stored = world.messages.stored();
    assert_eq!(stored.len(), 1);
    let message = &stored[0];
    assert_eq!(message.email(), email);
    assert_eq!(message.timestamp(), frozen_timestamp());
}

#[then("nothing was stored")]
fn nothing_was_stored(world: &HttpWorld) {
    assert!(world.messages.stored().is_empty());
}

#[then("the operator received one notification")]
fn the_operator_received_one_notification(world: &HttpWorld) {
    let sent = world.notifier.sent();
    assert_eq!(sent.len(), 1);
    let notification = &sent[0];
    assert_eq!(notification.recipient, OPERATOR);
    assert_eq!(notification.subject, NOTIFICATION_SUBJECT);
    assert!(notification.body.contains("ada@example.com"));
}

#[then("the operator received no notification")]
fn the_operator_received_no_notification(world: &HttpWorld) {
    assert!(world.notifier.sent().is_empty());
}

#[scenario(
    path = "tests/features/contact_intake.feature",
    name = "A valid submission is stored and the operator alerted"
)]
fn valid_submission_is_stored(world: HttpWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_intake.feature",
    name = "Mail relay failures do not fail the submission"
)]
fn mail_failures_are_swallowed(world: HttpWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_intake.feature",
    name = "Invalid email addresses are rejected"
)]
fn invalid_emails_are_rejected(world: HttpWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_intake.feature",
    name = "An offline store fails the submission"
)]
fn offline_store_fails_submission(world: HttpWorld) {
    drop(world);
}
