//! Contact intake service.
//!
//! Persists each submission with a server-side UTC timestamp, then alerts the
//! operator. Only the write can fail the request.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ContactCommand, ContactMessageRepository, ContactMessageRepositoryError, NotificationSink,
};
use crate::domain::{
    ContactMessage, ContactMessageId, ContactReceipt, ContactSubmission, Error, Notification,
    STORE_UNAVAILABLE_MESSAGE,
};

/// Contact service implementing the contact driving port.
#[derive(Clone)]
pub struct ContactService<M: ?Sized, N: ?Sized> {
    messages: Arc<M>,
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
    operator: Option<String>,
}

impl<M: ?Sized, N: ?Sized> ContactService<M, N> {
    /// Create a service. `operator` is the address alerted about new
    /// messages; without one the notification step is skipped.
    pub fn new(
        messages: Arc<M>,
        notifier: Arc<N>,
        clock: Arc<dyn Clock>,
        operator: Option<String>,
    ) -> Self {
        Self {
            messages,
            notifier,
            clock,
            operator: operator.filter(|address| !address.trim().is_empty()),
        }
    }
}

fn map_repository_error(failure: ContactMessageRepositoryError) -> Error {
    match failure {
        ContactMessageRepositoryError::Connection { message } => {
            error!(cause = %message, "contact store unavailable");
            Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE)
        }
        ContactMessageRepositoryError::Query { message } => {
            error!(cause = %message, "contact store write failed");
            Error::internal(format!("contact store error: {message}"))
        }
    }
}

impl<M, N> ContactService<M, N>
where
    M: ContactMessageRepository + ?Sized,
    N: NotificationSink + ?Sized,
{
    async fn notify_operator(&self, id: &ContactMessageId, message: &ContactMessage) {
        let Some(recipient) = self.operator.as_deref() else {
            warn!(message_id = %id, "operator address not configured; skipping contact notification");
            return;
        };

        let notification = Notification::contact_alert(recipient, message);
        match self.notifier.send(&notification).await {
            Ok(()) => info!(message_id = %id, "contact notification sent"),
            Err(err) => warn!(message_id = %id, error = %err, "contact notification failed"),
        }
    }
}

#[async_trait]
impl<M, N> ContactCommand for ContactService<M, N>
where
    M: ContactMessageRepository + ?Sized,
    N: NotificationSink + ?Sized,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<ContactReceipt, Error> {
        let message = submission.received_at(self.clock.utc());
        let id = self
            .messages
            .insert(&message)
            .await
            .map_err(map_repository_error)?;

        self.notify_operator(&id, &message).await;
        Ok(ContactReceipt::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FixtureContactMessageRepository, MockContactMessageRepository, MockNotificationSink,
        NotificationError,
    };
    use crate::domain::{CONTACT_ACKNOWLEDGEMENT, ErrorCode, NOTIFICATION_SUBJECT};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn submission() -> ContactSubmission {
        ContactSubmission::new("ada@example.com", "Is the coat in stock?")
            .expect("valid submission")
    }

    fn make_service<M: ContactMessageRepository>(
        messages: M,
        notifier: MockNotificationSink,
        operator: Option<&str>,
    ) -> ContactService<M, MockNotificationSink> {
        ContactService::new(
            Arc::new(messages),
            Arc::new(notifier),
            Arc::new(FixtureClock {
                utc_now: fixture_timestamp(),
            }),
            operator.map(str::to_owned),
        )
    }

    fn storing_repo() -> MockContactMessageRepository {
        let mut messages = MockContactMessageRepository::new();
        messages
            .expect_insert()
            .withf(|message| {
                message.email() == "ada@example.com" && message.timestamp() == fixture_timestamp()
            })
            .times(1)
            .return_once(|_| Ok(ContactMessageId::new("abc123").expect("id")));
        messages
    }

    #[rstest]
    #[tokio::test]
    async fn submit_persists_then_notifies_operator(submission: ContactSubmission) {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_send()
            .withf(|notification| {
                notification.recipient == "ops@example.com"
                    && notification.subject == NOTIFICATION_SUBJECT
                    && notification.body.contains("From: ada@example.com")
            })
            .times(1)
            .return_once(|_| Ok(()));

        let receipt = make_service(storing_repo(), notifier, Some("ops@example.com"))
            .submit(submission)
            .await
            .expect("submission succeeds");

        assert_eq!(receipt.id.as_str(), "abc123");
        assert_eq!(receipt.message, CONTACT_ACKNOWLEDGEMENT);
    }

    #[rstest]
    #[case(NotificationError::not_configured())]
    #[case(NotificationError::rejected("535 authentication failed"))]
    #[case(NotificationError::transport("connection reset"))]
    #[tokio::test]
    async fn notification_failures_do_not_fail_submission(
        submission: ContactSubmission,
        #[case] failure: NotificationError,
    ) {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_send()
            .times(1)
            .return_once(move |_| Err(failure));

        let receipt = make_service(storing_repo(), notifier, Some("ops@example.com"))
            .submit(submission)
            .await
            .expect("submission succeeds");

        assert_eq!(receipt.id.as_str(), "abc123");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_operator_skips_notification(submission: ContactSubmission) {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_send().never();

        let receipt = make_service(storing_repo(), notifier, Some("  "))
            .submit(submission)
            .await
            .expect("submission succeeds");

        assert_eq!(receipt.id.as_str(), "abc123");
    }

    #[rstest]
    #[case(ContactMessageRepositoryError::connection("no store"), ErrorCode::ServiceUnavailable)]
    #[case(ContactMessageRepositoryError::query("write refused"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn persistence_failure_fails_without_notifying(
        submission: ContactSubmission,
        #[case] failure: ContactMessageRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut messages = MockContactMessageRepository::new();
        messages.expect_insert().return_once(move |_| Err(failure));
        let mut notifier = MockNotificationSink::new();
        notifier.expect_send().never();

        let err = make_service(messages, notifier, Some("ops@example.com"))
            .submit(submission)
            .await
            .expect_err("submission fails");

        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn store_outage_hides_driver_text(submission: ContactSubmission) {
        let mut messages = MockContactMessageRepository::new();
        messages.expect_insert().return_once(|_| {
            Err(ContactMessageRepositoryError::connection(
                "server selection timeout: mongo-0:27017",
            ))
        });
        let mut notifier = MockNotificationSink::new();
        notifier.expect_send().never();

        let err = make_service(messages, notifier, Some("ops@example.com"))
            .submit(submission)
            .await
            .expect_err("submission fails");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(err.message(), STORE_UNAVAILABLE_MESSAGE);
        assert!(!err.message().contains("mongo-0"));
    }

    #[rstest]
    #[tokio::test]
    async fn receipt_carries_the_stored_identifier(submission: ContactSubmission) {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_send().times(1).return_once(|_| Ok(()));

        let receipt = make_service(
            FixtureContactMessageRepository,
            notifier,
            Some("ops@example.com"),
        )
        .submit(submission)
        .await
        .expect("submission succeeds");

        assert_eq!(receipt.id.as_str(), FixtureContactMessageRepository::MESSAGE_ID);
    }
}
