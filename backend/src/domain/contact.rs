//! Contact form submissions and the operator notification they trigger.

use std::fmt;

use chrono::{DateTime, Utc};
use email_address::{EmailAddress, Options};

/// Subject line of the operator notification.
pub const NOTIFICATION_SUBJECT: &str = "New Contact Form Submission - Halfsy.shop";

/// Acknowledgement returned to the visitor.
pub const CONTACT_ACKNOWLEDGEMENT: &str =
    "Thank you for contacting us! We'll get back to you soon.";

/// Validation errors for [`ContactSubmission`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("email is not a valid address")]
    InvalidEmail,
    #[error("message must not be empty")]
    EmptyMessage,
}

/// Bare `local@domain.tld` addresses only: no display names, no IP
/// literals, no single-label hosts.
fn address_rules() -> Options {
    Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld()
}

/// Validated contact form input.
///
/// ## Invariants
/// - `email` is a syntactically valid address.
/// - `message` is non-empty once trimmed. It is otherwise stored verbatim.
///
/// # Examples
/// ```
/// use storefront::domain::ContactSubmission;
///
/// let submission = ContactSubmission::new("ada@example.com", "Do you ship to Lisbon?")
///     .expect("valid submission");
/// assert_eq!(submission.email(), "ada@example.com");
///
/// assert!(ContactSubmission::new("not-an-email", "hi").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn new(
        email: impl AsRef<str>,
        message: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        let email = EmailAddress::parse_with_options(email.as_ref().trim(), address_rules())
            .map_err(|_| ContactValidationError::InvalidEmail)?;
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ContactValidationError::EmptyMessage);
        }
        Ok(Self {
            email: email.email(),
            message,
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Stamp the submission for persistence.
    pub fn received_at(self, timestamp: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            email: self.email,
            message: self.message,
            timestamp,
        }
    }
}

/// Persisted contact message. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    email: String,
    message: String,
    timestamp: DateTime<Utc>,
}

impl ContactMessage {
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Server-side receipt time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Store-assigned identifier of a contact message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactMessageId(String);

impl ContactMessageId {
    /// Wrap a store identifier, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContactMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub id: ContactMessageId,
    pub message: &'static str,
}

impl ContactReceipt {
    pub fn new(id: ContactMessageId) -> Self {
        Self {
            id,
            message: CONTACT_ACKNOWLEDGEMENT,
        }
    }
}

/// Plain-text email handed to a notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// Operator alert for a new contact message.
    pub fn contact_alert(recipient: impl Into<String>, message: &ContactMessage) -> Self {
        Self {
            recipient: recipient.into(),
            subject: NOTIFICATION_SUBJECT.to_owned(),
            body: format!(
                "You have received a new contact form submission from Halfsy.shop:\n\n\
                 From: {}\nMessage:\n{}\n\n---\n\
                 This is an automated notification from Halfsy.shop contact form.",
                message.email(),
                message.message()
            ),
        }
    }
}
