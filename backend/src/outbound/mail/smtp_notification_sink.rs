//! SMTP relay adapter for operator notifications.
//!
//! Messages are sent from the relay account to the notification recipient
//! over STARTTLS with username/password authentication.

use std::fmt;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::Error as SmtpError;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::Notification;
use crate::domain::ports::{NotificationError, NotificationSink};

/// Default relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp-mail.outlook.com";
/// Default STARTTLS submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Relay address and account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Notification sink delivering through an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpNotificationSink {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

impl SmtpNotificationSink {
    /// Build the transport. No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Transport`] when the relay host is not a
    /// valid TLS server name.
    pub fn new(config: SmtpConfig) -> Result<Self, NotificationError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|err| NotificationError::transport(err.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.password))
            .build();
        Ok(Self {
            transport,
            sender: config.user,
        })
    }
}

/// Assemble the plain-text message for a notification.
pub(crate) fn compose(sender: &str, notification: &Notification) -> Result<Message, NotificationError> {
    let from: Mailbox = sender
        .parse()
        .map_err(|err| NotificationError::composition(format!("sender address: {err}")))?;
    let to: Mailbox = notification
        .recipient
        .parse()
        .map_err(|err| NotificationError::composition(format!("recipient address: {err}")))?;
    Message::builder()
        .from(from)
        .to(to)
        .subject(notification.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body.clone())
        .map_err(|err| NotificationError::composition(err.to_string()))
}

fn map_smtp_error(error: SmtpError) -> NotificationError {
    if error.is_permanent() {
        NotificationError::rejected(error.to_string())
    } else {
        NotificationError::transport(error.to_string())
    }
}

#[async_trait]
impl NotificationSink for SmtpNotificationSink {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        let message = compose(&self.sender, notification)?;
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(map_smtp_error)
    }
}
