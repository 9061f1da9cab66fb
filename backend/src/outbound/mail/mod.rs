//! Outbound mail adapters.

mod smtp_notification_sink;

pub use smtp_notification_sink::{
    DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT, SmtpConfig, SmtpNotificationSink,
};
