//! Driving port for contact form intake.

use async_trait::async_trait;

use crate::domain::{ContactMessageId, ContactReceipt, ContactSubmission, Error};

/// Driving port for recording contact submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Persist the submission and notify the operator.
    ///
    /// Only persistence failures are reported; notification failures are
    /// logged and swallowed.
    async fn submit(&self, submission: ContactSubmission) -> Result<ContactReceipt, Error>;
}

/// Fixture command acknowledging every submission with a fixed identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactCommand;

impl FixtureContactCommand {
    pub const MESSAGE_ID: &'static str = "65f0c0ffee0000000000feed";
}

#[async_trait]
impl ContactCommand for FixtureContactCommand {
    async fn submit(&self, _submission: ContactSubmission) -> Result<ContactReceipt, Error> {
        let id = ContactMessageId::new(Self::MESSAGE_ID)
            .ok_or_else(|| Error::internal("fixture contact id is blank"))?;
        Ok(ContactReceipt::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_acknowledges_submissions() {
        let submission =
            ContactSubmission::new("ada@example.com", "hello").expect("valid submission");

        let receipt = FixtureContactCommand
            .submit(submission)
            .await
            .expect("receipt");

        assert_eq!(receipt.id.as_str(), FixtureContactCommand::MESSAGE_ID);
    }
}
