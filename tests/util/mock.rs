use std::sync::Mutex;

use async_trait::async_trait;
use fabrica::{
    error::contact::MailError,
    service::contact::{Mailer, OutgoingEmail},
};

/// Mailer that records every send instead of talking to a relay.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail_next: Mutex<bool>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        if *self.fail_next.lock().unwrap() {
            return Err(MailError::Invalid("simulated relay failure".to_string()));
        }

        self.sent.lock().unwrap().push(email.clone());

        Ok(())
    }
}
