use async_trait::async_trait;
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::Config, error::contact::MailError, model::contact::ContactMessageDto,
};

/// One email composed from a contact form submission.
#[derive(Clone, Debug)]
pub struct OutgoingEmail {
    pub subject: String,
    pub body: String,
    /// Submitter's address, set as Reply-To so the company can answer
    /// directly.
    pub reply_to: Option<String>,
}

/// Seam over the SMTP relay so tests can observe sends without a network.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Production mailer forwarding through the configured SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp.host)?
            .port(config.smtp.port)
            .credentials(Credentials::new(
                config.smtp.username.clone(),
                config.smtp.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.smtp.from.parse()?,
            to: config.smtp.to.parse()?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject.clone());

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }

        let message = builder.body(email.body.clone())?;

        self.transport.send(message).await?;

        Ok(())
    }
}

/// Validates a contact submission and forwards it as one email.
///
/// No retry and no persistence: a failed relay send is returned to the
/// submitting user as an upstream error.
pub struct ContactService<'a> {
    mailer: &'a dyn Mailer,
}

impl<'a> ContactService<'a> {
    pub fn new(mailer: &'a dyn Mailer) -> Self {
        Self { mailer }
    }

    pub async fn submit(&self, dto: &ContactMessageDto) -> Result<(), MailError> {
        if dto.name.trim().is_empty() {
            return Err(MailError::Invalid("Name is required".to_string()));
        }
        if dto.message.trim().is_empty() {
            return Err(MailError::Invalid("Message is required".to_string()));
        }
        let email = dto.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(MailError::Invalid(
                "A valid email address is required".to_string(),
            ));
        }

        let language = dto.language.as_deref().unwrap_or("-");
        let phone = dto.phone.as_deref().unwrap_or("-");

        let outgoing = OutgoingEmail {
            subject: format!("Contact form: {}", dto.name.trim()),
            body: format!(
                "Name: {}\nEmail: {}\nPhone: {}\nLanguage: {}\n\n{}",
                dto.name.trim(),
                email,
                phone,
                language,
                dto.message.trim(),
            ),
            reply_to: Some(email.to_string()),
        };

        self.mailer.send(&outgoing).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{ContactService, Mailer, OutgoingEmail};
    use crate::{error::contact::MailError, model::contact::ContactMessageDto};

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn submission() -> ContactMessageDto {
        ContactMessageDto {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            message: "Please send a quote for part no. 441.".to_string(),
            language: Some("en".to_string()),
        }
    }

    /// A valid submission is forwarded once with the submitter as Reply-To
    #[tokio::test]
    async fn forwards_valid_submission() {
        let mailer = RecordingMailer::default();
        let service = ContactService::new(&mailer);

        service.submit(&submission()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));
        assert!(sent[0].body.contains("part no. 441"));
    }

    /// Expect a validation error for a missing email, nothing is sent
    #[tokio::test]
    async fn rejects_missing_email() {
        let mailer = RecordingMailer::default();
        let service = ContactService::new(&mailer);

        let mut dto = submission();
        dto.email = "not-an-address".to_string();

        let result = service.submit(&dto).await;

        assert!(matches!(result, Err(MailError::Invalid(_))));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    /// Expect a validation error for an empty message body
    #[tokio::test]
    async fn rejects_empty_message() {
        let mailer = RecordingMailer::default();
        let service = ContactService::new(&mailer);

        let mut dto = submission();
        dto.message = "   ".to_string();

        assert!(service.submit(&dto).await.is_err());
    }
}
