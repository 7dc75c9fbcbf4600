//! Email sender adapter: STARTTLS SMTP with a single PDF attachment.

use std::time::Duration;

use {
    async_trait::async_trait,
    lettre::{
        AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        message::{Attachment, MultiPart, SinglePart, header::ContentType},
        transport::smtp::authentication::Credentials,
    },
    secrecy::{ExposeSecret, Secret},
    tracing::debug,
};

use remessa_channels::{DeliverableFile, EmailSender, Error, Result};

// The source left the SMTP session unbounded; bound it here.
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// [`EmailSender`] over authenticated STARTTLS SMTP.
///
/// A fresh session is established per send and closed on completion; the
/// configured username doubles as the From address.
pub struct SmtpMailer {
    host: String,
    port: u16,
    user: String,
    password: Secret<String>,
}

impl SmtpMailer {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: Secret<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password,
        }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(
            self.user.clone(),
            self.password.expose_secret().clone(),
        );
        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
                .map_err(Error::email)?
                .port(self.port)
                .credentials(credentials)
                .timeout(Some(SMTP_TIMEOUT))
                .build(),
        )
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
        attachment: &DeliverableFile,
    ) -> Result<Message> {
        let pdf = ContentType::parse("application/pdf").map_err(Error::email)?;
        Message::builder()
            .from(self.user.parse().map_err(Error::email)?)
            .to(to.parse().map_err(Error::email)?)
            .subject(subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(html_body.to_string()))
                    .singlepart(
                        Attachment::new(attachment.filename.clone())
                            .body(attachment.bytes.clone(), pdf),
                    ),
            )
            .map_err(Error::email)
    }
}

#[async_trait]
impl EmailSender for SmtpMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
        attachment: &DeliverableFile,
    ) -> Result<()> {
        let message = self.build_message(to, subject, html_body, attachment)?;
        debug!(to, host = %self.host, port = self.port, "opening SMTP session");
        self.transport()?.send(message).await.map_err(Error::email)?;
        debug!(to, "email accepted by relay");
        Ok(())
    }
}
