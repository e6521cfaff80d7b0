//! Email notification service using lettre

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Clinic inbox receiving the contact form messages.
    #[serde(default)]
    pub contact_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            contact_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@dentalcare.com".to_string()
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }

    /// Sends a plain text email. `reply_to` is skipped when it does not parse as a mailbox.
    pub async fn send_plain(
        &self,
        to: impl Into<String>,
        reply_to: Option<&str>,
        subject: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<()> {
        let to = to.into();
        let subject = subject.into();

        tracing::info!(to = %to, subject = %subject, "Sending email text plain");

        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject);

        if let Some(reply_to) = reply_to.and_then(|addr| addr.parse::<Mailbox>().ok()) {
            builder = builder.reply_to(reply_to);
        }

        let message = builder
            .header(header::ContentType::TEXT_PLAIN)
            .body(plain.into())?;

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
