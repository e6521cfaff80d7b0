use std::sync::Arc;

use anyhow::Context;
use dentalcare_contact::{Dispatcher, EmailSender, emailjs::EmailJs};
use dentalcare_notification::SmtpSender;

use crate::config::{Config, EmailProvider};

/// Builds the sender for the configured email provider.
pub fn sender(config: &Config) -> anyhow::Result<Arc<dyn EmailSender>> {
    tracing::info!(provider = %config.email.provider, "Configuring email delivery");

    let sender: Arc<dyn EmailSender> = match config.email.provider {
        EmailProvider::EmailJs => Arc::new(
            EmailJs::new(config.emailjs.clone()).context("Failed to build EmailJS client")?,
        ),
        EmailProvider::Smtp => Arc::new(SmtpSender::new(&config.smtp)?),
    };

    Ok(sender)
}

pub fn dispatcher(config: &Config) -> anyhow::Result<Dispatcher> {
    Ok(Dispatcher::new(sender(config)?))
}
