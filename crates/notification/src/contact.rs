use std::str::FromStr;

use async_trait::async_trait;
use dentalcare_contact::{ContactFormData, EmailSender, Subject, SubmissionFailed};

use crate::{EmailService, SmtpConfig};

/// Delivers contact submissions to the clinic inbox over SMTP.
#[derive(Clone)]
pub struct SmtpSender {
    service: EmailService,
    to: String,
}

impl SmtpSender {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        Ok(Self {
            service: EmailService::new(config)?,
            to: config.contact_address.to_owned(),
        })
    }
}

pub fn subject_line(data: &ContactFormData) -> String {
    match Subject::from_str(&data.subject) {
        Ok(subject) => format!("Contato pelo site: {}", subject.label()),
        Err(_) => "Contato pelo site".to_owned(),
    }
}

pub fn plain_body(data: &ContactFormData) -> String {
    let subject = Subject::from_str(&data.subject)
        .map(|s| s.label().to_owned())
        .unwrap_or_else(|_| data.subject.to_owned());

    format!(
        r#"Nome: {}
Email: {}
Telefone: {}
Assunto: {}

{}
"#,
        data.name, data.email, data.phone, subject, data.message
    )
}

#[async_trait]
impl EmailSender for SmtpSender {
    async fn send(&self, data: &ContactFormData) -> Result<(), SubmissionFailed> {
        self.service
            .send_plain(
                &self.to,
                Some(&data.email),
                subject_line(data),
                plain_body(data),
            )
            .await
            .map_err(|err| SubmissionFailed::new(err.to_string()))
    }
}
