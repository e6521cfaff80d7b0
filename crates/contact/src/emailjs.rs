//! Delivery through the EmailJS REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{ContactFormData, EmailSender, SubmissionFailed};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    /// Public key of the EmailJS account, sent as `user_id`.
    #[serde(default)]
    pub public_key: String,
    /// Optional private key, required when the account enforces strict mode.
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactFormData,
}

#[derive(Clone)]
pub struct EmailJs {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl EmailSender for EmailJs {
    async fn send(&self, data: &ContactFormData) -> Result<(), SubmissionFailed> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: data,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|err| SubmissionFailed::new(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(SubmissionFailed::new(format!("emailjs responded {status}: {body}")))
    }
}
