use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use dentalcare_contact::emailjs::EmailJsConfig;
use dentalcare_notification::SmtpConfig;
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Contact pages untouched for this long are dropped from memory
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_idle_timeout_secs() -> u64 {
    1800
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    EmailJs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DENTALCARE__EMAILJS__SERVICE_ID, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DENTALCARE")
                .separator("__")
                .try_parsing(true),
        );

        // Names used by the EmailJS dashboard
        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "emailjs.template_id"),
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
            ("EMAILJS_PRIVATE_KEY", "emailjs.private_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.session.idle_timeout_secs == 0 {
            return Err("Session idle timeout must be greater than 0".to_string());
        }

        match self.email.provider {
            EmailProvider::EmailJs => {
                let missing = [
                    ("service_id", &self.emailjs.service_id),
                    ("template_id", &self.emailjs.template_id),
                    ("public_key", &self.emailjs.public_key),
                ]
                .into_iter()
                .filter(|(_, value)| value.is_empty())
                .map(|(name, _)| name)
                .collect::<Vec<_>>();

                if !missing.is_empty() {
                    return Err(format!("EmailJS {} must be set", missing.join(", ")));
                }
            }
            EmailProvider::Smtp => {
                if self.smtp.host.is_empty() {
                    return Err("SMTP host must be set".to_string());
                }
                if self.smtp.contact_address.is_empty() {
                    return Err("SMTP contact_address must be set".to_string());
                }
            }
        }

        Ok(())
    }
}
