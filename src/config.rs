//! Application configuration management with security considerations.
//!
//! All values are read once from the environment at startup and passed
//! explicitly to the components that need them.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use crate::{errors::ConfigError, webhook::whatsapp::responder::ResponderKind};
use envconfig::Envconfig;
use std::time::Duration;

/// Application configuration with security-aware field management.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "5000")]
    pub web_server_port: u16,

    /// 🔒 SENSITIVE: Kapso API key sent as `X-API-Key`
    /// Security: Store in secure secret management system
    pub kapso_api_key: String,

    /// WhatsApp sender phone number ID registered in Kapso (SEMI-SENSITIVE)
    pub kapso_phone_number_id: String,

    /// Kapso WhatsApp proxy base URL (NON-SENSITIVE)
    #[envconfig(default = "https://api.kapso.ai/meta/whatsapp")]
    pub kapso_base_url: String,

    /// 🔒 SENSITIVE: Secret used to sign webhook payloads.
    /// Signature verification is skipped when unset.
    pub kapso_webhook_secret: Option<String>,

    /// Timeout in seconds for calls to the Kapso API (NON-SENSITIVE)
    #[envconfig(default = "30")]
    pub kapso_timeout_secs: u64,

    /// Reply strategy: "keyword" or "echo" (NON-SENSITIVE)
    #[envconfig(default = "keyword")]
    pub responder: String,

    /// 🔒 SENSITIVE: Logfire write token, remote export is off without it
    pub logfire_token: Option<String>,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Address the web server binds to
    pub fn server_addr(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    /// Builds the credentials used by the gateway client
    pub fn gateway_credentials(&self) -> Result<GatewayCredentials, ConfigError> {
        GatewayCredentials::new(
            &self.kapso_api_key,
            &self.kapso_phone_number_id,
            &self.kapso_base_url,
        )
    }

    /// Parses the configured reply strategy
    pub fn responder_kind(&self) -> Result<ResponderKind, ConfigError> {
        self.responder.parse()
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_secs(self.kapso_timeout_secs)
    }
}

/// Credentials and addressing for the Kapso send API.
///
/// Immutable once built; cloned into every worker's client.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayCredentials {
    /// 🔒 SENSITIVE: never log this value
    pub api_key: String,
    pub sender_number_id: String,
    /// Base URL without trailing slash
    pub base_url: String,
}

impl GatewayCredentials {
    pub fn new(
        api_key: &str,
        sender_number_id: &str,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingValue("KAPSO_API_KEY".into()));
        }
        if sender_number_id.trim().is_empty() {
            return Err(ConfigError::MissingValue("KAPSO_PHONE_NUMBER_ID".into()));
        }

        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            sender_number_id: sender_number_id.trim().to_string(),
            base_url: base_url.to_string(),
        })
    }

    /// Constructs the Kapso endpoint for sending messages
    pub fn send_msg_endpoint(&self) -> String {
        format!(
            "{base}/{id}/messages",
            base = self.base_url,
            id = self.sender_number_id
        )
    }
}
