use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const ACCESS_TOKEN_VAR: &str = "EMAILJS_ACCESS_TOKEN";
pub const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";

/// Credentials and endpoint for the EmailJS REST API.
///
/// The three secrets are not checked here: a missing or wrong value shows up
/// as a failed send.
#[derive(Clone, Serialize, Deserialize)]
pub struct EmailJsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub access_token: String,
    pub timeout_seconds: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl EmailJsConfig {
    pub fn new(service_id: &str, template_id: &str, access_token: &str) -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            access_token: access_token.to_string(),
            timeout_seconds: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let config = Self::new(
            &var(SERVICE_ID_VAR),
            &var(TEMPLATE_ID_VAR),
            &var(ACCESS_TOKEN_VAR),
        );
        match std::env::var(ENDPOINT_VAR) {
            Ok(endpoint) if !endpoint.is_empty() => config.with_endpoint(endpoint),
            _ => config,
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

// Keeps the access token out of logs.
impl std::fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("endpoint", &self.endpoint)
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("access_token", &"***")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Validate for EmailJsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("emailjs.endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            if timeout == 0 {
                return Err(crate::utils::error::ContactError::InvalidConfigValueError {
                    field: "emailjs.timeout_seconds".to_string(),
                    value: timeout.to_string(),
                    reason: "Timeout must be at least 1 second".to_string(),
                });
            }
        }
        Ok(())
    }
}
