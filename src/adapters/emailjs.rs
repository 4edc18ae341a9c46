use crate::config::EmailJsConfig;
use crate::domain::model::EmailPayload;
use crate::domain::ports::EmailSender;
use crate::utils::error::{ContactError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Request body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// The account's public key.
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

pub struct EmailJsClient {
    config: EmailJsConfig,
    client: Client,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, payload: &EmailPayload) -> Result<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.access_token,
            template_params: payload,
        };

        tracing::debug!(
            "POST {} (service: {}, template: {})",
            self.config.endpoint,
            self.config.service_id,
            self.config.template_id
        );
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("EmailJS response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ContactError::ApiResponseError {
                status: status.as_u16(),
                body,
            })
        }
    }
}
