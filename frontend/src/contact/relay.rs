//! Delivery of contact requests through EmailJS.

use gloo_net::http::Request;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, ConfigError, SiteConfig};

/// Template parameters sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub from_name: String,
    pub reply_to: String,
    pub company: String,
    pub need: String,
    /// EmailJS verifies the reCAPTCHA response under this exact name.
    #[serde(rename = "g-recaptcha-response")]
    pub bot_check_response: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Network(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

pub trait EmailRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a RelayPayload,
}

/// EmailJS REST endpoint. Credentials are checked on every send, so a build
/// without them still loads and only fails when someone submits.
pub struct EmailJsRelay {
    config: SiteConfig,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            endpoint: config::get_emailjs_api_url().to_string(),
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        let credentials = self.config.relay_credentials().map_err(|e| {
            warn!("Contact relay is not configured: {}", e);
            RelayError::from(e)
        })?;

        let body = EmailJsRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: payload,
        };

        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if response.ok() {
            debug!("Relay accepted message with status {}", response.status());
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(RelayError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> RelayPayload {
        RelayPayload {
            from_name: "Ana".into(),
            reply_to: "ana@x.com".into(),
            company: "".into(),
            need: "reduce incidents".into(),
            bot_check_response: "token-123".into(),
        }
    }

    #[test]
    fn request_body_matches_emailjs_shape() {
        let payload = payload();
        let body = EmailJsRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pk",
            template_params: &payload,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "from_name": "Ana",
                    "reply_to": "ana@x.com",
                    "company": "",
                    "need": "reduce incidents",
                    "g-recaptcha-response": "token-123"
                }
            })
        );
    }

    #[test]
    fn missing_credentials_fail_at_send_time() {
        let relay = EmailJsRelay::new(SiteConfig::default());
        let outcome = futures::executor::block_on(relay.send(&payload()));
        assert_eq!(
            outcome,
            Err(RelayError::Config(ConfigError::Missing("XVAL_EMAILJS_PUBLIC_KEY")))
        );
    }
}
