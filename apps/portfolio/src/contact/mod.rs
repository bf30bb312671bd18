//! Contact relay.
//!
//! A submission always becomes a WhatsApp deep link. When EmailJS credentials
//! are configured the same message is also emailed, in the background; that
//! send is best-effort and never affects the response.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::EmailJsConfig;
use crate::errors::AppError;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const WHATSAPP_BASE: &str = "https://wa.me/";

/// The contact form as posted. Field names match the form inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Trims every field and checks that all are present.
    pub fn validated(self) -> Result<Self, AppError> {
        let form = Self {
            fullname: self.fullname.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let missing: Vec<&str> = [
            ("fullname", &form.fullname),
            ("email", &form.email),
            ("message", &form.message),
        ]
        .iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| *k)
        .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        if !form.email.contains('@') {
            return Err(AppError::Validation(format!(
                "'{}' is not an email address",
                form.email
            )));
        }
        Ok(form)
    }
}

/// Message body sent to the owner.
pub fn compose_message(owner: &str, form: &ContactForm) -> String {
    let first_name = owner.split_whitespace().next().unwrap_or(owner);
    format!(
        "Hi {first_name}! 👋\n\nName: {}\nEmail: {}\n\nMessage:\n{}",
        form.fullname, form.email, form.message
    )
}

/// `https://wa.me/<number>?text=<message>` with the text query-encoded.
pub fn whatsapp_link(number: &str, owner: &str, form: &ContactForm) -> Result<Url, AppError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "WhatsApp number has no digits"
        )));
    }
    let text = compose_message(owner, form);
    Url::parse_with_params(&format!("{WHATSAPP_BASE}{digits}"), &[("text", text)])
        .map_err(|e| AppError::Internal(e.into()))
}

// ────────────────────────────────────────────────────────────────────────────
// Email relay
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email relay rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    reply_to: &'a str,
}

/// Sends through the EmailJS REST API using the public key.
pub struct EmailJsRelay {
    client: Client,
    config: EmailJsConfig,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(client: Client, config: EmailJsConfig) -> Self {
        Self::with_endpoint(client, config, EMAILJS_SEND_URL)
    }

    pub fn with_endpoint(client: Client, config: EmailJsConfig, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            config,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &form.fullname,
                from_email: &form.email,
                message: &form.message,
                reply_to: &form.email,
            },
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        debug!("Contact email relayed for {}", form.email);
        Ok(())
    }
}

/// Fires the email send on a detached task. Failures are logged, never surfaced.
pub fn spawn_email(relay: Arc<dyn EmailRelay>, form: ContactForm) {
    tokio::spawn(async move {
        if let Err(e) = relay.send(&form).await {
            warn!("Contact email relay failed: {e}");
        }
    });
}
