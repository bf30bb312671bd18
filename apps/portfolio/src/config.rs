use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_TYPING_ROLES: &str = "Mobile App Developer,Android Developer,Flutter Developer,\
React Native Developer,Full-Stack Developer";
const DEFAULT_FILTER_CATEGORIES: &str = "All,Mobile,Web";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Local directory holding `data/*.json`, `assets/` and the CV.
    pub content_dir: PathBuf,
    /// When set, JSON documents are fetched over HTTP from here instead of `content_dir`.
    pub content_base_url: Option<String>,
    pub cv_path: PathBuf,
    pub emailjs: Option<EmailJsConfig>,
    /// Virtual time advanced before a rendered page is serialised.
    pub settle: Duration,
    pub profile: SiteProfile,
}

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Site-owner facts baked into the page shell and the contact relay.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub owner: String,
    pub whatsapp_number: String,
    pub typing_roles: Vec<String>,
    /// Labels of the portfolio filter controls; the lowercased label is the
    /// category value it selects.
    pub filter_categories: Vec<String>,
    pub cv_filename: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            owner: "Portfolio Owner".to_string(),
            whatsapp_number: String::new(),
            typing_roles: split_list(DEFAULT_TYPING_ROLES),
            filter_categories: split_list(DEFAULT_FILTER_CATEGORIES),
            cv_filename: "CV.pdf".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let content_dir = PathBuf::from(optional_env("CONTENT_DIR").unwrap_or_else(|| "./site".into()));
        let cv_path = content_dir.join(optional_env("CV_PATH").unwrap_or_else(|| "CV.pdf".into()));

        let emailjs = match (
            optional_env("EMAILJS_SERVICE_ID"),
            optional_env("EMAILJS_TEMPLATE_ID"),
            optional_env("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailJsConfig {
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };

        let profile = SiteProfile {
            owner: optional_env("SITE_OWNER").unwrap_or_else(|| "Portfolio Owner".into()),
            whatsapp_number: require_env("WHATSAPP_NUMBER")?
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
            typing_roles: split_list(
                &optional_env("TYPING_ROLES").unwrap_or_else(|| DEFAULT_TYPING_ROLES.into()),
            ),
            filter_categories: split_list(
                &optional_env("FILTER_CATEGORIES")
                    .unwrap_or_else(|| DEFAULT_FILTER_CATEGORIES.into()),
            ),
            cv_filename: optional_env("CV_FILENAME").unwrap_or_else(|| "CV.pdf".into()),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            content_dir,
            content_base_url: optional_env("CONTENT_BASE_URL"),
            cv_path,
            emailjs,
            settle: Duration::from_millis(
                std::env::var("SETTLE_MS")
                    .unwrap_or_else(|_| "3500".to_string())
                    .parse::<u64>()
                    .context("SETTLE_MS must be a number of milliseconds")?,
            ),
            profile,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are the same thing here.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
