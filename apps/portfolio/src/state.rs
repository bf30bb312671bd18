use std::sync::Arc;

use crate::config::Config;
use crate::contact::EmailRelay;
use crate::content::ContentSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where the five JSON documents come from: `CONTENT_DIR` or `CONTENT_BASE_URL`.
    pub content: Arc<dyn ContentSource>,
    /// Present only when all EmailJS credentials are configured.
    pub email: Option<Arc<dyn EmailRelay>>,
}
