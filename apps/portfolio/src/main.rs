mod config;
mod contact;
mod content;
mod cv;
mod dom;
mod errors;
mod render;
mod routes;
mod state;
mod view;

use anyhow::Result;
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{EmailJsRelay, EmailRelay};
use crate::content::{ContentSource, DirSource, HttpSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Only the EmailJS relay uses this client; content loads carry no timeout
    let http = Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client");

    // Content source: remote base URL when configured, otherwise the local directory
    let content: Arc<dyn ContentSource> = match &config.content_base_url {
        Some(base) => Arc::new(HttpSource::new(base.clone())?),
        None => Arc::new(DirSource::new(config.content_dir.clone())),
    };
    info!("Content source: {}", content.describe());

    let email: Option<Arc<dyn EmailRelay>> = match &config.emailjs {
        Some(creds) => {
            info!("EmailJS relay enabled (service: {})", creds.service_id);
            Some(Arc::new(EmailJsRelay::new(http.clone(), creds.clone())))
        }
        None => {
            info!("EmailJS relay disabled; contact form relays to WhatsApp only");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        content,
        email,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
