pub mod contact;
pub mod cv;
pub mod health;
pub mod page;
pub mod theme;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let content_dir = state.config.content_dir.clone();

    Router::new()
        .route("/", get(page::page_handler))
        .route("/health", get(health::health_handler))
        .route("/contact", post(contact::contact_handler))
        .route("/theme/toggle", post(theme::toggle_theme_handler))
        .route("/cv", get(cv::cv_handler))
        // Raw documents and static assets straight from the content directory
        .nest_service("/data", ServeDir::new(content_dir.join("data")))
        .nest_service("/assets", ServeDir::new(content_dir.join("assets")))
        .with_state(state)
}
