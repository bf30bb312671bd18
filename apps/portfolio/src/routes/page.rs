use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::content::{load_all, SiteContent};
use crate::routes::theme::saved_theme;
use crate::state::AppState;
use crate::view::{navigator, MemoryStore, Target, UiEvent, ViewSession};

/// Interaction state replayed server-side, so links work without script:
/// `?page=portfolio&filter=web&project=<id>` or `?testimonial=<index>`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub filter: Option<String>,
    pub project: Option<String>,
    pub testimonial: Option<String>,
}

/// GET /
/// Loads the five documents for this page load and renders the page.
pub async fn page_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let session_id = Uuid::new_v4();
    debug!(%session_id, ?query, "Rendering page");

    let loaded = load_all(state.content.as_ref()).await;
    let content = SiteContent::decode(&loaded);
    let store = MemoryStore::with_theme(saved_theme(&jar));

    Html(render_page(&state.config, content, store, &query))
}

pub fn render_page(config: &Config, content: SiteContent, store: MemoryStore, query: &PageQuery) -> String {
    let mut session = ViewSession::boot(&config.profile, content, Box::new(store));
    replay(&mut session, query);

    session.advance(config.settle);
    session.stop_typing();

    let doc = session.document();
    debug!(
        page = ?navigator::active_page(doc),
        theme = session.theme().as_str(),
        scroll_locked = doc.scroll_locked(),
        listeners = session.listener_count(),
        "Page settled"
    );
    session.to_html()
}

/// Turns query parameters into the clicks that would produce that state.
fn replay(session: &mut ViewSession, query: &PageQuery) {
    let param = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    if let Some(page) = param(&query.page) {
        session.dispatch(UiEvent::click(Target::NavLink(page.to_lowercase())));
    }
    if let Some(filter) = param(&query.filter) {
        session.dispatch(UiEvent::click(Target::FilterButton(filter.to_lowercase())));
    }
    if let Some(id) = param(&query.project) {
        session.dispatch(UiEvent::click(Target::ProjectLink(id)));
    }
    if let Some(index) = param(&query.testimonial).and_then(|i| i.parse::<usize>().ok()) {
        session.dispatch(UiEvent::click(Target::TestimonialCard(index)));
    }
}
