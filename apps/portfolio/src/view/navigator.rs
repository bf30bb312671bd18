//! Page navigation, the mobile sidebar toggle and the two CTAs that jump
//! between pages.

use tracing::debug;

use crate::dom::{Document, Selector};
use crate::view::events::{Action, Disposer, Listeners, Target};
use crate::view::shell::{BIZ_START_PROJECT, VIEW_SERVICES_BTN};

/// Follow-up animation a page wants once it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAnimation {
    SkillBars,
    Stats,
}

pub fn bind_navigation(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();
    for link in doc.query_all(&Selector::Attr("data-nav-link")) {
        let label = nav_label(&link.text_content());
        binder.on_click(Target::NavLink(label.clone()), Action::Navigate(label));
    }
    binder.finish()
}

pub fn bind_sidebar(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();
    if doc.exists(&Selector::Attr("data-sidebar")) && doc.exists(&Selector::Attr("data-sidebar-btn")) {
        binder.on_click(Target::SidebarToggle, Action::ToggleSidebar);
    }
    binder.finish()
}

/// "View Services" on About and "Start a Project" on Services.
pub fn bind_ctas(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();
    if doc.exists(&Selector::Id(VIEW_SERVICES_BTN)) {
        binder.on_click(Target::ViewServicesCta, Action::Navigate("services".into()));
    }
    if doc.exists(&Selector::Id(BIZ_START_PROJECT)) {
        binder.on_click(Target::StartProjectCta, Action::Navigate("contact".into()));
    }
    binder.finish()
}

fn nav_label(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Shows the page named by `label` and hides every other one, keeping the nav
/// controls in step. Returns the activated page, or `None` (and changes
/// nothing) when no page has that name.
pub fn activate_page(doc: &mut Document, label: &str) -> Option<String> {
    let target = nav_label(label);
    let known = doc
        .query_all(&Selector::Attr("data-page"))
        .iter()
        .any(|page| page.attr("data-page") == Some(target.as_str()));
    if !known {
        debug!("Ignoring navigation to unknown page '{label}'");
        return None;
    }

    doc.for_each_mut(&Selector::Attr("data-page"), |page| {
        let on = page.attr("data-page") == Some(target.as_str());
        page.set_class("active", on);
    });
    doc.for_each_mut(&Selector::Attr("data-nav-link"), |link| {
        let on = nav_label(&link.text_content()) == target;
        link.set_class("active", on);
    });
    doc.scroll_to_top();

    Some(target)
}

pub fn page_animation(page: &str) -> Option<PageAnimation> {
    match page {
        "resume" => Some(PageAnimation::SkillBars),
        "about" => Some(PageAnimation::Stats),
        _ => None,
    }
}

pub fn active_page(doc: &Document) -> Option<String> {
    doc.query_all(&Selector::Attr("data-page"))
        .into_iter()
        .find(|page| page.has_class("active"))
        .and_then(|page| page.attr("data-page").map(str::to_string))
}

pub fn toggle_sidebar(doc: &mut Document) {
    if let Some(sidebar) = doc.query_mut(&Selector::Attr("data-sidebar")) {
        sidebar.toggle_class("active");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;
    use crate::view::shell::build_shell;

    fn active(doc: &Document, sel: &Selector<'_>) -> Vec<String> {
        doc.query_all(sel)
            .into_iter()
            .filter(|el| el.has_class("active"))
            .map(|el| el.text_content().trim().to_lowercase())
            .collect()
    }

    #[test]
    fn test_exactly_one_page_and_link_active() {
        let mut doc = build_shell(&SiteProfile::default());
        doc.set_scroll_y(640);

        assert_eq!(activate_page(&mut doc, "Portfolio").as_deref(), Some("portfolio"));
        assert_eq!(active_page(&doc).as_deref(), Some("portfolio"));
        assert_eq!(active(&doc, &Selector::Attr("data-nav-link")), vec!["portfolio"]);
        assert_eq!(
            doc.query_all(&Selector::Attr("data-page"))
                .iter()
                .filter(|p| p.has_class("active"))
                .count(),
            1
        );
        assert_eq!(doc.scroll_y(), 0);
    }

    #[test]
    fn test_reactivating_current_page_is_harmless() {
        let mut doc = build_shell(&SiteProfile::default());
        activate_page(&mut doc, "about");
        activate_page(&mut doc, "ABOUT");
        assert_eq!(active_page(&doc).as_deref(), Some("about"));
        assert_eq!(active(&doc, &Selector::Attr("data-nav-link")), vec!["about"]);
    }

    #[test]
    fn test_unknown_label_changes_nothing() {
        let mut doc = build_shell(&SiteProfile::default());
        doc.set_scroll_y(10);
        assert!(activate_page(&mut doc, "pricing").is_none());
        assert_eq!(active_page(&doc).as_deref(), Some("about"));
        assert_eq!(doc.scroll_y(), 10);
    }

    #[test]
    fn test_ctas_and_nav_links_bound() {
        let doc = build_shell(&SiteProfile::default());
        let mut listeners = Listeners::new();
        let nav = bind_navigation(&doc, &mut listeners);
        let ctas = bind_ctas(&doc, &mut listeners);
        assert_eq!(nav.len(), 6);
        assert_eq!(ctas.len(), 2);
        assert_eq!(
            listeners.actions_for(&crate::view::events::UiEvent::click(Target::StartProjectCta)),
            vec![Action::Navigate("contact".into())]
        );
        listeners.dispose(nav);
        listeners.dispose(ctas);
    }

    #[test]
    fn test_sidebar_toggle_flips() {
        let mut doc = build_shell(&SiteProfile::default());
        toggle_sidebar(&mut doc);
        assert!(doc.query(&Selector::Attr("data-sidebar")).unwrap().has_class("active"));
        toggle_sidebar(&mut doc);
        assert!(!doc.query(&Selector::Attr("data-sidebar")).unwrap().has_class("active"));
    }
}
