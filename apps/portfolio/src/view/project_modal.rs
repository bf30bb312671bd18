//! Project detail modal.
//!
//! Clicks resolve the project id against the session's in-memory project list;
//! the card markup carries only the id, never project data.

use tracing::debug;

use crate::content::models::{CompanionApp, Project};
use crate::dom::{Document, Element, Node, Selector};
use crate::render::{ion_icon, tag_elements};
use crate::view::events::{Action, Disposer, Listeners, Target};
use crate::view::shell::{
    MODAL_COMPANION, MODAL_COMPANION_DESC, MODAL_COMPANION_LABEL, MODAL_COMPANION_LINKS,
    MODAL_COMPANION_NAME, MODAL_DESC, MODAL_HIGHLIGHTS, MODAL_HIGHLIGHTS_LIST, MODAL_IMG,
    MODAL_LINKS, MODAL_TECH, MODAL_TITLE, PROJECT_MODAL, PROJECT_MODAL_CLOSE,
};

const DEFAULT_COMPANION_LABEL: &str = "Companion App";

/// Linear scan; project lists are small.
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

pub fn bind_project_modal(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();

    for link in doc.query_all(&Selector::Class("project-link")) {
        if let Some(id) = link.attr("data-project-id") {
            binder.on_click(
                Target::ProjectLink(id.to_string()),
                Action::OpenProject(id.to_string()),
            );
        }
    }
    if doc.exists(&Selector::Id(PROJECT_MODAL_CLOSE)) {
        binder.on_click(Target::ProjectModalClose, Action::CloseProjectModal);
    }
    if doc.exists(&Selector::Id(PROJECT_MODAL)) {
        binder.on_click(Target::ProjectModalBackdrop, Action::CloseProjectModal);
    }

    binder.finish()
}

/// Populates and shows the modal for `id`. Unknown ids leave the modal alone.
/// Returns whether the modal was opened.
pub fn open_project(doc: &mut Document, projects: &[Project], id: &str) -> bool {
    let Some(project) = find_project(projects, id) else {
        debug!("No project with id '{id}'");
        return false;
    };

    populate(doc, project);

    let shown = match doc.query_mut(&Selector::Id(PROJECT_MODAL)) {
        Some(modal) => {
            modal.add_class("active");
            true
        }
        None => false,
    };
    if shown {
        doc.set_scroll_locked(true);
    }
    shown
}

pub fn close_project_modal(doc: &mut Document) {
    if let Some(modal) = doc.query_mut(&Selector::Id(PROJECT_MODAL)) {
        modal.remove_class("active");
        doc.set_scroll_locked(false);
    }
}

pub fn is_open(doc: &Document) -> bool {
    doc.query(&Selector::Id(PROJECT_MODAL))
        .map(|m| m.has_class("active"))
        .unwrap_or(false)
}

fn populate(doc: &mut Document, project: &Project) {
    if let Some(img) = doc.query_mut(&Selector::Id(MODAL_IMG)) {
        img.set_attr("src", project.image.as_str());
    }
    if let Some(title) = doc.query_mut(&Selector::Id(MODAL_TITLE)) {
        title.set_text(project.display_title());
    }
    if let Some(desc) = doc.query_mut(&Selector::Id(MODAL_DESC)) {
        desc.set_text(project.description.as_str());
    }

    let highlights = project.highlights.as_deref().filter(|h| !h.is_empty());
    if doc.exists(&Selector::Id(MODAL_HIGHLIGHTS_LIST)) {
        if let Some(items) = highlights {
            set_children(doc, MODAL_HIGHLIGHTS_LIST, tag_elements("li", "", items));
        }
        set_displayed(doc, MODAL_HIGHLIGHTS, highlights.is_some());
    }

    if let Some(companion) = &project.companion_app {
        populate_companion(doc, companion);
    }
    set_displayed(doc, MODAL_COMPANION, project.companion_app.is_some());

    set_children(doc, MODAL_TECH, tag_elements("span", "tech-tag", &project.tech));
    set_children(doc, MODAL_LINKS, project_links(project));
}

fn populate_companion(doc: &mut Document, companion: &CompanionApp) {
    let label = companion
        .label
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_COMPANION_LABEL);
    if let Some(el) = doc.query_mut(&Selector::Id(MODAL_COMPANION_LABEL)) {
        el.set_text(label);
    }
    if let Some(el) = doc.query_mut(&Selector::Id(MODAL_COMPANION_NAME)) {
        el.set_text(companion.name.as_str());
    }
    if let Some(el) = doc.query_mut(&Selector::Id(MODAL_COMPANION_DESC)) {
        el.set_text(companion.description.as_str());
    }

    let links = [
        store_link("companion-link", "playstore", companion.playstore_url.as_deref()),
        store_link("companion-link", "appstore", companion.appstore_url.as_deref()),
    ];
    set_children(doc, MODAL_COMPANION_LINKS, links.into_iter().flatten().collect());
}

/// Play Store, App Store, GitHub, Live Demo; each only when its URL is present.
fn project_links(project: &Project) -> Vec<Element> {
    [
        store_link("project-modal-link", "playstore", project.playstore_url.as_deref()),
        store_link("project-modal-link", "appstore", project.appstore_url.as_deref()),
        external_link("github", "logo-github", "GitHub", project.github_url.as_deref()),
        external_link("live", "open-outline", "Live Demo", project.live_url.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn store_link(class: &str, store: &str, url: Option<&str>) -> Option<Element> {
    let (icon, label) = match store {
        "playstore" => ("logo-google-playstore", "Play Store"),
        _ => ("logo-apple-appstore", "App Store"),
    };
    let url = url.filter(|u| !u.is_empty())?;
    Some(
        Element::new("a")
            .class(class)
            .class(store)
            .attr_with("href", url)
            .attr_with("target", "_blank")
            .attr_with("rel", "noopener")
            .child(ion_icon(icon))
            .text(format!(" {label}")),
    )
}

fn external_link(kind: &str, icon: &str, label: &str, url: Option<&str>) -> Option<Element> {
    let url = url.filter(|u| !u.is_empty())?;
    Some(
        Element::new("a")
            .class("project-modal-link")
            .class(kind)
            .attr_with("href", url)
            .attr_with("target", "_blank")
            .attr_with("rel", "noopener")
            .child(ion_icon(icon))
            .text(format!(" {label}")),
    )
}

fn set_children(doc: &mut Document, id: &str, elements: Vec<Element>) {
    if let Some(el) = doc.query_mut(&Selector::Id(id)) {
        el.replace_children(elements.into_iter().map(Node::from).collect());
    }
}

fn set_displayed(doc: &mut Document, id: &str, displayed: bool) {
    if let Some(el) = doc.query_mut(&Selector::Id(id)) {
        el.set_attr(
            "style",
            if displayed { "display: block" } else { "display: none" },
        );
    }
}
