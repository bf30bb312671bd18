//! Portfolio filter.
//!
//! The selected category lives in `FilterState`, owned by the session, rather
//! than being inferred from whichever control was clicked last. Filtering hides
//! items with the `active` class; nothing is removed from the document.

use crate::content::models::Project;
use crate::dom::{Document, Selector};
use crate::view::events::{Action, Disposer, Listeners, Target};
use crate::view::shell::WILDCARD_FILTER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selected: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected: WILDCARD_FILTER.to_string(),
        }
    }
}

impl FilterState {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, value: &str) {
        self.selected = value.trim().to_lowercase();
    }
}

pub fn category_matches(category: &str, selected: &str) -> bool {
    selected == WILDCARD_FILTER || category == selected
}

/// Ids that should be visible for `selected`, in array order.
pub fn visible_project_ids<'a>(projects: &'a [Project], selected: &str) -> Vec<&'a str> {
    projects
        .iter()
        .filter(|p| category_matches(&p.category, selected))
        .map(|p| p.id.as_str())
        .collect()
}

/// Applies `selected` to the rendered grid and the filter controls.
/// Pure with respect to its inputs: applying the same value twice is a no-op.
pub fn apply_filter(doc: &mut Document, selected: &str) {
    doc.for_each_mut(&Selector::Attr("data-filter-item"), |item| {
        let category = item.attr("data-category").unwrap_or_default().to_string();
        item.set_class("active", category_matches(&category, selected));
    });

    // Exactly one desktop control is marked active.
    let mut marked = false;
    doc.for_each_mut(&Selector::Attr("data-filter-btn"), |btn| {
        let on = !marked && btn.attr("data-filter-value") == Some(selected);
        marked |= on;
        btn.set_class("active", on);
    });

    let label = doc
        .query_all(&Selector::AttrEq("data-filter-value", selected))
        .first()
        .map(|control| control.text_content())
        .unwrap_or_else(|| selected.to_string());
    if let Some(value) = doc.query_mut(&Selector::Attr("data-select-value")) {
        value.set_text(label);
    }
}

/// Flips the mobile select open/closed.
pub fn toggle_select(doc: &mut Document) {
    if let Some(select) = doc.query_mut(&Selector::Attr("data-select")) {
        select.toggle_class("active");
    }
}

/// Binds the desktop buttons, the mobile select and its entries that exist in
/// `doc` right now. Missing controls are skipped.
pub fn bind_portfolio_filter(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();

    if doc.exists(&Selector::Attr("data-select")) {
        binder.on_click(Target::FilterSelect, Action::ToggleSelect);
    }
    for item in doc.query_all(&Selector::Attr("data-select-item")) {
        if let Some(value) = item.attr("data-filter-value") {
            binder.on_click(
                Target::SelectItem(value.to_string()),
                Action::SelectFilter(value.to_string()),
            );
        }
    }
    for btn in doc.query_all(&Selector::Attr("data-filter-btn")) {
        if let Some(value) = btn.attr("data-filter-value") {
            binder.on_click(
                Target::FilterButton(value.to_string()),
                Action::Filter(value.to_string()),
            );
        }
    }

    binder.finish()
}
