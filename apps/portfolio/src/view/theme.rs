//! Dark/light theme with a persisted preference.

use std::collections::HashMap;

use crate::dom::{Document, Selector};
use crate::view::events::{Action, Disposer, Listeners, Target};
use crate::view::shell::{THEME_LABEL, THEME_TOGGLE_BTN};

pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Unknown values are treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Text on the toggle: names the theme a click switches to.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding a single saved theme, as read back from a cookie.
    pub fn with_theme(theme: Option<Theme>) -> Self {
        let mut store = Self::new();
        if let Some(theme) = theme {
            store.set(THEME_KEY, theme.as_str());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub fn saved_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|v| Theme::parse(&v))
        .unwrap_or_default()
}

/// Theme currently applied to the document root.
pub fn current_theme(doc: &Document) -> Theme {
    doc.root()
        .attr("data-theme")
        .and_then(Theme::parse)
        .unwrap_or_default()
}

pub fn apply_theme(doc: &mut Document, theme: Theme) {
    doc.root_mut().set_attr("data-theme", theme.as_str());
    if let Some(label) = doc.query_mut(&Selector::Id(THEME_LABEL)) {
        label.set_text(theme.label());
    }
}

/// Applies the saved preference. Runs before any content renders.
pub fn init_theme(doc: &mut Document, store: &dyn PreferenceStore) -> Theme {
    let theme = saved_theme(store);
    apply_theme(doc, theme);
    theme
}

pub fn toggle_theme(doc: &mut Document, store: &mut dyn PreferenceStore) -> Theme {
    let next = current_theme(doc).toggled();
    apply_theme(doc, next);
    store.set(THEME_KEY, next.as_str());
    next
}

pub fn bind_theme_toggle(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();
    if doc.exists(&Selector::Id(THEME_TOGGLE_BTN)) {
        binder.on_click(Target::ThemeToggle, Action::ToggleTheme);
    }
    binder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;
    use crate::view::shell::build_shell;

    fn label(doc: &Document) -> String {
        doc.query(&Selector::Id(THEME_LABEL)).unwrap().text_content()
    }

    #[test]
    fn test_defaults_to_dark() {
        let mut doc = build_shell(&SiteProfile::default());
        let store = MemoryStore::new();
        assert_eq!(init_theme(&mut doc, &store), Theme::Dark);
        assert_eq!(doc.root().attr("data-theme"), Some("dark"));
        assert_eq!(label(&doc), "Light Mode");
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut doc = build_shell(&SiteProfile::default());
        let mut store = MemoryStore::new();
        init_theme(&mut doc, &store);

        assert_eq!(toggle_theme(&mut doc, &mut store), Theme::Light);
        assert_eq!(label(&doc), "Dark Mode");
        assert_eq!(toggle_theme(&mut doc, &mut store), Theme::Dark);
        assert_eq!(doc.root().attr("data-theme"), Some("dark"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_preference_survives_reload() {
        let mut store = MemoryStore::new();
        let mut doc = build_shell(&SiteProfile::default());
        init_theme(&mut doc, &store);
        toggle_theme(&mut doc, &mut store);

        let mut reloaded = build_shell(&SiteProfile::default());
        assert_eq!(init_theme(&mut reloaded, &store), Theme::Light);
        assert_eq!(reloaded.root().attr("data-theme"), Some("light"));
        assert_eq!(label(&reloaded), "Dark Mode");
    }

    #[test]
    fn test_garbage_saved_value_falls_back_to_dark() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        assert_eq!(saved_theme(&store), Theme::Dark);
    }
}
