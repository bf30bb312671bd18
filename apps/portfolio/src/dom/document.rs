use std::collections::HashMap;

use super::{Element, Node, Selector};

/// A whole page: the root element plus the bits of window state the
/// interaction layer touches (scroll position, body scroll lock).
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    /// Bumped on every full replace of a container's content.
    generations: HashMap<String, u64>,
    scroll_y: u32,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            generations: HashMap::new(),
            scroll_y: 0,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn query(&self, sel: &Selector<'_>) -> Option<&Element> {
        if sel.matches(&self.root) {
            return Some(&self.root);
        }
        self.root.find(sel)
    }

    pub fn query_mut(&mut self, sel: &Selector<'_>) -> Option<&mut Element> {
        if sel.matches(&self.root) {
            return Some(&mut self.root);
        }
        self.root.find_mut(sel)
    }

    pub fn query_all(&self, sel: &Selector<'_>) -> Vec<&Element> {
        self.root.find_all(sel)
    }

    pub fn for_each_mut(&mut self, sel: &Selector<'_>, mut f: impl FnMut(&mut Element)) {
        self.root.for_each_mut(sel, &mut f);
    }

    pub fn exists(&self, sel: &Selector<'_>) -> bool {
        self.query(sel).is_some()
    }

    /// Replaces the entire content of the element with `id`.
    /// Returns `false` (and changes nothing) when the container is absent.
    pub fn replace_container(&mut self, id: &str, nodes: Vec<Node>) -> bool {
        match self.root.find_mut(&Selector::Id(id)) {
            Some(container) => {
                container.replace_children(nodes);
                *self.generations.entry(id.to_string()).or_insert(0) += 1;
                true
            }
            None => false,
        }
    }

    pub fn generation(&self, id: &str) -> u64 {
        self.generations.get(id).copied().unwrap_or(0)
    }

    pub fn set_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = self.root.find_mut(&Selector::Attr("data-body")) {
            if locked {
                body.set_attr("style", "overflow: hidden");
            } else {
                body.remove_attr("style");
            }
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.root
            .find(&Selector::Attr("data-body"))
            .and_then(|body| body.attr("style"))
            .map(|style| style.contains("overflow: hidden"))
            .unwrap_or(false)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_y = 0;
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    #[cfg(test)]
    pub fn set_scroll_y(&mut self, y: u32) {
        self.scroll_y = y;
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.root.write_html(&mut out);
        out
    }
}
