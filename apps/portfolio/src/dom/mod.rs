//! Headless document tree.
//!
//! Renderers build `Node` trees instead of concatenating strings so the view
//! session can mutate classes, attributes and text after the fact (filtering,
//! modals, animations) and serialise the final state once.

pub mod document;

pub use document::Document;

/// Elements serialised without a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "meta", "link", "br", "hr"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Element lookup predicates, the subset of CSS selectors the site uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selector<'a> {
    Id(&'a str),
    Class(&'a str),
    /// `[name]`
    Attr(&'a str),
    /// `[name="value"]`
    AttrEq(&'a str, &'a str),
}

impl Selector<'_> {
    pub fn matches(&self, el: &Element) -> bool {
        match *self {
            Selector::Id(id) => el.attr("id") == Some(id),
            Selector::Class(class) => el.has_class(class),
            Selector::Attr(name) => el.attr(name).is_some(),
            Selector::AttrEq(name, value) => el.attr(name) == Some(value),
        }
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    // ── builder ────────────────────────────────────────────────────────────

    pub fn attr_with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Boolean/marker attribute such as `data-filter-item`.
    pub fn flag(self, name: &str) -> Self {
        self.attr_with(name, "")
    }

    pub fn id(self, id: &str) -> Self {
        self.attr_with("id", id)
    }

    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends `node` only when present.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    // ── attributes ─────────────────────────────────────────────────────────

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        let kept = match self.attr("class") {
            Some(existing) => existing
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" "),
            None => return,
        };
        self.set_attr("class", kept);
    }

    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Flips `class` and returns whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        let on = !self.has_class(class);
        self.set_class(class, on);
        on
    }

    // ── content ────────────────────────────────────────────────────────────

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn replace_children(&mut self, nodes: Vec<Node>) {
        self.children = nodes;
    }

    // ── queries ────────────────────────────────────────────────────────────

    /// Depth-first search over descendants (not `self`).
    pub fn find(&self, sel: &Selector<'_>) -> Option<&Element> {
        for node in &self.children {
            if let Node::Element(el) = node {
                if sel.matches(el) {
                    return Some(el);
                }
                if let Some(found) = el.find(sel) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn find_mut(&mut self, sel: &Selector<'_>) -> Option<&mut Element> {
        for node in &mut self.children {
            if let Node::Element(el) = node {
                if sel.matches(el) {
                    return Some(el);
                }
                if let Some(found) = el.find_mut(sel) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All matching descendants in document order.
    pub fn find_all(&self, sel: &Selector<'_>) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(sel, &mut out);
        out
    }

    fn collect<'a>(&'a self, sel: &Selector<'_>, out: &mut Vec<&'a Element>) {
        for node in &self.children {
            if let Node::Element(el) = node {
                if sel.matches(el) {
                    out.push(el);
                }
                el.collect(sel, out);
            }
        }
    }

    /// Visits every matching descendant mutably, in document order.
    pub fn for_each_mut(&mut self, sel: &Selector<'_>, f: &mut dyn FnMut(&mut Element)) {
        for node in &mut self.children {
            if let Node::Element(el) = node {
                if sel.matches(el) {
                    f(el);
                }
                el.for_each_mut(sel, f);
            }
        }
    }

    // ── serialisation ──────────────────────────────────────────────────────

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        write_nodes(&self.children, out);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

pub fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&html_escape(text)),
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(el) => collect_text(&el.children, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
