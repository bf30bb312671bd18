//! Listener lifecycle.
//!
//! Binders register `(event, action)` pairs and get back a `Disposer`.
//! Re-rendering a section disposes the previous binder's listeners before
//! binding again, so a click never fires a handler twice no matter how many
//! times the section was rendered.

/// Something the user can interact with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Nav control, keyed by its lowercased label.
    NavLink(String),
    /// Desktop filter button, keyed by filter value.
    FilterButton(String),
    /// The collapsed mobile filter select.
    FilterSelect,
    /// Mobile select entry, keyed by filter value.
    SelectItem(String),
    /// Project card link, keyed by project id.
    ProjectLink(String),
    ProjectModalClose,
    /// The dimmed area around the project modal panel.
    ProjectModalBackdrop,
    /// Testimonial card, keyed by position in the list.
    TestimonialCard(usize),
    TestimonialsClose,
    Overlay,
    SidebarToggle,
    ThemeToggle,
    ViewServicesCta,
    StartProjectCta,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UiEvent {
    Click(Target),
    /// Document-level key press, by key name (`"Escape"`).
    KeyDown(String),
}

impl UiEvent {
    pub fn click(target: Target) -> Self {
        UiEvent::Click(target)
    }

    pub fn escape() -> Self {
        UiEvent::KeyDown("Escape".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    Filter(String),
    /// Filter chosen from the mobile select; also collapses the select.
    SelectFilter(String),
    ToggleSelect,
    OpenProject(String),
    CloseProjectModal,
    OpenTestimonial(usize),
    ToggleTestimonials,
    /// Escape: close the topmost open modal.
    DismissModal,
    ToggleSidebar,
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    on: UiEvent,
    action: Action,
}

#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a binding batch whose listeners are released together.
    pub fn binder(&mut self) -> Binder<'_> {
        Binder {
            listeners: self,
            ids: Vec::new(),
        }
    }

    fn add(&mut self, on: UiEvent, action: Action) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener { id, on, action });
        id
    }

    pub fn dispose(&mut self, disposer: Disposer) {
        self.entries.retain(|l| !disposer.ids.contains(&l.id));
    }

    /// Actions to run for `event`, in registration order.
    pub fn actions_for(&self, event: &UiEvent) -> Vec<Action> {
        self.entries
            .iter()
            .filter(|l| &l.on == event)
            .map(|l| l.action.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub struct Binder<'a> {
    listeners: &'a mut Listeners,
    ids: Vec<ListenerId>,
}

impl Binder<'_> {
    pub fn on(&mut self, event: UiEvent, action: Action) -> &mut Self {
        let id = self.listeners.add(event, action);
        self.ids.push(id);
        self
    }

    pub fn on_click(&mut self, target: Target, action: Action) -> &mut Self {
        self.on(UiEvent::Click(target), action)
    }

    pub fn finish(self) -> Disposer {
        Disposer { ids: self.ids }
    }
}

/// Handle releasing every listener registered by one binder run.
#[must_use = "dropping a Disposer leaks its listeners until the session ends"]
#[derive(Debug, Default)]
pub struct Disposer {
    ids: Vec<ListenerId>,
}

#[cfg(test)]
impl Disposer {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_releases_only_its_batch() {
        let mut listeners = Listeners::new();

        let mut first = listeners.binder();
        first.on_click(Target::ThemeToggle, Action::ToggleTheme);
        let first = first.finish();

        let mut second = listeners.binder();
        second
            .on_click(Target::FilterButton("all".into()), Action::Filter("all".into()))
            .on(UiEvent::escape(), Action::DismissModal);
        let second = second.finish();

        assert_eq!(listeners.len(), 3);
        listeners.dispose(second);
        assert_eq!(listeners.len(), 1);
        assert_eq!(
            listeners.actions_for(&UiEvent::click(Target::ThemeToggle)),
            vec![Action::ToggleTheme]
        );
        listeners.dispose(first);
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn test_unmatched_event_yields_no_actions() {
        let mut listeners = Listeners::new();
        let mut b = listeners.binder();
        b.on(UiEvent::escape(), Action::DismissModal);
        let _disposer = b.finish();
        assert!(listeners
            .actions_for(&UiEvent::KeyDown("Enter".into()))
            .is_empty());
    }
}
