use crate::dom::Document;
use crate::view::events::{Action, Disposer, Listeners, UiEvent};
use crate::view::{project_modal, testimonials};

/// Document-level keys. Bound once per session, not per render.
pub fn bind_keyboard(listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();
    binder.on(UiEvent::escape(), Action::DismissModal);
    binder.finish()
}

/// Escape closes the project modal when it is open, otherwise the
/// testimonials modal when that one is open.
pub fn dismiss_modal(doc: &mut Document) {
    if project_modal::is_open(doc) {
        project_modal::close_project_modal(doc);
    } else if testimonials::is_open(doc) {
        testimonials::set_open(doc, false);
    }
}
