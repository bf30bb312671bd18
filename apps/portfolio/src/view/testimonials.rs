//! Testimonials modal. Unlike the project modal it copies straight from the
//! clicked card's markup into one shared modal shell.

use crate::dom::{Document, Selector};
use crate::render::TESTIMONIALS_LIST;
use crate::view::events::{Action, Disposer, Listeners, Target};

pub fn bind_testimonials_modal(doc: &Document, listeners: &mut Listeners) -> Disposer {
    let mut binder = listeners.binder();

    let cards = doc
        .query(&Selector::Id(TESTIMONIALS_LIST))
        .map(|list| list.find_all(&Selector::Attr("data-testimonials-item")).len())
        .unwrap_or(0);
    for index in 0..cards {
        binder.on_click(Target::TestimonialCard(index), Action::OpenTestimonial(index));
    }
    if doc.exists(&Selector::Attr("data-modal-close-btn")) {
        binder.on_click(Target::TestimonialsClose, Action::ToggleTestimonials);
    }
    if doc.exists(&Selector::Attr("data-overlay")) {
        binder.on_click(Target::Overlay, Action::ToggleTestimonials);
    }

    binder.finish()
}

/// Copies card `index` into the modal and toggles the modal/overlay pair.
pub fn open_testimonial(doc: &mut Document, index: usize) {
    let Some(card) = doc
        .query(&Selector::Id(TESTIMONIALS_LIST))
        .and_then(|list| {
            list.find_all(&Selector::Attr("data-testimonials-item"))
                .get(index)
                .map(|card| (*card).clone())
        })
    else {
        return;
    };

    if let Some(avatar) = card.find(&Selector::Attr("data-testimonials-avatar")) {
        if let Some(img) = doc.query_mut(&Selector::Attr("data-modal-img")) {
            img.set_attr("src", avatar.attr("src").unwrap_or_default());
            img.set_attr("alt", avatar.attr("alt").unwrap_or_default());
        }
    }
    if let Some(title) = card.find(&Selector::Attr("data-testimonials-title")) {
        if let Some(el) = doc.query_mut(&Selector::Attr("data-modal-title")) {
            el.replace_children(title.children.clone());
        }
    }
    if let Some(text) = card.find(&Selector::Attr("data-testimonials-text")) {
        if let Some(el) = doc.query_mut(&Selector::Attr("data-modal-text")) {
            el.replace_children(text.children.clone());
        }
    }

    toggle_testimonials(doc);
}

/// Flips modal and overlay together; the overlay follows the modal's state so
/// the two can never disagree.
pub fn toggle_testimonials(doc: &mut Document) {
    let open = !is_open(doc);
    set_open(doc, open);
}

pub fn set_open(doc: &mut Document, open: bool) {
    if let Some(container) = doc.query_mut(&Selector::Attr("data-modal-container")) {
        container.set_class("active", open);
    }
    if let Some(overlay) = doc.query_mut(&Selector::Attr("data-overlay")) {
        overlay.set_class("active", open);
    }
}

pub fn is_open(doc: &Document) -> bool {
    doc.query(&Selector::Attr("data-modal-container"))
        .map(|m| m.has_class("active"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;
    use crate::content::models::{About, Testimonial};
    use crate::render::about::render_about;
    use crate::view::shell::build_shell;

    fn doc_with_testimonials() -> Document {
        let mut doc = build_shell(&SiteProfile::default());
        let about = About {
            testimonials: Some(vec![
                Testimonial {
                    name: "Jane".into(),
                    role: "CTO".into(),
                    avatar: "/img/jane.png".into(),
                    text: "Great work.".into(),
                },
                Testimonial {
                    name: "Omar".into(),
                    avatar: "/img/omar.png".into(),
                    text: "Shipped on time.".into(),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        render_about(&mut doc, Some(&about));
        doc
    }

    fn overlay_open(doc: &Document) -> bool {
        doc.query(&Selector::Attr("data-overlay")).unwrap().has_class("active")
    }

    #[test]
    fn test_card_contents_copied_into_modal() {
        let mut doc = doc_with_testimonials();
        open_testimonial(&mut doc, 1);

        assert!(is_open(&doc) && overlay_open(&doc));
        let img = doc.query(&Selector::Attr("data-modal-img")).unwrap();
        assert_eq!(img.attr("src"), Some("/img/omar.png"));
        assert_eq!(img.attr("alt"), Some("Omar"));
        assert_eq!(
            doc.query(&Selector::Attr("data-modal-title")).unwrap().text_content(),
            "Omar"
        );
        assert_eq!(
            doc.query(&Selector::Attr("data-modal-text")).unwrap().text_content(),
            "Shipped on time."
        );
    }

    #[test]
    fn test_modal_and_overlay_always_move_together() {
        let mut doc = doc_with_testimonials();
        for _ in 0..3 {
            toggle_testimonials(&mut doc);
            assert_eq!(is_open(&doc), overlay_open(&doc));
        }
    }

    #[test]
    fn test_out_of_range_card_is_ignored() {
        let mut doc = doc_with_testimonials();
        open_testimonial(&mut doc, 9);
        assert!(!is_open(&doc));
    }

    #[test]
    fn test_binder_registers_one_listener_per_card() {
        let doc = doc_with_testimonials();
        let mut listeners = Listeners::new();
        let disposer = bind_testimonials_modal(&doc, &mut listeners);
        // two cards + close button + overlay
        assert_eq!(disposer.len(), 4);
    }
}
