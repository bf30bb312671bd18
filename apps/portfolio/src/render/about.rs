use crate::content::models::{About, AboutService, Stat, Testimonial};
use crate::dom::{Document, Element, Node};
use crate::render::{ABOUT_TEXT, SERVICE_LIST, STATS_SECTION, TESTIMONIALS_LIST};

/// What the about renderer touched; testimonials need their binder re-run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AboutRendered {
    pub any: bool,
    pub testimonials: bool,
}

pub fn render_about(doc: &mut Document, data: Option<&About>) -> AboutRendered {
    let mut out = AboutRendered::default();
    let Some(about) = data else {
        return out;
    };

    if let Some(paragraphs) = &about.about_text {
        let nodes: Vec<Node> = paragraphs
            .iter()
            .map(|p| Element::new("p").text(p.as_str()).into())
            .collect();
        out.any |= doc.replace_container(ABOUT_TEXT, nodes);
    }
    if let Some(stats) = &about.stats {
        out.any |= doc.replace_container(STATS_SECTION, stats.iter().map(stat_card).collect());
    }
    if let Some(services) = &about.services {
        out.any |= doc.replace_container(SERVICE_LIST, services.iter().map(service_item).collect());
    }
    if let Some(testimonials) = &about.testimonials {
        out.testimonials = doc.replace_container(
            TESTIMONIALS_LIST,
            testimonials.iter().map(testimonial_item).collect(),
        );
        out.any |= out.testimonials;
    }
    out
}

fn stat_card(stat: &Stat) -> Node {
    Element::new("div")
        .class("stat-card reveal")
        .child(
            Element::new("h3")
                .class("stat-number")
                .attr_with("data-count", stat.count.as_str())
                .text("0"),
        )
        .child(Element::new("p").class("stat-label").text(stat.label.as_str()))
        .into()
}

fn service_item(svc: &AboutService) -> Node {
    Element::new("li")
        .class("service-item reveal")
        .child(
            Element::new("div").class("service-icon-box").child(
                Element::new("img")
                    .attr_with("src", svc.icon.as_str())
                    .attr_with("alt", svc.title.as_str())
                    .attr_with("width", "40"),
            ),
        )
        .child(
            Element::new("div")
                .class("service-content-box")
                .child(
                    Element::new("h4")
                        .class("h4 service-item-title")
                        .text(svc.title.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("service-item-text")
                        .text(svc.description.as_str()),
                ),
        )
        .into()
}

fn testimonial_item(t: &Testimonial) -> Node {
    Element::new("li")
        .class("testimonials-item")
        .child(
            Element::new("div")
                .class("content-card")
                .flag("data-testimonials-item")
                .child(
                    Element::new("figure").class("testimonials-avatar-box").child(
                        Element::new("img")
                            .attr_with("src", t.avatar.as_str())
                            .attr_with("alt", t.name.as_str())
                            .attr_with("width", "60")
                            .flag("data-testimonials-avatar"),
                    ),
                )
                .child(
                    Element::new("h4")
                        .class("h4 testimonials-item-title")
                        .flag("data-testimonials-title")
                        .text(t.name.as_str()),
                )
                .child(
                    Element::new("p")
                        .class("testimonials-item-role")
                        .text(t.role.as_str()),
                )
                .child(
                    Element::new("div")
                        .class("testimonials-text")
                        .flag("data-testimonials-text")
                        .child(Element::new("p").text(t.text.as_str())),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    fn doc() -> Document {
        Document::new(
            Element::new("html")
                .child(Element::new("div").id(ABOUT_TEXT))
                .child(Element::new("div").id(STATS_SECTION))
                .child(Element::new("ul").id(TESTIMONIALS_LIST)),
        )
    }

    #[test]
    fn test_testimonials_flagged_for_rebinding() {
        let mut doc = doc();
        let about = About {
            testimonials: Some(vec![Testimonial {
                name: "Jane".into(),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let rendered = render_about(&mut doc, Some(&about));
        assert!(rendered.any && rendered.testimonials);
        assert_eq!(doc.query_all(&Selector::Attr("data-testimonials-item")).len(), 1);
    }

    #[test]
    fn test_stats_start_at_zero_with_target_attribute() {
        let mut doc = doc();
        let about = About {
            stats: Some(vec![Stat {
                count: "90".into(),
                label: "Projects".into(),
            }]),
            ..Default::default()
        };
        render_about(&mut doc, Some(&about));
        let number = doc.query(&Selector::Class("stat-number")).unwrap();
        assert_eq!(number.attr("data-count"), Some("90"));
        assert_eq!(number.text_content(), "0");
    }

    #[test]
    fn test_services_without_container_are_skipped() {
        let mut doc = doc();
        let about = About {
            services: Some(vec![AboutService::default()]),
            ..Default::default()
        };
        assert_eq!(render_about(&mut doc, Some(&about)), AboutRendered::default());
    }
}
