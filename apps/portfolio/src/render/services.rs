use crate::content::models::BusinessService;
use crate::dom::{Document, Element, Node};
use crate::render::{ion_icon, tag_elements, BUSINESS_SERVICE_LIST};

pub fn render_business_services(doc: &mut Document, data: Option<&[BusinessService]>) -> bool {
    let Some(services) = data else {
        return false;
    };
    let cards: Vec<Node> = services.iter().map(|s| service_card(s).into()).collect();
    doc.replace_container(BUSINESS_SERVICE_LIST, cards)
}

fn service_card(svc: &BusinessService) -> Element {
    Element::new("li")
        .class("biz-service-card reveal")
        .child(
            Element::new("div")
                .class("biz-card-header")
                .child(
                    Element::new("div")
                        .class("biz-card-icon")
                        .child(ion_icon(&svc.icon)),
                )
                .child(
                    Element::new("div")
                        .class("biz-card-title-group")
                        .child(Element::new("h4").class("biz-card-title").text(svc.title.as_str()))
                        .child(
                            Element::new("p")
                                .class("biz-card-tagline")
                                .text(svc.tagline.as_str()),
                        ),
                ),
        )
        .child(
            Element::new("p")
                .class("biz-card-outcome")
                .text(svc.outcome.as_str()),
        )
        .child(
            Element::new("ul")
                .class("biz-card-deliverables")
                .children(tag_elements("li", "", &svc.deliverables)),
        )
        .child(
            Element::new("div")
                .class("biz-card-footer")
                .child(
                    Element::new("span")
                        .class("biz-timeline")
                        .child(ion_icon("time-outline"))
                        .text(format!(" {}", svc.timeline)),
                )
                .child(
                    Element::new("div")
                        .class("biz-tech-tags")
                        .children(tag_elements("span", "biz-tech-tag", &svc.tech_tags)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    #[test]
    fn test_tags_rendered_one_per_entry_in_order() {
        let mut doc = Document::new(
            Element::new("html").child(Element::new("ul").id(BUSINESS_SERVICE_LIST)),
        );
        let services = vec![BusinessService {
            title: "MVP".into(),
            deliverables: vec!["Design".into(), "Build".into()],
            tech_tags: vec!["Flutter".into(), "Firebase".into(), "Stripe".into()],
            ..Default::default()
        }];
        assert!(render_business_services(&mut doc, Some(&services)));

        let tags: Vec<String> = doc
            .query_all(&Selector::Class("biz-tech-tag"))
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(tags, vec!["Flutter", "Firebase", "Stripe"]);

        let deliverables = doc.query(&Selector::Class("biz-card-deliverables")).unwrap();
        assert_eq!(deliverables.children.len(), 2);
    }
}
