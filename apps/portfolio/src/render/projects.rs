use crate::content::models::Project;
use crate::dom::{Document, Element, Node};
use crate::render::{ion_icon, PROJECT_LIST};

/// Query string that reopens this project's detail modal server-side.
pub fn project_href(id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("page", "portfolio")
        .append_pair("project", id)
        .finish();
    format!("?{query}")
}

/// Renders the portfolio grid. Every item starts visible (`active`); the
/// filter binder narrows it afterwards.
///
/// Returns `false` when there is no data or no container, in which case the
/// caller must not re-bind.
pub fn render_projects(doc: &mut Document, data: Option<&[Project]>) -> bool {
    let Some(projects) = data else {
        return false;
    };
    let items: Vec<Node> = projects.iter().map(|p| project_item(p).into()).collect();
    doc.replace_container(PROJECT_LIST, items)
}

fn project_item(project: &Project) -> Element {
    Element::new("li")
        .class("project-item active")
        .flag("data-filter-item")
        .attr_with("data-category", project.category.as_str())
        .child(
            Element::new("a")
                .class("project-link")
                .attr_with("href", project_href(&project.id))
                .attr_with("data-project-id", project.id.as_str())
                .child(
                    Element::new("figure")
                        .class("project-img")
                        .child(
                            Element::new("div")
                                .class("project-item-icon-box")
                                .child(ion_icon("eye-outline")),
                        )
                        .child(
                            Element::new("img")
                                .attr_with("src", project.image.as_str())
                                .attr_with("alt", project.title.as_str())
                                .attr_with("loading", "lazy"),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("project-info")
                        .child(
                            Element::new("h3")
                                .class("project-title")
                                .text(project.title.as_str()),
                        )
                        .child(
                            Element::new("p")
                                .class("project-category")
                                .text(project.category_label.as_str()),
                        ),
                ),
        )
}
