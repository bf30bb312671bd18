// Template Renderers: one per content domain.
// Each renderer fully replaces its container(s) and is a silent no-op when
// either the data or the container is missing.

pub mod about;
pub mod blog;
pub mod projects;
pub mod resume;
pub mod services;

use crate::dom::Element;

pub const EXPERIENCE_LIST: &str = "experienceList";
pub const EDUCATION_LIST: &str = "educationList";
pub const TECHNICAL_SKILLS_LIST: &str = "technicalSkillsList";
pub const TOOLS_SKILLS_LIST: &str = "toolsSkillsList";
pub const PROJECT_LIST: &str = "projectList";
pub const BLOG_POSTS_LIST: &str = "blogPostsList";
pub const ABOUT_TEXT: &str = "aboutText";
pub const STATS_SECTION: &str = "statsSection";
pub const SERVICE_LIST: &str = "serviceList";
pub const TESTIMONIALS_LIST: &str = "testimonialsList";
pub const BUSINESS_SERVICE_LIST: &str = "businessServiceList";

pub fn ion_icon(name: &str) -> Element {
    Element::new("ion-icon").attr_with("name", name)
}

/// One element per entry, order preserved.
pub fn tag_elements(tag: &str, class: &str, items: &[String]) -> Vec<Element> {
    items
        .iter()
        .map(|item| {
            let el = Element::new(tag).text(item.as_str());
            if class.is_empty() {
                el
            } else {
                el.class(class)
            }
        })
        .collect()
}
