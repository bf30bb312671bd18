use crate::content::models::{Resume, Skill, TimelineEntry};
use crate::dom::{Document, Element, Node};
use crate::render::{
    ion_icon, EDUCATION_LIST, EXPERIENCE_LIST, TECHNICAL_SKILLS_LIST, TOOLS_SKILLS_LIST,
};

/// Renders experience, education and both skill lists.
/// Returns `true` if at least one list was rendered.
pub fn render_resume(doc: &mut Document, data: Option<&Resume>) -> bool {
    let Some(resume) = data else {
        return false;
    };

    let mut rendered = false;
    if let Some(experience) = &resume.experience {
        rendered |= doc.replace_container(EXPERIENCE_LIST, timeline_items(experience));
    }
    if let Some(education) = &resume.education {
        rendered |= doc.replace_container(EDUCATION_LIST, timeline_items(education));
    }
    if let Some(skills) = &resume.technical_skills {
        rendered |= doc.replace_container(TECHNICAL_SKILLS_LIST, skill_items(skills));
    }
    if let Some(skills) = &resume.tools_skills {
        rendered |= doc.replace_container(TOOLS_SKILLS_LIST, skill_items(skills));
    }
    rendered
}

fn timeline_items(entries: &[TimelineEntry]) -> Vec<Node> {
    entries.iter().map(|e| timeline_item(e).into()).collect()
}

fn timeline_item(entry: &TimelineEntry) -> Element {
    let company = entry
        .company
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|c| Element::new("span").class("timeline-company").text(c));
    let location = entry
        .location
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(|l| {
            Element::new("span")
                .class("timeline-location")
                .child(ion_icon("location-outline"))
                .text(format!(" {l}"))
        });

    Element::new("li")
        .class("timeline-item reveal")
        .child(
            Element::new("h4")
                .class("h4 timeline-item-title")
                .text(entry.title.as_str()),
        )
        .child_opt(company)
        .child(Element::new("span").class("timeline-date").text(entry.date.as_str()))
        .child_opt(location)
        .child(
            Element::new("p")
                .class("timeline-text")
                .text(entry.description.as_str()),
        )
}

fn skill_items(skills: &[Skill]) -> Vec<Node> {
    skills.iter().map(|s| skill_item(s).into()).collect()
}

fn skill_item(skill: &Skill) -> Element {
    let level = skill.percent().to_string();
    Element::new("li")
        .class("skills-item")
        .child(
            Element::new("div")
                .class("title-wrapper")
                .child(Element::new("h5").class("h5").text(skill.name.as_str()))
                .child(
                    Element::new("data")
                        .attr_with("value", level.as_str())
                        .text(format!("{level}%")),
                ),
        )
        .child(
            Element::new("div").class("skill-progress-bg").child(
                Element::new("div")
                    .class("skill-progress-fill")
                    .attr_with("data-width", level.as_str()),
            ),
        )
}
