//! The static page skeleton every page load starts from: sidebar, navbar,
//! one article per page, empty section containers and the modal shells.

use crate::config::SiteProfile;
use crate::dom::{Document, Element};
use crate::render::{
    ion_icon, ABOUT_TEXT, BLOG_POSTS_LIST, BUSINESS_SERVICE_LIST, EDUCATION_LIST,
    EXPERIENCE_LIST, PROJECT_LIST, SERVICE_LIST, STATS_SECTION, TECHNICAL_SKILLS_LIST,
    TESTIMONIALS_LIST, TOOLS_SKILLS_LIST,
};

/// `(page id, nav label)` in navbar order. The first page is active on load.
pub const PAGES: &[(&str, &str)] = &[
    ("about", "About"),
    ("resume", "Resume"),
    ("portfolio", "Portfolio"),
    ("blog", "Blog"),
    ("services", "Services"),
    ("contact", "Contact"),
];

pub const WILDCARD_FILTER: &str = "all";

pub const TYPING_TITLE: &str = "typingTitle";
pub const THEME_LABEL: &str = "themeLabel";
pub const THEME_TOGGLE_BTN: &str = "themeToggleBtn";
pub const PROJECT_MODAL: &str = "projectModal";
pub const PROJECT_MODAL_CLOSE: &str = "projectModalClose";
pub const MODAL_IMG: &str = "modalImg";
pub const MODAL_TITLE: &str = "modalTitle";
pub const MODAL_DESC: &str = "modalDesc";
pub const MODAL_TECH: &str = "modalTech";
pub const MODAL_LINKS: &str = "modalLinks";
pub const MODAL_HIGHLIGHTS: &str = "modalHighlights";
pub const MODAL_HIGHLIGHTS_LIST: &str = "modalHighlightsList";
pub const MODAL_COMPANION: &str = "modalCompanion";
pub const MODAL_COMPANION_LABEL: &str = "modalCompanionLabel";
pub const MODAL_COMPANION_NAME: &str = "modalCompanionName";
pub const MODAL_COMPANION_DESC: &str = "modalCompanionDesc";
pub const MODAL_COMPANION_LINKS: &str = "modalCompanionLinks";
pub const VIEW_SERVICES_BTN: &str = "viewServicesBtn";
pub const BIZ_START_PROJECT: &str = "bizStartProject";
pub const CONTACT_FORM: &str = "contactForm";
pub const DOWNLOAD_CV_BTN: &str = "downloadPdfBtn";

/// Filter value selected by a control label.
pub fn filter_value(label: &str) -> String {
    label.trim().to_lowercase()
}

pub fn build_shell(profile: &SiteProfile) -> Document {
    let head = Element::new("head")
        .child(Element::new("meta").attr_with("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr_with("name", "viewport")
                .attr_with("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(format!("{} | Portfolio", profile.owner)))
        .child(
            Element::new("link")
                .attr_with("rel", "stylesheet")
                .attr_with("href", "/assets/css/style.css"),
        );

    let main = Element::new("main")
        .child(sidebar(profile))
        .child(
            Element::new("div")
                .class("main-content")
                .child(navbar())
                .child(about_page())
                .child(resume_page())
                .child(portfolio_page(profile))
                .child(blog_page())
                .child(services_page())
                .child(contact_page()),
        );

    let body = Element::new("body").flag("data-body").child(main).child(
        Element::new("script")
            .attr_with("type", "module")
            .attr_with("src", "https://unpkg.com/ionicons@7.1.0/dist/ionicons/ionicons.esm.js"),
    );

    Document::new(
        Element::new("html")
            .attr_with("lang", "en")
            .attr_with("data-theme", "dark")
            .child(head)
            .child(body),
    )
}

fn sidebar(profile: &SiteProfile) -> Element {
    Element::new("aside")
        .class("sidebar")
        .flag("data-sidebar")
        .child(
            Element::new("div")
                .class("sidebar-info")
                .child(
                    Element::new("figure").class("avatar-box").child(
                        Element::new("img")
                            .attr_with("src", "/assets/images/my-avatar.png")
                            .attr_with("alt", profile.owner.as_str())
                            .attr_with("width", "80"),
                    ),
                )
                .child(
                    Element::new("div")
                        .class("info-content")
                        .child(
                            Element::new("h1")
                                .class("name")
                                .attr_with("title", profile.owner.as_str())
                                .text(profile.owner.as_str()),
                        )
                        .child(Element::new("p").class("title").id(TYPING_TITLE)),
                )
                .child(
                    Element::new("button")
                        .class("info_more-btn")
                        .flag("data-sidebar-btn")
                        .child(Element::new("span").text("Show Contacts"))
                        .child(ion_icon("chevron-down")),
                ),
        )
        .child(
            Element::new("div")
                .class("sidebar-actions")
                .child(
                    Element::new("form")
                        .attr_with("action", "/theme/toggle")
                        .attr_with("method", "post")
                        .child(
                            Element::new("button")
                                .class("theme-toggle-btn")
                                .id(THEME_TOGGLE_BTN)
                                .attr_with("type", "submit")
                                .child(ion_icon("contrast-outline"))
                                .child(Element::new("span").id(THEME_LABEL).text("Light Mode")),
                        ),
                )
                .child(
                    Element::new("a")
                        .class("download-btn")
                        .id(DOWNLOAD_CV_BTN)
                        .attr_with("href", "/cv")
                        .attr_with("download", profile.cv_filename.as_str())
                        .child(ion_icon("download-outline"))
                        .text(" Download CV"),
                ),
        )
}

fn navbar() -> Element {
    let items = PAGES.iter().enumerate().map(|(i, (page, label))| {
        let link = Element::new("a")
            .class("navbar-link")
            .flag("data-nav-link")
            .attr_with("href", format!("?page={page}"))
            .text(*label);
        let link = if i == 0 { link.class("active") } else { link };
        Element::new("li").class("navbar-item").child(link)
    });
    Element::new("nav")
        .class("navbar")
        .child(Element::new("ul").class("navbar-list").children(items))
}

fn article(page: &str, heading: &str) -> Element {
    let el = Element::new("article")
        .class(page)
        .attr_with("data-page", page)
        .child(
            Element::new("header")
                .child(Element::new("h2").class("h2 article-title").text(heading)),
        );
    if PAGES.first().map(|(p, _)| *p) == Some(page) {
        el.class("active")
    } else {
        el
    }
}

fn about_page() -> Element {
    article("about", "About me")
        .child(Element::new("section").class("about-text").id(ABOUT_TEXT))
        .child(Element::new("section").class("stats").id(STATS_SECTION))
        .child(
            Element::new("a")
                .class("cta-btn")
                .id(VIEW_SERVICES_BTN)
                .attr_with("href", "?page=services")
                .text("View Services"),
        )
        .child(
            Element::new("section").class("service").child(
                Element::new("ul").class("service-list").id(SERVICE_LIST),
            ),
        )
        .child(
            Element::new("section").class("testimonials").child(
                Element::new("ul")
                    .class("testimonials-list has-scrollbar")
                    .id(TESTIMONIALS_LIST),
            ),
        )
        .child(testimonials_modal())
}

fn testimonials_modal() -> Element {
    Element::new("div")
        .class("modal-container")
        .flag("data-modal-container")
        .child(Element::new("div").class("overlay").flag("data-overlay"))
        .child(
            Element::new("section")
                .class("testimonials-modal")
                .child(
                    Element::new("button")
                        .class("modal-close-btn")
                        .flag("data-modal-close-btn")
                        .child(ion_icon("close-outline")),
                )
                .child(
                    Element::new("div").class("modal-img-wrapper").child(
                        Element::new("figure").class("modal-avatar-box").child(
                            Element::new("img")
                                .attr_with("src", "")
                                .attr_with("alt", "")
                                .attr_with("width", "80")
                                .flag("data-modal-img"),
                        ),
                    ),
                )
                .child(
                    Element::new("div")
                        .class("modal-content")
                        .child(
                            Element::new("h4")
                                .class("h3 modal-title")
                                .flag("data-modal-title"),
                        )
                        .child(Element::new("div").flag("data-modal-text")),
                ),
        )
}

fn resume_page() -> Element {
    let timeline = |title: &str, icon: &str, id: &str| {
        Element::new("section")
            .class("timeline")
            .child(
                Element::new("div")
                    .class("title-wrapper")
                    .child(Element::new("div").class("icon-box").child(ion_icon(icon)))
                    .child(Element::new("h3").class("h3").text(title)),
            )
            .child(Element::new("ol").class("timeline-list").id(id))
    };
    let skills = |title: &str, id: &str| {
        Element::new("section")
            .class("skill")
            .child(Element::new("h3").class("h3 skills-title").text(title))
            .child(Element::new("ul").class("skills-list content-card").id(id))
    };

    article("resume", "Resume")
        .child(timeline("Experience", "briefcase-outline", EXPERIENCE_LIST))
        .child(timeline("Education", "book-outline", EDUCATION_LIST))
        .child(skills("Technical Skills", TECHNICAL_SKILLS_LIST))
        .child(skills("Tools & Platforms", TOOLS_SKILLS_LIST))
}

fn portfolio_page(profile: &SiteProfile) -> Element {
    let mut labels: Vec<&str> = profile.filter_categories.iter().map(String::as_str).collect();
    if !labels.iter().any(|l| filter_value(l) == WILDCARD_FILTER) {
        labels.insert(0, "All");
    }

    let buttons = labels.iter().map(|label| {
        let value = filter_value(label);
        let button = Element::new("button")
            .flag("data-filter-btn")
            .attr_with("data-filter-value", value.as_str())
            .text(*label);
        let button = if value == WILDCARD_FILTER {
            button.class("active")
        } else {
            button
        };
        Element::new("li").class("filter-item").child(button)
    });

    let select_items = labels.iter().map(|label| {
        Element::new("li").class("select-item").child(
            Element::new("button")
                .flag("data-select-item")
                .attr_with("data-filter-value", filter_value(label))
                .text(*label),
        )
    });

    article("portfolio", "Portfolio")
        .child(
            Element::new("section")
                .class("projects")
                .child(Element::new("ul").class("filter-list").children(buttons))
                .child(
                    Element::new("div")
                        .class("filter-select-box")
                        .child(
                            Element::new("button")
                                .class("filter-select")
                                .flag("data-select")
                                .child(
                                    Element::new("div")
                                        .class("select-value")
                                        .flag("data-select-value")
                                        .text("Select category"),
                                )
                                .child(ion_icon("chevron-down")),
                        )
                        .child(Element::new("ul").class("select-list").children(select_items)),
                )
                .child(Element::new("ul").class("project-list").id(PROJECT_LIST)),
        )
        .child(project_modal())
}

fn project_modal() -> Element {
    let hidden = |el: Element| el.attr_with("style", "display: none");

    Element::new("div").class("project-modal").id(PROJECT_MODAL).child(
        Element::new("div")
            .class("project-modal-content")
            .child(
                Element::new("a")
                    .class("project-modal-close")
                    .id(PROJECT_MODAL_CLOSE)
                    .attr_with("href", "?page=portfolio")
                    .child(ion_icon("close-outline")),
            )
            .child(
                Element::new("img")
                    .id(MODAL_IMG)
                    .attr_with("src", "")
                    .attr_with("alt", "Project screenshot"),
            )
            .child(
                Element::new("div")
                    .class("project-modal-body")
                    .child(Element::new("h3").class("h3").id(MODAL_TITLE))
                    .child(Element::new("p").class("project-modal-desc").id(MODAL_DESC))
                    .child(hidden(
                        Element::new("div")
                            .class("project-modal-highlights")
                            .id(MODAL_HIGHLIGHTS)
                            .child(Element::new("h4").class("h4").text("Key Features"))
                            .child(Element::new("ul").id(MODAL_HIGHLIGHTS_LIST)),
                    ))
                    .child(hidden(
                        Element::new("div")
                            .class("project-modal-companion")
                            .id(MODAL_COMPANION)
                            .child(Element::new("span").id(MODAL_COMPANION_LABEL))
                            .child(Element::new("h4").class("h4").id(MODAL_COMPANION_NAME))
                            .child(Element::new("p").id(MODAL_COMPANION_DESC))
                            .child(Element::new("div").class("companion-links").id(MODAL_COMPANION_LINKS)),
                    ))
                    .child(Element::new("div").class("project-modal-tech").id(MODAL_TECH))
                    .child(Element::new("div").class("project-modal-links").id(MODAL_LINKS)),
            ),
    )
}

fn blog_page() -> Element {
    article("blog", "Blog").child(
        Element::new("section")
            .class("blog-posts")
            .child(Element::new("ul").class("blog-posts-list").id(BLOG_POSTS_LIST)),
    )
}

fn services_page() -> Element {
    article("services", "Services")
        .child(
            Element::new("ul")
                .class("biz-service-list")
                .id(BUSINESS_SERVICE_LIST),
        )
        .child(
            Element::new("a")
                .class("cta-btn")
                .id(BIZ_START_PROJECT)
                .attr_with("href", "?page=contact")
                .text("Start a Project"),
        )
}

fn contact_page() -> Element {
    let input = |kind: &str, name: &str, placeholder: &str| {
        Element::new("input")
            .class("form-input")
            .attr_with("type", kind)
            .attr_with("name", name)
            .attr_with("placeholder", placeholder)
            .flag("required")
            .flag("data-form-input")
    };

    article("contact", "Contact").child(
        Element::new("section").class("contact-form").child(
            Element::new("form")
                .class("form")
                .id(CONTACT_FORM)
                .attr_with("action", "/contact")
                .attr_with("method", "post")
                // The deep link opens beside the portfolio, not over it
                .attr_with("target", "_blank")
                .attr_with("rel", "noopener")
                .child(
                    Element::new("div")
                        .class("input-wrapper")
                        .child(input("text", "fullname", "Full name"))
                        .child(input("email", "email", "Email address")),
                )
                .child(
                    Element::new("textarea")
                        .class("form-input")
                        .attr_with("name", "message")
                        .attr_with("placeholder", "Your Message")
                        .flag("required")
                        .flag("data-form-input"),
                )
                .child(
                    Element::new("button")
                        .class("form-btn")
                        .attr_with("type", "submit")
                        .flag("data-form-btn")
                        .child(ion_icon("paper-plane"))
                        .child(Element::new("span").text("Send Message")),
                ),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    #[test]
    fn test_shell_has_every_section_container() {
        let doc = build_shell(&SiteProfile::default());
        for id in [
            ABOUT_TEXT,
            STATS_SECTION,
            SERVICE_LIST,
            TESTIMONIALS_LIST,
            EXPERIENCE_LIST,
            EDUCATION_LIST,
            TECHNICAL_SKILLS_LIST,
            TOOLS_SKILLS_LIST,
            PROJECT_LIST,
            BLOG_POSTS_LIST,
            BUSINESS_SERVICE_LIST,
            PROJECT_MODAL,
            TYPING_TITLE,
        ] {
            assert!(doc.exists(&Selector::Id(id)), "missing #{id}");
        }
    }

    #[test]
    fn test_exactly_one_page_and_nav_link_active() {
        let doc = build_shell(&SiteProfile::default());
        let active_pages: Vec<_> = doc
            .query_all(&Selector::Attr("data-page"))
            .into_iter()
            .filter(|p| p.has_class("active"))
            .collect();
        assert_eq!(active_pages.len(), 1);
        assert_eq!(active_pages[0].attr("data-page"), Some("about"));

        let active_links = doc
            .query_all(&Selector::Attr("data-nav-link"))
            .into_iter()
            .filter(|l| l.has_class("active"))
            .count();
        assert_eq!(active_links, 1);
    }

    #[test]
    fn test_contact_form_posts_to_a_new_browsing_context() {
        let doc = build_shell(&SiteProfile::default());
        let form = doc.query(&Selector::Id(CONTACT_FORM)).unwrap();
        assert_eq!(form.attr("action"), Some("/contact"));
        assert_eq!(form.attr("method"), Some("post"));
        assert_eq!(form.attr("target"), Some("_blank"));
        assert_eq!(form.attr("rel"), Some("noopener"));
    }

    #[test]
    fn test_wildcard_filter_added_when_missing() {
        let profile = SiteProfile {
            filter_categories: vec!["Mobile".into(), "Web".into()],
            ..Default::default()
        };
        let doc = build_shell(&profile);
        let values: Vec<_> = doc
            .query_all(&Selector::Attr("data-filter-btn"))
            .iter()
            .map(|b| b.attr("data-filter-value").unwrap().to_string())
            .collect();
        assert_eq!(values, vec!["all", "mobile", "web"]);
    }
}
