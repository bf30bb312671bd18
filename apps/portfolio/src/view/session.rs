//! One page view: the document, the project records behind it, the selected
//! filter, every bound listener and the animation timeline.
//!
//! All interaction goes through `dispatch`; all deferred work goes through
//! `advance`. Nothing here is shared between requests.

use std::time::Duration;

use tracing::debug;

use crate::config::SiteProfile;
use crate::content::models::{About, Project};
use crate::content::SiteContent;
use crate::dom::Document;
use crate::render::about::render_about;
use crate::render::blog::render_blog_posts;
use crate::render::projects::render_projects;
use crate::render::resume::render_resume;
use crate::render::services::render_business_services;
use crate::view::animations::{self, StatRun};
use crate::view::events::{Action, Disposer, Listeners, UiEvent};
use crate::view::filter::{self, FilterState};
use crate::view::keyboard;
use crate::view::navigator::{self, PageAnimation};
use crate::view::project_modal;
use crate::view::shell::build_shell;
use crate::view::testimonials;
use crate::view::theme::{self, PreferenceStore, Theme};
use crate::view::timeline::{TimerId, Timeline};
use crate::view::typing::{self, Typewriter};

#[derive(Debug, Clone, PartialEq)]
enum Task {
    Reveal,
    SkillBars,
    FillSkillBars,
    Stats,
    StatTick(StatRun),
    TypeTick,
}

/// Disposers for binders that re-run whenever their section re-renders.
#[derive(Debug, Default)]
struct SectionBindings {
    projects: Option<Disposer>,
    filter: Option<Disposer>,
    testimonials: Option<Disposer>,
}

pub struct ViewSession {
    doc: Document,
    projects: Vec<Project>,
    filter: FilterState,
    listeners: Listeners,
    sections: SectionBindings,
    /// Bound once at boot and kept for the life of the session.
    page_bindings: Vec<Disposer>,
    timeline: Timeline<Task>,
    store: Box<dyn PreferenceStore>,
    typewriter: Option<Typewriter>,
    typing_timer: Option<TimerId>,
}

impl ViewSession {
    /// Builds the page and wires it up, in page-load order: theme first so the
    /// first paint is already themed, then content, then interaction.
    pub fn boot(profile: &SiteProfile, content: SiteContent, store: Box<dyn PreferenceStore>) -> Self {
        let mut doc = build_shell(profile);
        theme::init_theme(&mut doc, store.as_ref());

        let mut session = Self {
            doc,
            projects: Vec::new(),
            filter: FilterState::default(),
            listeners: Listeners::new(),
            sections: SectionBindings::default(),
            page_bindings: Vec::new(),
            timeline: Timeline::new(),
            store,
            typewriter: Typewriter::new(&profile.typing_roles),
            typing_timer: None,
        };

        session.render_about(content.about.as_ref());
        render_resume(&mut session.doc, content.resume.as_ref());
        session.render_projects(content.projects);
        render_blog_posts(&mut session.doc, content.blog.as_deref());
        render_business_services(&mut session.doc, content.services.as_deref());

        let doc = &session.doc;
        let listeners = &mut session.listeners;
        session.page_bindings = vec![
            keyboard::bind_keyboard(listeners),
            navigator::bind_navigation(doc, listeners),
            navigator::bind_sidebar(doc, listeners),
            navigator::bind_ctas(doc, listeners),
            theme::bind_theme_toggle(doc, listeners),
        ];

        animations::reveal_pass(&mut session.doc);
        session.start_typing();
        session.animate_stats();

        debug!(
            page_bindings = session.page_bindings.len(),
            listeners = session.listeners.len(),
            projects = session.projects.len(),
            "View session booted"
        );
        session
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn theme(&self) -> Theme {
        theme::current_theme(&self.doc)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Re-renders the project grid and re-binds its links and the filter,
    /// releasing the previous bindings first. The current filter is re-applied
    /// to the new cards.
    pub fn render_projects(&mut self, projects: Option<Vec<Project>>) {
        let Some(projects) = projects else {
            return;
        };
        if !render_projects(&mut self.doc, Some(&projects)) {
            return;
        }
        self.projects = projects;

        if let Some(old) = self.sections.projects.take() {
            self.listeners.dispose(old);
        }
        if let Some(old) = self.sections.filter.take() {
            self.listeners.dispose(old);
        }
        self.sections.projects = Some(project_modal::bind_project_modal(&self.doc, &mut self.listeners));
        self.sections.filter = Some(filter::bind_portfolio_filter(&self.doc, &mut self.listeners));

        if self.filter.selected() != crate::view::shell::WILDCARD_FILTER {
            filter::apply_filter(&mut self.doc, self.filter.selected());
        }
    }

    pub fn render_about(&mut self, about: Option<&About>) {
        let rendered = render_about(&mut self.doc, about);
        if !rendered.any {
            debug!("No about content rendered");
        }
        if rendered.testimonials {
            if let Some(old) = self.sections.testimonials.take() {
                self.listeners.dispose(old);
            }
            self.sections.testimonials =
                Some(testimonials::bind_testimonials_modal(&self.doc, &mut self.listeners));
        }
    }

    /// Runs every action bound to `event`, in binding order.
    pub fn dispatch(&mut self, event: UiEvent) {
        let actions = self.listeners.actions_for(&event);
        if actions.is_empty() {
            debug!(?event, "No listener for event");
        }
        for action in actions {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Navigate(label) => self.navigate(&label),
            Action::Filter(value) => self.select_filter(&value),
            Action::SelectFilter(value) => {
                filter::toggle_select(&mut self.doc);
                self.select_filter(&value);
            }
            Action::ToggleSelect => filter::toggle_select(&mut self.doc),
            Action::OpenProject(id) => {
                project_modal::open_project(&mut self.doc, &self.projects, &id);
            }
            Action::CloseProjectModal => project_modal::close_project_modal(&mut self.doc),
            Action::OpenTestimonial(index) => testimonials::open_testimonial(&mut self.doc, index),
            Action::ToggleTestimonials => testimonials::toggle_testimonials(&mut self.doc),
            Action::DismissModal => keyboard::dismiss_modal(&mut self.doc),
            Action::ToggleSidebar => navigator::toggle_sidebar(&mut self.doc),
            Action::ToggleTheme => {
                theme::toggle_theme(&mut self.doc, self.store.as_mut());
            }
        }
    }

    fn select_filter(&mut self, value: &str) {
        self.filter.select(value);
        let selected = self.filter.selected();
        filter::apply_filter(&mut self.doc, selected);
        debug!(
            filter = selected,
            visible = filter::visible_project_ids(&self.projects, selected).len(),
            "Portfolio filtered"
        );
    }

    fn navigate(&mut self, label: &str) {
        let Some(page) = navigator::activate_page(&mut self.doc, label) else {
            return;
        };
        self.timeline.schedule(animations::REVEAL_DELAY, Task::Reveal);
        match navigator::page_animation(&page) {
            Some(PageAnimation::SkillBars) => {
                self.timeline
                    .schedule(animations::SECTION_ANIMATION_DELAY, Task::SkillBars);
            }
            Some(PageAnimation::Stats) => {
                self.timeline
                    .schedule(animations::SECTION_ANIMATION_DELAY, Task::Stats);
            }
            None => {}
        }
    }

    /// Moves the virtual clock forward by `by`, running everything that falls
    /// due on the way (including work scheduled by those tasks).
    pub fn advance(&mut self, by: Duration) {
        let until = self.timeline.now() + by;
        while let Some((id, task)) = self.timeline.pop_due(until) {
            self.run(id, task);
        }
        self.timeline.settle_at(until);
    }

    fn run(&mut self, id: TimerId, task: Task) {
        match task {
            Task::Reveal => {
                animations::reveal_pass(&mut self.doc);
            }
            Task::SkillBars => {
                animations::reset_skill_bars(&mut self.doc);
                self.timeline
                    .schedule(animations::SKILL_FILL_DELAY, Task::FillSkillBars);
            }
            Task::FillSkillBars => animations::fill_skill_bars(&mut self.doc),
            Task::Stats => self.animate_stats(),
            Task::StatTick(run) => {
                if let Some(next) = animations::stat_tick(&mut self.doc, run) {
                    self.timeline.schedule(next.step, Task::StatTick(next));
                }
            }
            Task::TypeTick => {
                if self.typing_timer != Some(id) {
                    return;
                }
                self.typing_timer = None;
                if let Some(typewriter) = self.typewriter.as_mut() {
                    let delay = typewriter.tick();
                    typewriter.write(&mut self.doc);
                    self.typing_timer = Some(self.timeline.schedule(delay, Task::TypeTick));
                }
            }
        }
    }

    fn animate_stats(&mut self) {
        for run in animations::start_stats(&mut self.doc) {
            self.timeline.schedule(run.step, Task::StatTick(run));
        }
    }

    fn start_typing(&mut self) {
        if self.typewriter.is_some() && self.typing_timer.is_none() {
            self.typing_timer = Some(self.timeline.schedule(typing::INITIAL_DELAY, Task::TypeTick));
        }
    }

    /// Cancels the pending typing tick; the title keeps whatever it shows now.
    pub fn stop_typing(&mut self) {
        if let Some(id) = self.typing_timer.take() {
            self.timeline.cancel(id);
        }
    }

    pub fn to_html(&self) -> String {
        self.doc.to_html()
    }
}
