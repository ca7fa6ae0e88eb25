//! Headless page session.
//!
//! A [`PageSession`] loads a built page, finds the elements the interactive
//! behaviour hangs off (nav links, sections, reveal targets, project cards,
//! filter buttons, the contact form) and then reacts to events fed to it one
//! at a time: clicks, intersection reports, form submits. Delayed effects are
//! scheduled on the tokio runtime the session was created in.
//!
//! # Example
//!
//! ```no_run
//! use folio::{PageSession, Portfolio, SessionConfig, Skeleton};
//!
//! # async fn run() -> folio::Result<()> {
//! let html = folio::site::assemble(&Portfolio::sample(), Skeleton::builtin(), 2026)?;
//! let session = PageSession::load(&html, SessionConfig::default())?;
//! session.select_filter("AI");
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use scraper::{ElementRef, Html};

use crate::interact::filter::{ProjectCard, HIDE_DELAY_MS, SHOW_DELAY_MS};
use crate::interact::reveal::{REVEALED_CLASS, REVEAL_CLASSES};
use crate::interact::{
    nav, ContactForm, Field, FieldErrors, FormInput, MenuState, MobileNav, NavHighlighter, PageLayout,
    ProjectFilter, RevealObserver, RevealOptions, SubmitOutcome, TransitionScheduler,
};
use crate::skeleton::selector;
use crate::{Error, Result};

/// Ids a page must have for a session to drive it
pub const SESSION_CONTAINERS: &[&str] = &[
    "header",
    "nav",
    "navToggle",
    "backToTop",
    "contactForm",
    "name",
    "email",
    "message",
    "nameError",
    "emailError",
    "messageError",
    "formSuccess",
];

const FORM_SUCCESS_KEY: &str = "formSuccess";

/// Timing and observation parameters of a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Delay before a card selected by a filter is displayed again
    pub show_delay: Duration,
    /// Delay before a card rejected by a filter leaves the layout
    pub hide_delay: Duration,
    /// How long the form success indicator stays visible
    pub success_visible_for: Duration,
    pub reveal: RevealOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(SHOW_DELAY_MS),
            hide_delay: Duration::from_millis(HIDE_DELAY_MS),
            success_visible_for: Duration::from_secs(5),
            reveal: RevealOptions::default(),
        }
    }
}

/// An element tagged for reveal, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub tag: String,
    pub id: Option<String>,
    pub class: String,
}

struct PageState {
    nav: NavHighlighter,
    menu: MobileNav,
    reveal: RevealObserver,
    form: ContactForm,
    filter: ProjectFilter,
    layout: PageLayout,
}

pub struct PageSession {
    state: Arc<Mutex<PageState>>,
    scheduler: TransitionScheduler,
    config: SessionConfig,
    reveal_targets: Vec<RevealTarget>,
}

impl PageSession {
    /// Load a page. Must be called from within a tokio runtime.
    pub fn load(html: &str, config: SessionConfig) -> Result<Self> {
        let scheduler = TransitionScheduler::current()?;
        let document = Html::parse_document(html);

        for id in SESSION_CONTAINERS {
            let sel = selector(&format!(r#"[id="{}"]"#, id))?;
            if document.select(&sel).next().is_none() {
                return Err(Error::MissingContainer(id.to_string()));
            }
        }

        let link_sel = selector(".nav__link")?;
        let links: Vec<ElementRef> = document.select(&link_sel).collect();
        let active_link = links.iter().position(|l| has_class(l, "active"));
        let hrefs = links
            .iter()
            .map(|l| l.value().attr("href").unwrap_or_default().to_string())
            .collect();

        let section_sel = selector("section[id]")?;
        let sections = document
            .select(&section_sel)
            .filter_map(|s| s.value().attr("id"))
            .map(str::to_string)
            .collect();

        let reveal_sel = selector(
            &REVEAL_CLASSES
                .iter()
                .map(|c| format!(".{}", c))
                .collect::<Vec<_>>()
                .join(", "),
        )?;
        let reveal_targets: Vec<RevealTarget> = document
            .select(&reveal_sel)
            .map(|el| RevealTarget {
                tag: el.value().name().to_string(),
                id: el.value().attr("id").map(str::to_string),
                class: el.value().attr("class").unwrap_or_default().to_string(),
            })
            .collect();
        let mut reveal = RevealObserver::new(config.reveal);
        for index in 0..reveal_targets.len() {
            reveal.observe(index);
        }

        let card_sel = selector(".project-card")?;
        let categories = document
            .select(&card_sel)
            .map(|c| c.value().attr("data-category").unwrap_or_default().to_string())
            .collect();

        let button_sel = selector(".projects__filter")?;
        let buttons: Vec<ElementRef> = document.select(&button_sel).collect();
        let active_button = buttons.iter().position(|b| has_class(b, "active"));
        let filters = buttons
            .iter()
            .map(|b| b.value().attr("data-filter").unwrap_or_default().to_string())
            .collect();

        let state = PageState {
            nav: NavHighlighter::new(hrefs, sections).with_active(active_link),
            menu: MobileNav::new(),
            reveal,
            form: ContactForm::new(),
            filter: ProjectFilter::new(filters, categories).with_active(active_button),
            layout: PageLayout::default(),
        };
        log::debug!(
            "session loaded: {} nav links, {} reveal targets, {} project cards",
            state.nav.links().len(),
            reveal_targets.len(),
            state.filter.cards().len()
        );

        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            scheduler,
            config,
            reveal_targets,
        })
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        lock(&self.state)
    }

    // --- Navigation ---

    /// Provide the page geometry used for smooth-scroll targets.
    pub fn set_layout(&self, layout: PageLayout) {
        self.state().layout = layout;
    }

    /// Click on a nav link. Closes the mobile menu and returns the scroll
    /// offset for the linked section, if the page has it.
    pub fn click_nav_link(&self, href: &str) -> Option<i64> {
        let mut state = self.state();
        state.menu.link_clicked();
        nav::scroll_target(href, &state.layout)
    }

    /// Click on the back-to-top control: scroll offset 0.
    pub fn click_back_to_top(&self) -> i64 {
        0
    }

    /// Intersection-enter report for a section crossing the highlight band.
    /// Returns the href of the highlighted nav link afterwards.
    pub fn section_entered(&self, section_id: &str) -> Option<String> {
        self.state().nav.section_entered(section_id).map(str::to_string)
    }

    /// Scroll the page so that `sections` (id, top relative to the viewport,
    /// height) are where they are. Every section crossing the highlight band
    /// counts as entered, in the given order. Returns the highlighted link.
    pub fn scroll_viewport(&self, viewport_height: f64, sections: &[(&str, f64, f64)]) -> Option<String> {
        let mut state = self.state();
        for (id, top, height) in sections {
            if NavHighlighter::crosses_band(*top, *height, viewport_height) {
                state.nav.section_entered(id);
            }
        }
        state.nav.active_link().map(str::to_string)
    }

    pub fn active_nav_link(&self) -> Option<String> {
        self.state().nav.active_link().map(str::to_string)
    }

    // --- Mobile menu ---

    pub fn click_menu_toggle(&self) -> MenuState {
        self.state().menu.toggle()
    }

    /// Click anywhere on the document. The open menu closes only when the
    /// click is outside both the nav region and the toggle.
    pub fn click_document(&self, inside_nav: bool, inside_toggle: bool) {
        self.state().menu.document_clicked(inside_nav, inside_toggle);
    }

    pub fn click_outside(&self) {
        self.click_document(false, false);
    }

    pub fn menu_state(&self) -> MenuState {
        self.state().menu.state()
    }

    pub fn body_classes(&self) -> Vec<&'static str> {
        self.state().menu.classes().2.to_vec()
    }

    // --- Reveal ---

    pub fn reveal_targets(&self) -> &[RevealTarget] {
        &self.reveal_targets
    }

    /// Index of the reveal target with the given id
    pub fn reveal_index(&self, id: &str) -> Option<usize> {
        self.reveal_targets
            .iter()
            .position(|t| t.id.as_deref() == Some(id))
    }

    /// Intersection report for a reveal target. Returns `true` when this
    /// report revealed it.
    pub fn report_reveal(&self, index: usize, ratio: f64) -> bool {
        self.state().reveal.report(index, ratio)
    }

    /// Intersection report from element geometry: `top` relative to the
    /// viewport, the bottom margin of [`RevealOptions`] applied.
    pub fn report_reveal_geometry(&self, index: usize, top: f64, height: f64, viewport_height: f64) -> bool {
        self.state()
            .reveal
            .report_geometry(index, top, height, viewport_height)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.state().reveal.is_revealed(index)
    }

    pub fn revealed_count(&self) -> usize {
        self.state().reveal.revealed_count()
    }

    /// Class attribute of a reveal target as it currently stands
    pub fn reveal_classes(&self, index: usize) -> Option<String> {
        let target = self.reveal_targets.get(index)?;
        if self.is_revealed(index) {
            Some(format!("{} {}", target.class, REVEALED_CLASS))
        } else {
            Some(target.class.clone())
        }
    }

    pub fn is_reveal_observed(&self, index: usize) -> bool {
        self.state().reveal.is_observed(index)
    }

    // --- Contact form ---

    /// Type values into the form fields.
    pub fn fill_form(&self, input: FormInput) {
        self.state().form.set_values(input);
    }

    /// Submit the form with its current values. An accepted submission shows
    /// the success indicator, which hides itself after
    /// [`SessionConfig::success_visible_for`].
    pub fn submit_form(&self) -> SubmitOutcome {
        let outcome = self.state().form.submit();
        match &outcome {
            SubmitOutcome::Accepted(input) => {
                log::info!(
                    "contact form submitted: name={:?} email={:?} message={} chars",
                    input.name,
                    input.email,
                    input.message.chars().count()
                );
                let state = Arc::clone(&self.state);
                self.scheduler
                    .schedule(FORM_SUCCESS_KEY, self.config.success_visible_for, move || {
                        lock(&state).form.hide_success();
                    });
            }
            SubmitOutcome::Rejected(errors) => {
                log::debug!("contact form rejected: {} invalid field(s)", errors.len());
                self.scheduler.cancel(FORM_SUCCESS_KEY);
            }
        }
        outcome
    }

    pub fn form_values(&self) -> FormInput {
        self.state().form.values().clone()
    }

    pub fn form_errors(&self) -> FieldErrors {
        self.state().form.errors().clone()
    }

    /// Text of an inline error element (`nameError`, `emailError`,
    /// `messageError`); empty when its field is valid.
    pub fn form_error_text(&self, element_id: &str) -> Option<&'static str> {
        let field = Field::ALL
            .into_iter()
            .find(|f| f.error_element() == element_id)?;
        Some(self.state().form.error(field).unwrap_or_default())
    }

    pub fn success_visible(&self) -> bool {
        self.state().form.success_visible()
    }

    // --- Project filter ---

    /// Click the filter button with value `filter`. Cards fade out at once;
    /// matching cards come back after the show delay, the rest leave the
    /// layout after the hide delay. A later selection supersedes any
    /// transition still pending for a card.
    pub fn select_filter(&self, filter: &str) {
        let plan = self.state().filter.select(filter);
        for (index, shown) in plan.into_iter().enumerate() {
            let state = Arc::clone(&self.state);
            let key = format!("project-card:{}", index);
            if shown {
                self.scheduler.schedule(key, self.config.show_delay, move || {
                    lock(&state).filter.finish_show(index);
                });
            } else {
                self.scheduler.schedule(key, self.config.hide_delay, move || {
                    lock(&state).filter.finish_hide(index);
                });
            }
        }
    }

    pub fn active_filter(&self) -> Option<String> {
        self.state().filter.active().map(str::to_string)
    }

    pub fn project_cards(&self) -> Vec<ProjectCard> {
        self.state().filter.cards().to_vec()
    }

    /// Cards currently taking part in the layout
    pub fn displayed_card_count(&self) -> usize {
        self.state()
            .filter
            .cards()
            .iter()
            .filter(|c| c.style.is_displayed())
            .count()
    }

    /// Values of the page's filter buttons, in document order
    pub fn filter_values(&self) -> Vec<String> {
        self.state().filter.buttons().to_vec()
    }

    /// Delayed effects that have not run yet
    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending()
    }
}

fn lock(state: &Mutex<PageState>) -> MutexGuard<'_, PageState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}
