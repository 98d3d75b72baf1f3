use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    config::Config,
    core::{
        data::PortfolioData,
        nav::{
            ActiveSection, MemoryAddressBar, NavbarState, Observation, ScrollNavigator,
            SectionId, SectionLayout, SectionTracker,
        },
        theme::Theme,
    },
};

/// Fixed section heights; the page is a plain vertical stack of these.
pub const SECTION_HEIGHTS: [(SectionId, f32); 5] = [
    (SectionId::Home, 760.0),
    (SectionId::About, 1100.0),
    (SectionId::Skills, 1300.0),
    (SectionId::Projects, 1200.0),
    (SectionId::Contact, 900.0),
];

const INITIAL_VIEWPORT_HEIGHT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub data: Arc<PortfolioData>,
    pub theme: Theme,
    pub phase: Phase,
    pub tracker: SectionTracker<MemoryAddressBar>,
    pub navigator: ScrollNavigator<SectionLayout>,
    pub observation: Option<Observation>,
    pub navbar: NavbarState,
}

impl AppState {
    pub fn new(config: Config, data: Arc<PortfolioData>, location: &str) -> Self {
        let active = ActiveSection::default();
        let tracker = SectionTracker::new(active.clone(), MemoryAddressBar::new(location))
            .with_tie_break(config.tracking.tie_break)
            .with_deep_link_delay(config.tracking.deep_link_delay());
        let layout = SectionLayout::stacked(&SECTION_HEIGHTS, INITIAL_VIEWPORT_HEIGHT);
        let navigator = ScrollNavigator::new(SectionId::ALL, layout, active);

        Self {
            theme: config.ui.theme,
            config,
            data,
            phase: Phase::Loading,
            tracker,
            navigator,
            observation: None,
            navbar: NavbarState::default(),
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active().get()
    }

    /// Leave the splash screen and start following the viewport.
    pub fn start_tracking(&mut self) {
        self.phase = Phase::Ready;
        let threshold = self.config.tracking.visibility_threshold;
        match self.tracker.observe(&SectionId::ALL, threshold, |section| {
            debug!(%section, "section in view")
        }) {
            Ok(observation) => self.observation = Some(observation),
            Err(err) => warn!(error = %err, "section tracking disabled"),
        }
    }

    /// Feed a scroll position to the navbar and, unless a nav click is
    /// still scrolling, to the section tracker.
    pub fn viewport_scrolled(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        self.navbar
            .scrolled_to(offset, content_height, viewport_height);
        let threshold = self.config.tracking.visibility_threshold;
        let layout = self.navigator.viewport_mut();
        layout.set_viewport(offset, viewport_height);
        let changes = layout.visibility_changes(threshold);
        if self.navbar.scrolling_to_section() {
            debug!(changes = changes.len(), "scroll lock held, skipping visibility report");
            return;
        }
        self.tracker.report(&changes);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
