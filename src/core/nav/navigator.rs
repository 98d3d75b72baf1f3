use tracing::debug;

use super::{ActiveSection, SectionId, Viewport};

/// Explicit navigation requests from nav links and buttons.
#[derive(Debug)]
pub struct ScrollNavigator<V: Viewport> {
    sections: Vec<SectionId>,
    viewport: V,
    active: ActiveSection,
}

impl<V: Viewport> ScrollNavigator<V> {
    pub fn new(
        sections: impl IntoIterator<Item = SectionId>,
        viewport: V,
        active: ActiveSection,
    ) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            viewport,
            active,
        }
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.sections.contains(&section)
    }

    /// Scroll to `section` and mark it active right away, ahead of any
    /// visibility report. Unregistered or unmounted targets are ignored.
    pub fn navigate_to(&mut self, section: SectionId) -> bool {
        if !self.is_registered(section) || !self.viewport.is_mounted(section) {
            debug!(%section, "navigation target not available, ignoring");
            return false;
        }
        self.viewport.scroll_into_view(section);
        self.active.set(section);
        true
    }

    /// Like [`navigate_to`](Self::navigate_to) for a raw `#id` or `id`.
    pub fn navigate_to_fragment(&mut self, fragment: &str) -> bool {
        match SectionId::from_fragment(fragment) {
            Some(section) => self.navigate_to(section),
            None => {
                debug!(fragment, "unknown navigation target, ignoring");
                false
            }
        }
    }

    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}
