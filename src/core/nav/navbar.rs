use super::SectionId;

/// Window width at which the mobile menu gives way to the full navbar.
pub const MOBILE_BREAKPOINT: f32 = 768.0;
/// Scroll distance after which the navbar switches to its solid style.
pub const SCROLLED_OFFSET: f32 = 20.0;

/// Presentation state of the navigation bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarState {
    menu_open: bool,
    scrolled: bool,
    progress: f32,
    scrolling_to_section: bool,
}

impl NavbarState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Page scroll progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn scrolling_to_section(&self) -> bool {
        self.scrolling_to_section
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A nav link was clicked: close the menu and hold the scroll lock until
    /// [`release_scroll_lock`](Self::release_scroll_lock).
    pub fn nav_clicked(&mut self, section: SectionId) -> SectionId {
        self.scrolling_to_section = true;
        self.menu_open = false;
        section
    }

    pub fn release_scroll_lock(&mut self) {
        self.scrolling_to_section = false;
    }

    pub fn escape_pressed(&mut self) {
        self.menu_open = false;
    }

    pub fn resized(&mut self, width: f32) {
        if width >= MOBILE_BREAKPOINT {
            self.menu_open = false;
        }
    }

    pub fn scrolled_to(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        self.scrolled = offset > SCROLLED_OFFSET;
        let max_scroll = content_height - viewport_height;
        self.progress = if max_scroll > 0.0 {
            (offset / max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}
