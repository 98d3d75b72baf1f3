//! Section navigation: which part of the page is in view, and how to get
//! to another part of it.
//!
//! [`SectionTracker`] follows visibility reports from the runtime and
//! [`ScrollNavigator`] handles explicit navigation requests. Both write the
//! same [`ActiveSection`] value.

mod address;
mod navbar;
mod navigator;
mod tracker;
mod viewport;

use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

pub use address::{AddressBar, MemoryAddressBar};
pub use navbar::{MOBILE_BREAKPOINT, NavbarState, SCROLLED_OFFSET};
pub use navigator::ScrollNavigator;
pub use tracker::{
    DEFAULT_THRESHOLD, DeepLink, Observation, ObserveError, SectionTracker, TieBreak,
    VisibilityEntry,
};
pub use viewport::{ScrollRequest, SectionBox, SectionLayout, Viewport, visible_ratio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section {0:?}")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About Me",
            SectionId::Skills => "Expertise",
            SectionId::Projects => "Portfolio",
            SectionId::Contact => "Get in Touch",
        }
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Parses `#about` or `about`. Anything else is not a section.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        fragment.strip_prefix('#').unwrap_or(fragment).parse().ok()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// The single "in view" section, shared by the tracker and the navigator.
///
/// Cloning yields another handle to the same value. Presentation code can
/// [`subscribe`](ActiveSection::subscribe) to be woken on every change.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    tx: Arc<watch::Sender<SectionId>>,
}

impl ActiveSection {
    pub fn new(initial: SectionId) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> SectionId {
        *self.tx.borrow()
    }

    /// Returns whether the value changed.
    pub fn set(&self, section: SectionId) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == section {
                false
            } else {
                *current = section;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.tx.subscribe()
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(SectionId::Home)
    }
}
