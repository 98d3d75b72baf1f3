use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{ActiveSection, AddressBar, ScrollNavigator, SectionId, Viewport};

/// Share of a section that must be on screen before it counts as in view.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// One visibility notification for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub section: SectionId,
    /// Visible fraction of the section's height, `0.0..=1.0`.
    pub ratio: f32,
}

/// How to pick a winner when several sections cross the threshold in the
/// same notification batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The last qualifying entry in the batch wins.
    #[default]
    LastObserved,
    /// The most visible qualifying entry wins; the earliest on equal ratio.
    GreatestRatio,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserveError {
    #[error("visibility threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),
    #[error("no sections to observe")]
    NoSections,
}

/// Disposer for an active observation. Dropping it cancels observation too.
#[must_use = "dropping an Observation cancels it immediately"]
#[derive(Debug)]
pub struct Observation {
    token: CancellationToken,
}

impl Observation {
    pub fn dispose(self) {}

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Initial scroll requested by the address fragment on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepLink {
    pub section: SectionId,
    pub delay: Duration,
}

impl DeepLink {
    /// Wait for layout to settle, then navigate. Returns whether the
    /// navigator accepted the target.
    pub async fn apply<V: Viewport>(self, navigator: &mut ScrollNavigator<V>) -> bool {
        tokio::time::sleep(self.delay).await;
        navigator.navigate_to(self.section)
    }
}

type ChangeCallback = Box<dyn FnMut(SectionId) + Send>;

struct Registration {
    sections: Vec<SectionId>,
    threshold: f32,
    on_change: ChangeCallback,
    token: CancellationToken,
}

/// Keeps the active section and the address fragment in step with what
/// the runtime reports as visible.
pub struct SectionTracker<A: AddressBar> {
    active: ActiveSection,
    address: A,
    tie_break: TieBreak,
    deep_link_delay: Duration,
    registration: Option<Registration>,
}

impl<A: AddressBar> std::fmt::Debug for SectionTracker<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionTracker")
            .field("active", &self.active.get())
            .field("tie_break", &self.tie_break)
            .field(
                "observing",
                &self.registration.as_ref().map(|r| r.sections.clone()),
            )
            .finish()
    }
}

impl<A: AddressBar> SectionTracker<A> {
    pub fn new(active: ActiveSection, address: A) -> Self {
        Self {
            active,
            address,
            tie_break: TieBreak::default(),
            deep_link_delay: Duration::from_millis(100),
            registration: None,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_deep_link_delay(mut self, delay: Duration) -> Self {
        self.deep_link_delay = delay;
        self
    }

    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    /// Start observing `sections`. Any earlier observation is cancelled.
    ///
    /// `on_change` runs whenever a report moves the active section.
    pub fn observe<F>(
        &mut self,
        sections: &[SectionId],
        threshold: f32,
        on_change: F,
    ) -> Result<Observation, ObserveError>
    where
        F: FnMut(SectionId) + Send + 'static,
    {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ObserveError::InvalidThreshold(threshold));
        }
        if sections.is_empty() {
            return Err(ObserveError::NoSections);
        }
        if let Some(previous) = self.registration.take() {
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        self.registration = Some(Registration {
            sections: sections.to_vec(),
            threshold,
            on_change: Box::new(on_change),
            token: token.clone(),
        });
        debug!(?sections, threshold, "observing sections");
        Ok(Observation { token })
    }

    pub fn is_observing(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|r| !r.token.is_cancelled())
    }

    /// Feed one batch of visibility notifications. Returns the section that
    /// became active, if any entry qualified.
    pub fn report(&mut self, entries: &[VisibilityEntry]) -> Option<SectionId> {
        if self
            .registration
            .as_ref()
            .is_some_and(|r| r.token.is_cancelled())
        {
            debug!("observation disposed, dropping registration");
            self.registration = None;
        }
        let registration = self.registration.as_mut()?;

        let qualifying = entries.iter().filter(|entry| {
            registration.sections.contains(&entry.section)
                && entry.ratio > 0.0
                && entry.ratio >= registration.threshold
        });
        let winner = match self.tie_break {
            TieBreak::LastObserved => qualifying.last(),
            TieBreak::GreatestRatio => qualifying.fold(None, |best: Option<&VisibilityEntry>, entry| {
                match best {
                    Some(b) if b.ratio >= entry.ratio => Some(b),
                    _ => Some(entry),
                }
            }),
        }?
        .section;

        if self.active.set(winner) {
            debug!(section = %winner, "active section changed");
            (registration.on_change)(winner);
        }
        self.address.replace_fragment(winner.as_str());
        Some(winner)
    }

    /// Section named by the address fragment on load, scheduled after the
    /// configured settle delay.
    pub fn deep_link(&self) -> Option<DeepLink> {
        let fragment = self.address.fragment()?;
        let section = SectionId::from_fragment(fragment);
        if section.is_none() {
            debug!(fragment, "ignoring unrecognized fragment");
        }
        section.map(|section| DeepLink {
            section,
            delay: self.deep_link_delay,
        })
    }

    /// Cancel observation without holding the disposer, e.g. on teardown.
    pub fn teardown(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.token.cancel();
            debug!("section observation torn down");
        }
    }
}

impl<A: AddressBar> Drop for SectionTracker<A> {
    fn drop(&mut self) {
        self.teardown();
    }
}
