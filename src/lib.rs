pub mod config;
pub mod core;
pub mod logging;

pub use config::Config;
pub use core::contact::{ContactForm, ContactSession, SubmissionStatus, Transport, validate};
pub use core::data::{PortfolioData, Project, Skill, SkillCategory};
pub use core::nav::{ActiveSection, ScrollNavigator, SectionId, SectionTracker};
pub use core::theme::Theme;

#[cfg(feature = "gui")]
pub mod gui;
