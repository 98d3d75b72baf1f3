mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::core::{
    contact::{ContactForm, ContactSession, Field, SubmissionStatus, ValidationError},
    data::{PortfolioData, Project, Skill, SkillCategory},
    nav::{ActiveSection, MemoryAddressBar, SectionId, SectionLayout, VisibilityEntry},
};
