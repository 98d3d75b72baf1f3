mod profile;
mod project;
mod skill;

use std::{collections::HashSet, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub use profile::{Education, Experience, Profile, Service, SocialLink, current_year};
pub use project::Project;
pub use skill::{EXPERT_LEVEL, MAX_LEVEL, Skill, SkillCategory};

/// Dataset shipped with the crate.
const EMBEDDED_DATA: &str = include_str!("../../../data/portfolio.toml");

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to parse portfolio data: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
    #[error("duplicate skill category id {0:?}")]
    DuplicateCategory(String),
    #[error("skill {skill:?} has level {level}, expected at most 100")]
    LevelOutOfRange { skill: String, level: u8 },
}

/// Everything the page renders, loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
}

impl PortfolioData {
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_toml_str(EMBEDDED_DATA)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, DataError> {
        let data: PortfolioData = toml::from_str(source)?;
        data.check()?;
        Ok(data)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio data {:?}", path))?;
        let data = Self::from_toml_str(&source)
            .with_context(|| format!("Invalid portfolio data in {:?}", path))?;
        tracing::debug!(
            projects = data.projects.len(),
            categories = data.skill_categories.len(),
            "loaded portfolio data from {:?}",
            path
        );
        Ok(data)
    }

    fn check(&self) -> Result<(), DataError> {
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(DataError::DuplicateProjectId(project.id));
            }
        }

        let mut categories = HashSet::new();
        for category in &self.skill_categories {
            if !categories.insert(category.id.as_str()) {
                return Err(DataError::DuplicateCategory(category.id.clone()));
            }
            if let Some(skill) = category.skills.iter().find(|s| s.level > MAX_LEVEL) {
                return Err(DataError::LevelOutOfRange {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }
}
