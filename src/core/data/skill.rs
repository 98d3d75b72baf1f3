use serde::Deserialize;

pub const MAX_LEVEL: u8 = 100;
/// Skills at or above this level get the "Expert" badge.
pub const EXPERT_LEVEL: u8 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub experience: String,
    pub description: String,
}

impl Skill {
    pub fn is_expert(&self) -> bool {
        self.level >= EXPERT_LEVEL
    }

    /// Level as a fraction, for progress bars.
    pub fn ratio(&self) -> f32 {
        f32::from(self.level.min(MAX_LEVEL)) / f32::from(MAX_LEVEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}
