use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub long_bio: String,
    pub resume: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// First sentence of the bio, used as the landing tagline.
    pub fn headline(&self) -> String {
        match self.bio.split_once('.') {
            Some((first, _)) => format!("{}.", first),
            None => self.bio.clone(),
        }
    }

    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.name)
    }
}

/// Current year in local time, falling back to UTC when the offset is unknown.
pub fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}
