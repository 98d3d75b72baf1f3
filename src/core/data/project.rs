use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: String,
    pub demo_url: String,
    pub source_url: String,
    #[serde(default)]
    pub featured: bool,
    pub category: String,
}
