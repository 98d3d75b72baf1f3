use crate::core::data::Project;

use super::{ALL, contains_folded};

fn matches_search(project: &Project, term: &str) -> bool {
    term.is_empty()
        || contains_folded(&project.title, term)
        || contains_folded(&project.description, term)
        || project
            .technologies
            .iter()
            .any(|tech| contains_folded(tech, term))
}

fn matches_category(project: &Project, category: &str) -> bool {
    category == ALL || project.category == category
}

/// Projects matching both the search term and the category, in list order.
pub fn filter<'a>(projects: &'a [Project], search_term: &str, category: &str) -> Vec<&'a Project> {
    let term = search_term.to_lowercase();
    projects
        .iter()
        .filter(|p| matches_search(p, &term) && matches_category(p, category))
        .collect()
}

/// `"all"` followed by each distinct category in first-seen order.
pub fn available_categories(projects: &[Project]) -> Vec<String> {
    let mut categories = vec![ALL.to_string()];
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category.clone());
        }
    }
    categories
}

pub fn featured(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

/// Search box plus category tabs of the projects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search_term: String,
    pub category: String,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL.to_string(),
        }
    }
}

impl ProjectQuery {
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter(projects, &self.search_term, &self.category)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
