use crate::core::data::{Skill, SkillCategory};

use super::{ALL, contains_folded};

fn skill_matches(skill: &Skill, term: &str) -> bool {
    term.is_empty() || contains_folded(&skill.name, term) || contains_folded(&skill.description, term)
}

/// Categories selected by `active_category` that, when a search term is
/// given, hold at least one matching skill.
pub fn filter_categories<'a>(
    categories: &'a [SkillCategory],
    active_category: &str,
    search_term: &str,
) -> Vec<&'a SkillCategory> {
    let term = search_term.to_lowercase();
    categories
        .iter()
        .filter(|category| active_category == ALL || category.id == active_category)
        .filter(|category| {
            term.is_empty() || category.skills.iter().any(|s| skill_matches(s, &term))
        })
        .collect()
}

/// Skills of one category matching the search term, in order.
pub fn filter_skills<'a>(category: &'a SkillCategory, search_term: &str) -> Vec<&'a Skill> {
    let term = search_term.to_lowercase();
    category
        .skills
        .iter()
        .filter(|s| skill_matches(s, &term))
        .collect()
}

/// A search hit together with the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillMatch<'a> {
    pub skill: &'a Skill,
    pub category: &'a SkillCategory,
}

/// Flat list of every skill matching `search_term` across all categories.
/// Empty when there is no search term.
pub fn search_all<'a>(categories: &'a [SkillCategory], search_term: &str) -> Vec<SkillMatch<'a>> {
    if search_term.is_empty() {
        return Vec::new();
    }
    let folded = search_term.to_lowercase();
    let term = folded.as_str();
    categories
        .iter()
        .flat_map(move |category| {
            category
                .skills
                .iter()
                .filter(move |s| skill_matches(s, term))
                .map(move |skill| SkillMatch { skill, category })
        })
        .collect()
}

/// `"all"` followed by every category id.
pub fn available_categories(categories: &[SkillCategory]) -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(categories.iter().map(|c| c.id.clone()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillQuery {
    pub search_term: String,
    pub category: String,
}

impl Default for SkillQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL.to_string(),
        }
    }
}

impl SkillQuery {
    pub fn categories<'a>(&self, categories: &'a [SkillCategory]) -> Vec<&'a SkillCategory> {
        filter_categories(categories, &self.category, &self.search_term)
    }

    pub fn skills<'a>(&self, category: &'a SkillCategory) -> Vec<&'a Skill> {
        filter_skills(category, &self.search_term)
    }

    pub fn search<'a>(&self, categories: &'a [SkillCategory]) -> Vec<SkillMatch<'a>> {
        search_all(categories, &self.search_term)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
