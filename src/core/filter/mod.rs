//! Pure queries over the static project and skill lists.

pub mod projects;
pub mod skills;

pub use projects::ProjectQuery;
pub use skills::{SkillMatch, SkillQuery};

/// Category value that disables category filtering.
pub const ALL: &str = "all";

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
