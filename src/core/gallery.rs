use crate::core::data::Project;

/// Project detail overlay. Stepping wraps around the full project list,
/// regardless of any active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectGallery {
    selected: Option<u32>,
}

impl ProjectGallery {
    pub fn open(&mut self, project_id: u32) {
        self.selected = Some(project_id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|p| p.id == id)
    }

    pub fn next(&mut self, projects: &[Project]) {
        self.step(projects, 1);
    }

    pub fn previous(&mut self, projects: &[Project]) {
        self.step(projects, -1);
    }

    fn step(&mut self, projects: &[Project], delta: isize) {
        let Some(id) = self.selected else {
            return;
        };
        let Some(index) = projects.iter().position(|p| p.id == id) else {
            self.selected = None;
            return;
        };
        let len = projects.len() as isize;
        let next = (index as isize + delta).rem_euclid(len) as usize;
        self.selected = Some(projects[next].id);
    }
}
