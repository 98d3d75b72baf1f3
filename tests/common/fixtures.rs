use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio::core::{
    contact::{ContactForm, Transport, TransportError},
    data::{Project, Skill, SkillCategory},
    nav::{SectionId, SectionLayout, VisibilityEntry},
};

/// Creates a project with placeholder links.
pub fn make_project(id: u32, title: &str, category: &str, technologies: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        long_description: format!("{} in depth", title),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: format!("/projects/{}.jpg", id),
        demo_url: format!("https://demo{}.example.com", id),
        source_url: format!("https://example.com/src/{}", id),
        featured: id % 2 == 1,
        category: category.to_string(),
    }
}

/// Four projects over two categories, first-seen order: Full Stack, Frontend.
pub fn sample_projects() -> Vec<Project> {
    vec![
        make_project(1, "E-Commerce Platform", "Full Stack", &["React", "Node.js", "MongoDB"]),
        make_project(2, "Task Manager", "Frontend", &["TypeScript", "Firebase"]),
        make_project(3, "Weather Dashboard", "Frontend", &["React", "Chart.js"]),
        make_project(4, "Finance Tracker", "Full Stack", &["Express", "Plaid API"]),
    ]
}

pub fn make_skill(name: &str, level: u8, description: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        experience: "3+ years".to_string(),
        description: description.to_string(),
    }
}

pub fn sample_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: "frontend".to_string(),
            name: "Frontend Development".to_string(),
            description: "User interfaces".to_string(),
            skills: vec![
                make_skill("React", 95, "Hooks, Context API"),
                make_skill("CSS3", 90, "Responsive design, Flexbox"),
            ],
        },
        SkillCategory {
            id: "backend".to_string(),
            name: "Backend Development".to_string(),
            description: "Servers and APIs".to_string(),
            skills: vec![
                make_skill("Node.js", 85, "Express, RESTful APIs"),
                make_skill("GraphQL", 75, "Schema definition, Resolvers"),
            ],
        },
    ]
}

pub fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

pub fn valid_form() -> ContactForm {
    form("Ada", "ada@example.com", "Hello", "I would like to work with you.")
}

/// Layout with every section 1000 units tall and an 800 unit viewport.
pub fn uniform_layout() -> SectionLayout {
    let heights: Vec<(SectionId, f32)> = SectionId::ALL.iter().map(|&s| (s, 1000.0)).collect();
    SectionLayout::stacked(&heights, 800.0)
}

/// The desktop page: sections of uneven height in page order.
pub fn page_layout(viewport_height: f32) -> SectionLayout {
    SectionLayout::stacked(
        &[
            (SectionId::Home, 760.0),
            (SectionId::About, 1100.0),
            (SectionId::Skills, 1300.0),
            (SectionId::Projects, 1200.0),
            (SectionId::Contact, 900.0),
        ],
        viewport_height,
    )
}

pub fn entry(section: SectionId, ratio: f32) -> VisibilityEntry {
    VisibilityEntry { section, ratio }
}

/// Transport that counts deliveries and answers with a fixed outcome.
#[derive(Debug, Clone)]
pub struct CountingTransport {
    pub calls: Arc<AtomicUsize>,
    pub outcome: Result<(), TransportError>,
}

impl CountingTransport {
    pub fn succeeding() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: Ok(()),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: Err(TransportError::Unavailable("smtp down".to_string())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn send(&self, _form: &ContactForm) -> Result<(), TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
