use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, container, row, text, text_input},
};

use crate::{
    core::{
        data::{PortfolioData, Project},
        filter::{ProjectQuery, projects},
        gallery::ProjectGallery,
    },
    gui::{
        sections::{RenderContext, SectionMessage, SectionView},
        widgets::card,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ProjectsSection {
    query: ProjectQuery,
    gallery: ProjectGallery,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    Search(String),
    Category(String),
    ResetFilters,
    Open(u32),
    Close,
    Next,
    Previous,
}

fn local(message: ProjectsMessage) -> SectionMessage<ProjectsSection> {
    SectionMessage::Local(message)
}

impl ProjectsSection {
    fn detail<'a>(&self, project: &'a Project, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        card(
            column![
                row![
                    text(&project.title).size(28).width(Length::Fill),
                    button("Close").on_press(local(ProjectsMessage::Close)),
                ],
                text(&project.category).size(14),
                text(&project.long_description),
                text(format!("Technologies: {}", project.technologies.join(", "))),
                text(format!("Live demo: {}", project.demo_url)).size(14),
                text(format!("Source: {}", project.source_url)).size(14),
                row![
                    button("Previous").on_press(local(ProjectsMessage::Previous)),
                    button("Next").on_press(local(ProjectsMessage::Next)),
                ]
                .spacing(20),
            ]
            .spacing(12),
            ctx.theme,
        )
    }

    fn grid<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        let matches = self.query.apply(&ctx.data.projects);
        if matches.is_empty() {
            return column![
                text("No projects match your current search or filter criteria."),
                button("Reset Filters").on_press(local(ProjectsMessage::ResetFilters)),
            ]
            .spacing(12)
            .into();
        }

        Column::with_children(matches.into_iter().map(|project| {
            card(
                column![
                    text(&project.title).size(22),
                    text(&project.description),
                    text(project.technologies.join(" · ")).size(13),
                    button("View Details").on_press(local(ProjectsMessage::Open(project.id))),
                ]
                .spacing(8),
                ctx.theme,
            )
        }))
        .spacing(16)
        .into()
    }
}

impl SectionView for ProjectsSection {
    type Message = ProjectsMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        if let Some(project) = self.gallery.selected(&ctx.data.projects) {
            return self.detail(project, ctx);
        }

        let tabs = Row::with_children(
            projects::available_categories(&ctx.data.projects)
                .into_iter()
                .map(|category| {
                    let selected = category == self.query.category;
                    button(text(category.clone()))
                        .style(if selected { button::primary } else { button::secondary })
                        .on_press(local(ProjectsMessage::Category(category)))
                        .into()
                }),
        )
        .spacing(10);

        column![
            text("My Projects").size(36),
            text_input("Search projects...", &self.query.search_term)
                .on_input(|term| local(ProjectsMessage::Search(term))),
            tabs,
            container(self.grid(ctx)).width(Length::Fill),
        ]
        .spacing(16)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        data: &PortfolioData,
    ) -> Task<SectionMessage<Self>> {
        match message {
            ProjectsMessage::Search(term) => self.query.search_term = term,
            ProjectsMessage::Category(category) => self.query.category = category,
            ProjectsMessage::ResetFilters => self.query.reset(),
            ProjectsMessage::Open(id) => self.gallery.open(id),
            ProjectsMessage::Close => self.gallery.close(),
            ProjectsMessage::Next => self.gallery.next(&data.projects),
            ProjectsMessage::Previous => self.gallery.previous(&data.projects),
        }
        Task::none()
    }
}
