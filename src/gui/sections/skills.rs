use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, progress_bar, row, text, text_input},
};

use crate::{
    core::{
        data::{PortfolioData, Skill},
        filter::{SkillQuery, skills},
    },
    gui::{
        sections::{RenderContext, SectionMessage, SectionView},
        widgets::card,
    },
};

#[derive(Debug, Clone, Default)]
pub struct SkillsSection {
    query: SkillQuery,
}

#[derive(Debug, Clone)]
pub enum SkillsMessage {
    Search(String),
    Category(String),
    Reset,
}

fn local(message: SkillsMessage) -> SectionMessage<SkillsSection> {
    SectionMessage::Local(message)
}

fn skill_row<'a>(skill: &'a Skill, caption: Option<&'a str>) -> Element<'a, SectionMessage<SkillsSection>> {
    let badge = if skill.is_expert() { "Expert" } else { "" };
    let mut header = row![
        text(&skill.name).size(18).width(Length::Fill),
        text(format!("{}%", skill.level)),
    ]
    .spacing(10);
    if let Some(caption) = caption {
        header = header.push(text(caption).size(12));
    }
    column![
        header,
        progress_bar(0.0..=1.0, skill.ratio()),
        row![text(&skill.experience).size(13).width(Length::Fill), text(badge).size(13)],
        text(&skill.description).size(13),
    ]
    .spacing(4)
    .into()
}

impl SectionView for SkillsSection {
    type Message = SkillsMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        let categories = &ctx.data.skill_categories;

        let tabs = Row::with_children(skills::available_categories(categories).into_iter().map(
            |category| {
                let label = categories
                    .iter()
                    .find(|c| c.id == category)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "All Skills".to_string());
                let selected = category == self.query.category;
                button(text(label))
                    .style(if selected { button::primary } else { button::secondary })
                    .on_press(local(SkillsMessage::Category(category)))
                    .into()
            },
        ))
        .spacing(10);

        let mut content = column![
            text("Skills & Expertise").size(36),
            text_input("Search skills...", &self.query.search_term)
                .on_input(|term| local(SkillsMessage::Search(term))),
            tabs,
        ]
        .spacing(16);

        if !self.query.search_term.is_empty() {
            let hits = self.query.search(categories);
            content = content.push(text(format!("{} results", hits.len())));
            content = content.push(
                Column::with_children(
                    hits.into_iter()
                        .map(|hit| skill_row(hit.skill, Some(hit.category.name.as_str()))),
                )
                .spacing(10),
            );
        }

        let shown = self.query.categories(categories);
        if shown.is_empty() && self.query.search_term.is_empty() {
            content = content.push(
                column![
                    text("No skill categories found."),
                    button("Show All Skills").on_press(local(SkillsMessage::Reset)),
                ]
                .spacing(8),
            );
        }
        for category in shown {
            content = content.push(card(
                column![
                    text(&category.name).size(24),
                    text(&category.description).size(14),
                    Column::with_children(
                        self.query
                            .skills(category)
                            .into_iter()
                            .map(|skill| skill_row(skill, None)),
                    )
                    .spacing(12),
                ]
                .spacing(10),
                ctx.theme,
            ));
        }
        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _data: &PortfolioData,
    ) -> Task<SectionMessage<Self>> {
        match message {
            SkillsMessage::Search(term) => self.query.search_term = term,
            SkillsMessage::Category(category) => self.query.category = category,
            SkillsMessage::Reset => self.query.reset(),
        }
        Task::none()
    }
}
