use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, row, text},
};

use crate::{
    core::{data::PortfolioData, filter::projects, nav::SectionId},
    gui::sections::{RenderContext, SectionMessage, SectionView},
};

#[derive(Debug, Clone, Default)]
pub struct HomeSection;

impl SectionView for HomeSection {
    type Message = Infallible;
    /// Call-to-action buttons ask the page to navigate.
    type ParentMessage = SectionId;

    fn view<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        let profile = &ctx.data.profile;
        let featured = projects::featured(&ctx.data.projects)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(" · ");

        column![
            text(format!("Hi, I'm {}", profile.first_name())).size(48),
            text(&profile.title).size(28),
            text(profile.headline()),
            row![
                button("View My Work")
                    .on_press(SectionMessage::Parent(SectionId::Projects)),
                button("Contact Me")
                    .style(button::secondary)
                    .on_press(SectionMessage::Parent(SectionId::Contact)),
            ]
            .spacing(20),
            text(format!("Featured: {}", featured)).size(14),
        ]
        .spacing(20)
        .align_x(Center)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _data: &PortfolioData,
    ) -> Task<SectionMessage<Self>> {
        match message {}
    }
}
