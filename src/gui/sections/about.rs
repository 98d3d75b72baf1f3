use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{Column, column, text},
};

use crate::{
    core::data::PortfolioData,
    gui::sections::{RenderContext, SectionMessage, SectionView},
};

#[derive(Debug, Clone, Default)]
pub struct AboutSection;

impl SectionView for AboutSection {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        let profile = &ctx.data.profile;

        let experience = Column::with_children(profile.experience.iter().map(|exp| {
            column![
                text(format!("{} · {}", exp.position, exp.company)).size(18),
                text(format!("{} | {}", exp.period, exp.location)).size(13),
                text(&exp.description),
            ]
            .spacing(4)
            .into()
        }))
        .spacing(12);

        let education = Column::with_children(profile.education.iter().map(|edu| {
            column![
                text(&edu.degree).size(18),
                text(format!("{} | {}", edu.institution, edu.year)).size(13),
                text(&edu.description),
            ]
            .spacing(4)
            .into()
        }))
        .spacing(12);

        let services = Column::with_children(profile.services.iter().map(|service| {
            column![text(&service.title).size(18), text(&service.description)]
                .spacing(4)
                .into()
        }))
        .spacing(12);

        column![
            text("About Me").size(36),
            text(&profile.name).size(24),
            text(&profile.title),
            text(&profile.long_bio),
            text(format!("{} · {}", profile.location, profile.email)).size(14),
            text("Experience").size(28),
            experience,
            text("Education").size(28),
            education,
            text("Services").size(28),
            services,
        ]
        .spacing(16)
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
