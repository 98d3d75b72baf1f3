use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{container, text},
};

use crate::{
    core::data::PortfolioData,
    gui::sections::{RenderContext, SectionMessage, SectionView},
};

/// Splash shown while the page settles.
#[derive(Debug, Clone)]
pub struct LoadingPage;

impl SectionView for LoadingPage {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, _ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        container(text("Loading..."))
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
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
