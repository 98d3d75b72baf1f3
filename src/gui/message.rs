use iced::widget::scrollable;

use crate::{
    core::nav::SectionId,
    gui::sections::{
        SectionMessage, contact::ContactSection, home::HomeSection, projects::ProjectsSection,
        skills::SkillsSection,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    SplashFinished,
    DeepLink(SectionId),
    Scrolled(scrollable::Viewport),
    Navigate(SectionId),
    ScrollLockReleased,
    ToggleMenu,
    ToggleTheme,
    Escape,
    Resized(f32),
    Home(SectionMessage<HomeSection>),
    Skills(SectionMessage<SkillsSection>),
    Projects(SectionMessage<ProjectsSection>),
    Contact(SectionMessage<ContactSection>),
}
