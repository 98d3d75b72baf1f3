pub mod about;
pub mod contact;
pub mod home;
pub mod loading_page;
pub mod projects;
pub mod skills;

use iced::{Element, Task};

use crate::core::{data::PortfolioData, theme::Theme};

pub enum SectionMessage<S: SectionView> {
    Local(S::Message),
    Parent(S::ParentMessage),
}

// Written out so the section type itself needs neither bound.
impl<S: SectionView> Clone for SectionMessage<S> {
    fn clone(&self) -> Self {
        match self {
            SectionMessage::Local(msg) => SectionMessage::Local(msg.clone()),
            SectionMessage::Parent(msg) => SectionMessage::Parent(msg.clone()),
        }
    }
}

impl<S: SectionView> std::fmt::Debug for SectionMessage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionMessage::Local(msg) => f.debug_tuple("Local").field(msg).finish(),
            SectionMessage::Parent(msg) => f.debug_tuple("Parent").field(msg).finish(),
        }
    }
}

/// What every section is rendered with. The theme is passed in explicitly.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: Theme,
    pub data: &'a PortfolioData,
}

pub trait SectionView: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>>;
    fn update(&mut self, message: Self::Message, data: &PortfolioData)
    -> Task<SectionMessage<Self>>;
}
