use iced::{
    Color, Element, Length, border,
    widget::{Column, Row, button, column, container, container::Style, progress_bar, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{
        nav::{NavbarState, SectionId},
        theme::Theme,
    },
    gui::Message,
};

fn card_style(theme: Theme) -> impl Fn(&iced::Theme) -> Style {
    move |palette_theme: &iced::Theme| {
        let style = bordered_box(palette_theme).border(border::rounded(8));
        // dark mode: darken the card against the page
        if theme.is_dark() {
            let mut color_rgba = palette_theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        } else {
            style.background(palette_theme.palette().background)
        }
    }
}

/// Bordered panel used for project, skill and form blocks.
pub fn card<'a, Message>(content: impl Into<Element<'a, Message>>, theme: Theme) -> Element<'a, Message>
where
    Message: 'a,
{
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(card_style(theme))
        .into()
}

/// One full-width page section of fixed height.
pub fn section_frame<'a>(content: Element<'a, Message>, height: f32) -> Element<'a, Message> {
    container(content)
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

fn nav_links<'a>(active: SectionId) -> impl Iterator<Item = Element<'a, Message>> {
    SectionId::ALL.into_iter().map(move |section| {
        button(text(section.label()))
            .style(if section == active { button::primary } else { button::text })
            .on_press(Message::Navigate(section))
            .into()
    })
}

/// Top bar: nav links with the active one highlighted, menu and theme
/// toggles, and the scroll progress strip.
pub fn navbar<'a>(active: SectionId, state: &NavbarState, theme: Theme) -> Element<'a, Message> {
    let bar = row![
        text("Portfolio").size(22).width(Length::Fill),
        Row::with_children(nav_links(active)).spacing(6),
        button(if state.menu_open() { "Close" } else { "Menu" })
            .style(button::secondary)
            .on_press(Message::ToggleMenu),
        button(text(theme.toggle_label()))
            .style(button::secondary)
            .on_press(Message::ToggleTheme),
    ]
    .spacing(12)
    .padding(if state.scrolled() { 8 } else { 16 });

    let mut content = column![bar, progress_bar(0.0..=1.0, state.progress())];
    if state.menu_open() {
        content = content.push(Column::with_children(nav_links(active)).spacing(4).padding(12));
    }
    container(content).width(Length::Fill).into()
}
