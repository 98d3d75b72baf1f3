use std::{convert::Infallible, sync::Arc};

use iced::{
    Element, Task,
    widget::{Column, button, column, text, text_input},
};

use crate::{
    core::{
        contact::{ContactSession, Field, Transport, TransportError},
        data::PortfolioData,
    },
    gui::{
        sections::{RenderContext, SectionMessage, SectionView},
        widgets::card,
    },
};

#[derive(Clone)]
pub struct ContactSection {
    session: ContactSession,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ContactSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactSection")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    Edit(Field, String),
    Submit,
    Sent(Result<(), TransportError>),
}

fn local(message: ContactMessage) -> SectionMessage<ContactSection> {
    SectionMessage::Local(message)
}

impl ContactSection {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            session: ContactSession::new(),
            transport,
        }
    }

    fn field<'a>(&'a self, field: Field, placeholder: &'a str) -> Element<'a, SectionMessage<Self>> {
        let input = text_input(placeholder, self.session.form().get(field));
        let input = if self.session.status().is_pending() {
            input
        } else {
            input.on_input(move |value| local(ContactMessage::Edit(field, value)))
        };
        let mut block = Column::new().push(input).spacing(4);
        if let Some(error) = self.session.errors().message(field) {
            block = block.push(text(error).size(13));
        }
        block.into()
    }
}

impl SectionView for ContactSection {
    type Message = ContactMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, ctx: RenderContext<'a>) -> Element<'a, SectionMessage<Self>> {
        let profile = &ctx.data.profile;
        let status = self.session.status();

        let submit = button(if status.is_pending() { "Sending..." } else { "Send Message" });
        let submit = if status.is_pending() {
            submit
        } else {
            submit.on_press(local(ContactMessage::Submit))
        };

        let mut form = column![
            self.field(Field::Name, "Your Name"),
            self.field(Field::Email, "Your Email"),
            self.field(Field::Subject, "Subject"),
            self.field(Field::Message, "Your Message"),
            submit,
        ]
        .spacing(12);
        if let Some(message) = status.message() {
            form = form.push(text(message));
        }

        column![
            text("Get In Touch").size(36),
            text(format!("{} · {} · {}", profile.email, profile.phone, profile.location)).size(14),
            card(form, ctx.theme),
        ]
        .spacing(16)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _data: &PortfolioData,
    ) -> Task<SectionMessage<Self>> {
        match message {
            ContactMessage::Edit(field, value) => {
                self.session.set_field(field, value);
                Task::none()
            }
            ContactMessage::Submit => match self.session.begin_submit() {
                Ok(form) => {
                    let transport = self.transport.clone();
                    Task::perform(async move { transport.send(&form).await }, |outcome| {
                        local(ContactMessage::Sent(outcome))
                    })
                }
                Err(_) => Task::none(),
            },
            ContactMessage::Sent(outcome) => {
                self.session.complete(outcome);
                Task::none()
            }
        }
    }
}
