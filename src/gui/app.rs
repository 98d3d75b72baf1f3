use std::sync::Arc;

use iced::{
    Element, Event, Length, Subscription, Task, event, keyboard,
    widget::{self, column, operation, scrollable, text},
    window,
};
use tracing::debug;

use super::{
    AppState, Message,
    sections::{
        RenderContext, SectionMessage, SectionView, about::AboutSection,
        contact::ContactSection, home::HomeSection, loading_page::LoadingPage,
        projects::{ProjectsMessage, ProjectsSection},
        skills::SkillsSection,
    },
    state::{Phase, SECTION_HEIGHTS},
    widgets::{navbar, section_frame},
};
use crate::{
    config::Config,
    core::{
        contact::SimulatedTransport,
        data::{PortfolioData, current_year},
        nav::SectionId,
        theme::Theme,
    },
};

fn page_id() -> widget::Id {
    widget::Id::new("folio-page")
}

fn after<T: Send + 'static>(delay: std::time::Duration, message: T) -> Task<T> {
    Task::perform(tokio::time::sleep(delay), move |_| message)
}

pub struct FolioApp {
    state: AppState,
    loading: LoadingPage,
    home: HomeSection,
    about: AboutSection,
    skills: SkillsSection,
    projects: ProjectsSection,
    contact: ContactSection,
}

/// Open the portfolio window. `location` seeds the address bar, e.g. `/#skills`.
pub fn run(config: Config, data: PortfolioData, location: String) -> iced::Result {
    let data = Arc::new(data);
    let boot = move || FolioApp::new(config.clone(), data.clone(), &location);

    iced::application(boot, FolioApp::update, FolioApp::view)
        .title(FolioApp::title)
        .theme(FolioApp::theme)
        .subscription(FolioApp::subscription)
        .run()
}

impl FolioApp {
    fn new(config: Config, data: Arc<PortfolioData>, location: &str) -> (Self, Task<Message>) {
        let transport = Arc::new(SimulatedTransport::new(config.contact.submit_delay()));
        let splash = config.ui.splash();
        let app = Self {
            state: AppState::new(config, data, location),
            loading: LoadingPage,
            home: HomeSection,
            about: AboutSection,
            skills: SkillsSection::default(),
            projects: ProjectsSection::default(),
            contact: ContactSection::new(transport),
        };
        (app, after(splash, Message::SplashFinished))
    }

    fn title(&self) -> String {
        format!(
            "{} | {}",
            self.state.data.profile.name, self.state.data.profile.title
        )
    }

    fn theme(&self) -> iced::Theme {
        match self.state.theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Escape),
            Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size.width)),
            _ => None,
        })
    }

    fn navigate(&mut self, section: SectionId) -> Task<Message> {
        if !self.state.navigator.navigate_to(section) {
            return Task::none();
        }
        match self.state.navigator.viewport_mut().take_scroll_request() {
            Some(request) => operation::scroll_to(
                page_id(),
                scrollable::AbsoluteOffset {
                    x: 0.0,
                    y: request.offset,
                },
            ),
            None => Task::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let data = self.state.data.clone();
        match message {
            Message::SplashFinished => {
                self.state.start_tracking();
                match self.state.tracker.deep_link() {
                    Some(link) => after(link.delay, Message::DeepLink(link.section)),
                    None => Task::none(),
                }
            }
            Message::DeepLink(section) => self.navigate(section),
            Message::Scrolled(viewport) => {
                self.state.viewport_scrolled(
                    viewport.absolute_offset().y,
                    viewport.content_bounds().height,
                    viewport.bounds().height,
                );
                Task::none()
            }
            Message::Navigate(section) => {
                let section = self.state.navbar.nav_clicked(section);
                let lock = self.state.config.ui.nav_scroll_lock();
                Task::batch([
                    self.navigate(section),
                    after(lock, Message::ScrollLockReleased),
                ])
            }
            Message::ScrollLockReleased => {
                self.state.navbar.release_scroll_lock();
                Task::none()
            }
            Message::ToggleMenu => {
                self.state.navbar.toggle_menu();
                Task::none()
            }
            Message::ToggleTheme => {
                self.state.toggle_theme();
                debug!(theme = %self.state.theme, "theme toggled");
                Task::none()
            }
            Message::Escape => {
                self.state.navbar.escape_pressed();
                self.projects
                    .update(ProjectsMessage::Close, &data)
                    .map(Message::Projects)
            }
            Message::Resized(width) => {
                self.state.navbar.resized(width);
                Task::none()
            }
            Message::Home(SectionMessage::Parent(section)) => self.update(Message::Navigate(section)),
            Message::Home(SectionMessage::Local(msg)) => match msg {},
            Message::Skills(SectionMessage::Local(msg)) => {
                self.skills.update(msg, &data).map(Message::Skills)
            }
            Message::Projects(SectionMessage::Local(msg)) => {
                self.projects.update(msg, &data).map(Message::Projects)
            }
            Message::Contact(SectionMessage::Local(msg)) => {
                self.contact.update(msg, &data).map(Message::Contact)
            }
            Message::Skills(SectionMessage::Parent(never))
            | Message::Projects(SectionMessage::Parent(never))
            | Message::Contact(SectionMessage::Parent(never)) => match never {},
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let ctx = RenderContext {
            theme: self.state.theme,
            data: &self.state.data,
        };
        if self.state.phase == Phase::Loading {
            return self.loading.view(ctx).map(|msg| match msg {
                SectionMessage::Local(never) | SectionMessage::Parent(never) => match never {},
            });
        }

        let bodies: [Element<'_, Message>; 5] = [
            self.home.view(ctx).map(Message::Home),
            self.about.view(ctx).map(|msg| match msg {
                SectionMessage::Local(never) | SectionMessage::Parent(never) => match never {},
            }),
            self.skills.view(ctx).map(Message::Skills),
            self.projects.view(ctx).map(Message::Projects),
            self.contact.view(ctx).map(Message::Contact),
        ];
        let sections = SECTION_HEIGHTS
            .iter()
            .zip(bodies)
            .map(|(&(_, height), body)| section_frame(body, height));

        let footer = text(self.state.data.profile.copyright_line(current_year())).size(13);
        let page = scrollable(
            widget::Column::with_children(sections)
                .push(footer)
                .width(Length::Fill),
        )
        .id(page_id())
        .on_scroll(Message::Scrolled)
        .height(Length::Fill);

        column![
            navbar(
                self.state.active_section(),
                &self.state.navbar,
                self.state.theme
            ),
            page,
        ]
        .into()
    }
}
