use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{stack, text_input};
use iced::{Element, Length, Subscription, Task, Theme};
use log::{debug, info};

mod error;
mod state;
mod ui;

use state::controller::{Controller, Effect, NavKey, TransitionStep};
use state::deck::Deck;
use state::settings::{Settings, ThemeChoice};
use ui::screens;

/// Main application state
struct Presenter {
    /// The slide document being presented
    deck: Deck,
    /// Navigation state and presentation records
    controller: Controller,
    settings: Settings,
    /// Contents of the "go to slide" field
    jump: String,
    /// Dot under the pointer, if any
    hovered_dot: Option<usize>,
    /// Pointer is over the slide stage (pauses auto-play)
    stage_hovered: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User pressed the start button on the intro screen
    Start,
    Prev,
    Next,
    /// An indicator dot was clicked
    GoTo(isize),
    /// Navigation key; the flag is set when a text field captured it
    Key(NavKey, bool),
    /// A deferred intro transition step is due
    Transition(TransitionStep, u64),
    DotHovered(Option<usize>),
    StageHovered(bool),
    JumpInput(String),
    JumpSubmit,
    /// Auto-play tick
    AutoAdvance,
}

impl Presenter {
    /// Create a new instance of the application
    fn new(deck: Deck, controller: Controller, settings: Settings) -> (Self, Task<Message>) {
        (
            Presenter {
                deck,
                controller,
                settings,
                jump: String::new(),
                hovered_dot: None,
                stage_hovered: false,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.deck.title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Start => {
                // The stage and dot strip are mounted fresh, un-hovered
                self.clear_pointer();
                return run_effects(self.controller.reveal());
            }
            Message::Prev => self.controller.prev(),
            Message::Next => self.controller.next(),
            Message::GoTo(index) => self.controller.go_to(index),
            Message::Key(key, in_text_entry) => {
                let effects = self.controller.key(key, in_text_entry);
                if !self.controller.revealed() {
                    // The stage is unmounted without an exit event
                    self.clear_pointer();
                }
                return run_effects(effects);
            }
            Message::Transition(step, epoch) => {
                self.controller.finish(step, epoch);
            }
            Message::DotHovered(index) => {
                self.hovered_dot = index;
            }
            Message::StageHovered(hovered) => {
                self.stage_hovered = hovered;
            }
            Message::JumpInput(value) => {
                self.jump = value;
            }
            Message::JumpSubmit => {
                let effects = self.controller.jump(&self.jump);
                self.jump.clear();
                return run_effects(effects);
            }
            Message::AutoAdvance => {
                if self.controller.revealed() && !self.stage_hovered {
                    debug!("Auto-play advancing from slide {}", self.controller.current() + 1);
                    self.controller.next();
                }
            }
        }

        Task::none()
    }

    fn clear_pointer(&mut self) {
        self.stage_hovered = false;
        self.hovered_dot = None;
    }

    /// Build the user interface: the slideshow with the intro on top
    fn view(&self) -> Element<'_, Message> {
        stack![
            screens::site(
                &self.deck,
                &self.controller,
                &self.jump,
                self.hovered_dot,
            ),
            screens::intro(&self.deck, self.controller.intro()),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Keyboard navigation, plus the auto-play timer while it applies
    fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(key_message);

        match self.settings.autoplay() {
            Some(interval) if self.controller.revealed() && !self.stage_hovered => {
                Subscription::batch([
                    keys,
                    iced::time::every(interval).map(|_| Message::AutoAdvance),
                ])
            }
            _ => keys,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

/// Map raw key presses to navigation keys. A press that a widget already
/// captured (a focused text field) is flagged so the controller ignores it.
fn key_message(event: Event, status: event::Status, _window: iced::window::Id) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    key_press(&key, status)
}

fn key_press(key: &Key, status: event::Status) -> Option<Message> {
    nav_key(key).map(|nav| Message::Key(nav, status == event::Status::Captured))
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::ArrowRight) => Some(NavKey::Right),
        Key::Named(Named::ArrowLeft) => Some(NavKey::Left),
        Key::Named(Named::Escape) => Some(NavKey::Cancel),
        _ => None,
    }
}

/// Turn controller effects into iced tasks
fn run_effects(effects: Vec<Effect>) -> Task<Message> {
    Task::batch(effects.into_iter().map(|effect| match effect {
        Effect::Schedule { delay, step, epoch } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::Transition(step, epoch),
        ),
        Effect::ScrollToTop => {
            scrollable::scroll_to(screens::site_scroll_id(), AbsoluteOffset { x: 0.0, y: 0.0 })
        }
        Effect::FocusStage => text_input::focus(screens::stage_focus_id()),
    }))
}

fn main() -> error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let deck = Deck::builtin()?;
    let controller = Controller::new(deck.slide_states(), settings.timing())?;

    info!("🎞️  Slide deck initialized with {} slides", deck.len());

    iced::application(Presenter::title, Presenter::update, Presenter::view)
        .theme(Presenter::theme)
        .subscription(Presenter::subscription)
        .centered()
        .run_with(move || Presenter::new(deck, controller, settings))?;

    Ok(())
}
