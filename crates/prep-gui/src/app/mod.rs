//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update →
//! View. All state changes happen in `update()`; views are pure
//! functions of state.

mod keyboard;

use iced::keyboard as kb;
use iced::{Element, Subscription, Task, Theme};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::studio_theme;
use crate::view::view_library;

/// Main application struct.
///
/// Root of the Iced application; holds the application state and
/// implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance with the built-in catalog.
    pub fn new() -> (Self, Task<Message>) {
        let state = AppState::default();
        tracing::info!(
            categories = state.store.category_count(),
            "content store assembled"
        );
        (Self { state }, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::CategorySelected(name) => {
                self.state.select_category(&name);
                Task::none()
            }

            Message::TopicSelected(name) => {
                self.state.select_topic(&name);
                Task::none()
            }

            Message::ViewSelected(view) => {
                self.state.set_view(view);
                Task::none()
            }

            // =================================================================
            // Category filter
            // =================================================================
            Message::SearchChanged(query) => {
                self.state.ui.search_query = query;
                Task::none()
            }

            Message::SearchCleared => {
                self.state.ui.search_query.clear();
                Task::none()
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::LinkClicked(url) => {
                if let Err(err) = open::that(&url) {
                    tracing::warn!(%url, error = %err, "failed to open link");
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_library(&self.state)
    }

    /// Window title, reflecting the current selection.
    pub fn title(&self) -> String {
        match (
            self.state.nav().selected_category(),
            self.state.nav().selected_topic(),
        ) {
            (Some(category), Some(topic)) => format!("Prepdeck - {category} / {topic}"),
            (Some(category), None) => format!("Prepdeck - {category}"),
            _ => "Prepdeck".to_string(),
        }
    }

    /// The application theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }

    /// Keyboard event subscription for global shortcuts.
    pub fn subscription(&self) -> Subscription<Message> {
        kb::listen().map(|event| match event {
            kb::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
            _ => Message::Noop,
        })
    }
}
