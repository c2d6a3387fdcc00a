//! Message types for the Elm-style architecture.
//!
//! All user interactions and events flow through [`Message`]; the
//! `update` function is the only place state changes happen.

use iced::keyboard;

use prep_content::ContentView;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// A category was clicked in the sidebar
    CategorySelected(String),

    /// A topic chip was clicked
    TopicSelected(String),

    /// A view-toggle tab was clicked
    ViewSelected(ContentView),

    // =========================================================================
    // Category filter
    // =========================================================================
    /// Search query text changed
    SearchChanged(String),

    /// Clear button on the search box
    SearchCleared,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// A link inside rendered content was clicked
    LinkClicked(String),

    /// No operation - used for ignored events
    Noop,
}
