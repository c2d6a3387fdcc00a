//! Prepdeck - Interview Preparation Reference
//!
//! Desktop application for browsing a curated catalog of interview
//! preparation notes and code samples, organized by category and topic.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

pub mod app;
pub mod component;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
