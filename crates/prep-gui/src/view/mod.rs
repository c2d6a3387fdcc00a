//! View functions.
//!
//! Views are pure functions of `AppState`; all state changes go through
//! `update`.

mod library;

pub use library::view_library;
