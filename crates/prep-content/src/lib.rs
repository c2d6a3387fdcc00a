//! Content store for Prepdeck.
//!
//! The store is a read-only mapping of category name → topic name →
//! [`TopicEntry`], assembled once at startup from the independently
//! authored category modules in [`catalog`]. The UI never mutates it.

pub mod catalog;
pub mod error;
pub mod store;

pub use error::{ContentError, Result};
pub use store::{CategoryModule, ContentStore, ContentView, Resolved, TopicEntry, PLACEHOLDER};
