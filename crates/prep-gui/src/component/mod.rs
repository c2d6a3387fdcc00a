//! Reusable UI components.
//!
//! Components are plain functions (or small builders) returning
//! `Element`s; they carry no state of their own.

mod chip;
mod empty_state;
mod search_box;
mod sidebar;
mod tab_bar;

pub use chip::{Chip, chip_row};
pub use empty_state::EmptyState;
pub use search_box::search_box;
pub use sidebar::{SidebarItem, sidebar};
pub use tab_bar::{Tab, tab_bar};
