//! Studio theme for Prepdeck.
//!
//! A single light theme built on Iced's palette system:
//! - `palette` - the base palette plus a `StudioColors` extension trait
//!   for app-specific colors Iced's `ExtendedPalette` does not cover
//! - `spacing` - layout constants
//! - `widgets` - shared widget style functions
//!
//! Style functions receive `&Theme` and pull colors from it, so widgets
//! never hardcode colors:
//!
//! ```rust,ignore
//! use prep_gui::theme::{StudioColors, button_ghost};
//!
//! button(text("Clear")).style(button_ghost);
//!
//! container(content).style(|theme: &Theme| {
//!     let studio = theme.studio();
//!     container::Style {
//!         background: Some(studio.background_secondary.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

pub mod palette;
pub mod spacing;
pub mod widgets;

pub use palette::{StudioColorSet, StudioColors};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, CHIP_PADDING_X,
    CHIP_PADDING_Y, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    TAB_PADDING_X, TAB_PADDING_Y,
};

pub use widgets::{button_ghost, button_primary, studio_theme, text_input_default};
