//! Topic chip component.
//!
//! Pill-shaped selectors rendered in a wrapping row, one per topic of
//! the selected category.

use iced::widget::{button, row, text};
use iced::{Border, Color, Element, Theme};

use crate::theme::{
    BORDER_RADIUS_FULL, CHIP_PADDING_X, CHIP_PADDING_Y, SPACING_SM, StudioColors,
};

/// A selectable chip.
pub struct Chip<M> {
    /// Chip label text
    pub label: String,
    /// Whether this chip is the active selection
    pub active: bool,
    /// Message to send when clicked
    pub message: M,
}

impl<M> Chip<M> {
    /// Create a new chip.
    pub fn new(label: impl Into<String>, active: bool, message: M) -> Self {
        Self {
            label: label.into(),
            active,
            message,
        }
    }
}

/// Creates a row of chips with the active one highlighted.
pub fn chip_row<'a, M: Clone + 'a>(chips: Vec<Chip<M>>) -> Element<'a, M> {
    let mut chips_row = row![].spacing(SPACING_SM);

    for chip in chips {
        let is_active = chip.active;
        let chip_button = button(text(chip.label).size(13))
            .on_press(chip.message)
            .padding([CHIP_PADDING_Y, CHIP_PADDING_X])
            .style(move |theme, status| chip_style(theme, status, is_active));
        chips_row = chips_row.push(chip_button);
    }

    chips_row.wrap().into()
}

fn chip_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    if is_active {
        return iced::widget::button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        };
    }

    let background = match status {
        iced::widget::button::Status::Hovered | iced::widget::button::Status::Pressed => {
            Some(studio.accent_light.into())
        }
        _ => Some(studio.background_secondary.into()),
    };

    iced::widget::button::Style {
        background,
        text_color: studio.text_secondary,
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            width: 1.0,
            color: studio.border_subtle,
        },
        ..Default::default()
    }
}
