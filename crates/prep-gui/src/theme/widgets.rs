//! Theme creation and shared widget style functions.

use iced::widget::{button, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::palette::{StudioColors, studio_palette};
use super::spacing;

/// Create the application theme.
pub fn studio_theme() -> Theme {
    Theme::custom("Studio Light".to_string(), studio_palette())
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - accent background, used for active selections.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color { a: 0.15, ..Color::BLACK },
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(studio.accent_hover.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.accent_pressed.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(studio.background_secondary.into()),
            text_color: studio.text_muted,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Ghost button style - minimal visual weight (clear button, links).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(studio.accent_light.into()),
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.accent_medium.into()),
            text_color: studio.accent_pressed,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: studio.text_muted,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style (search box).
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        text_input::Status::Active => text_input::Style {
            background: studio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_default,
            },
            icon: studio.text_muted,
            placeholder: studio.text_muted,
            value: palette.background.base.text,
            selection: studio.accent_medium,
        },
        text_input::Status::Hovered => text_input::Style {
            background: studio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.text_muted,
            },
            icon: studio.text_muted,
            placeholder: studio.text_muted,
            value: palette.background.base.text,
            selection: studio.accent_medium,
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: studio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_MEDIUM,
                color: studio.border_focused,
            },
            icon: studio.text_muted,
            placeholder: studio.text_muted,
            value: palette.background.base.text,
            selection: studio.accent_medium,
        },
        text_input::Status::Disabled => text_input::Style {
            background: studio.background_secondary.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_subtle,
            },
            icon: studio.text_muted,
            placeholder: studio.text_muted,
            value: studio.text_muted,
            selection: studio.accent_medium,
        },
    }
}
