//! Tab bar navigation component.
//!
//! Horizontal tab navigation; used for the Concept/Example view toggle.

use iced::widget::{button, container, row, text};
use iced::{Border, Color, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, StudioColors, TAB_PADDING_X, TAB_PADDING_Y};

// =============================================================================
// TAB DEFINITION
// =============================================================================

/// A tab item for the tab bar.
pub struct Tab<M> {
    /// Tab label text
    pub label: String,
    /// Message to send when the tab is clicked
    pub message: M,
}

impl<M> Tab<M> {
    /// Create a new tab.
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

// =============================================================================
// TAB BAR COMPONENT
// =============================================================================

/// Creates a horizontal tab bar with the active tab highlighted.
///
/// Clicking the active tab sends its message like any other; suppressing
/// the redundant transition is the update function's job, not the view's.
pub fn tab_bar<'a, M: Clone + 'a>(tabs: Vec<Tab<M>>, active_index: usize) -> Element<'a, M> {
    let mut tab_row = row![].spacing(0);

    for (index, tab) in tabs.into_iter().enumerate() {
        let is_active = index == active_index;

        let tab_button = button(
            container(text(tab.label).size(14))
                .padding([TAB_PADDING_Y, TAB_PADDING_X])
                .center_x(Length::Shrink),
        )
        .on_press(tab.message)
        .style(move |theme, status| {
            if is_active {
                tab_style_active(theme, status)
            } else {
                tab_style_inactive(theme, status)
            }
        });

        tab_row = tab_row.push(tab_button);
    }

    container(tab_row)
        .style(|theme: &Theme| {
            let studio = theme.studio();
            container::Style {
                background: Some(studio.background_secondary.into()),
                border: Border {
                    color: studio.border_subtle,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

fn tab_style_active(theme: &Theme, _status: iced::widget::button::Status) -> iced::widget::button::Style {
    let studio = theme.studio();
    iced::widget::button::Style {
        background: Some(studio.background_elevated.into()),
        text_color: theme.extended_palette().primary.base.color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: studio.border_default,
        },
        ..Default::default()
    }
}

fn tab_style_inactive(
    theme: &Theme,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    let studio = theme.studio();
    let text_color = match status {
        iced::widget::button::Status::Hovered => theme.extended_palette().background.base.text,
        _ => studio.text_secondary,
    };
    iced::widget::button::Style {
        background: None,
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}
