//! Sidebar navigation component.
//!
//! A vertical list of navigation items with optional count badges.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, SPACING_SM, SPACING_XS, StudioColors};

// =============================================================================
// SIDEBAR ITEM
// =============================================================================

/// A sidebar navigation item.
pub struct SidebarItem<M> {
    /// Item label text
    pub label: String,
    /// Optional badge text (e.g., topic count)
    pub badge: Option<String>,
    /// Message to send when clicked
    pub message: M,
}

impl<M> SidebarItem<M> {
    /// Create a new sidebar item.
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            badge: None,
            message,
        }
    }

    /// Add a badge to the item.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

// =============================================================================
// SIDEBAR COMPONENT
// =============================================================================

/// Creates a vertical sidebar navigation.
///
/// # Arguments
///
/// * `items` - List of sidebar items
/// * `active_index` - Index of the currently active item (or None)
pub fn sidebar<'a, M: Clone + 'a>(
    items: Vec<SidebarItem<M>>,
    active_index: Option<usize>,
) -> Element<'a, M> {
    let mut item_column = column![].spacing(SPACING_XS);

    for (index, item) in items.into_iter().enumerate() {
        let is_active = active_index == Some(index);

        let label = text(item.label).size(14).style(move |theme: &Theme| {
            let studio = theme.studio();
            iced::widget::text::Style {
                color: Some(if is_active {
                    theme.extended_palette().primary.base.color
                } else {
                    studio.text_secondary
                }),
            }
        });

        let mut content = row![label.width(Length::Fill)].align_y(iced::Alignment::Center);
        if let Some(badge) = item.badge {
            content = content.push(
                container(text(badge).size(11).style(|theme: &Theme| {
                    iced::widget::text::Style {
                        color: Some(theme.studio().text_muted),
                    }
                }))
                .padding([1.0, 6.0])
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.studio().background_secondary.into()),
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            );
        }

        let item_button = button(content)
            .on_press(item.message)
            .width(Length::Fill)
            .padding([SPACING_SM, SPACING_SM])
            .style(move |theme: &Theme, status| sidebar_item_style(theme, status, is_active));

        item_column = item_column.push(item_button);
    }

    scrollable(item_column).height(Length::Fill).into()
}

fn sidebar_item_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
) -> iced::widget::button::Style {
    let studio = theme.studio();

    let background = if is_active {
        Some(studio.accent_light.into())
    } else {
        match status {
            iced::widget::button::Status::Hovered | iced::widget::button::Status::Pressed => {
                Some(studio.background_secondary.into())
            }
            _ => None,
        }
    };

    iced::widget::button::Style {
        background,
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: iced::Color::TRANSPARENT,
        },
        ..Default::default()
    }
}
