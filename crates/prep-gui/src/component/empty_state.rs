//! Empty state component.
//!
//! Standardized feedback for when a region has nothing to display yet
//! (no category picked, no topic picked).
//!
//! # Usage
//!
//! ```rust,ignore
//! use prep_gui::component::EmptyState;
//! use iced_fonts::lucide;
//!
//! EmptyState::new(lucide::library().size(48), "Pick a category")
//!     .description("Choose a category on the left to see its topics")
//!     .centered()
//!     .view()
//! ```

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{SPACING_MD, SPACING_SM, StudioColors};

/// Empty state with icon, title, and optional description.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    centered: bool,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            centered: false,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Center within the available space.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![
            container(self.icon).style(|theme: &Theme| container::Style {
                text_color: Some(theme.studio().text_muted),
                ..Default::default()
            }),
            Space::new().height(SPACING_MD),
            text(self.title).size(18).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.studio().text_secondary),
                }
            }),
        ]
        .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content.push(Space::new().height(SPACING_SM)).push(
                text(desc).size(13).style(|theme: &Theme| {
                    iced::widget::text::Style {
                        color: Some(theme.studio().text_muted),
                    }
                }),
            );
        }

        if self.centered {
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            container(content).width(Length::Fill).into()
        }
    }
}
