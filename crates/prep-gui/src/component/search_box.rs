//! Search box component.
//!
//! A text input with search icon and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_XS, StudioColors, button_ghost, text_input_default};

/// Creates a search input with a clear button.
///
/// Shows a search icon prefix; the clear button appears once text is
/// entered.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_clear` - Message to send when the clear button is clicked
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.studio().text_muted),
            ..Default::default()
        });

    // Extra left padding leaves room for the icon column
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(Padding::new(8.0).left(4.0))
        .width(Length::Fill)
        .style(text_input_default);

    let clear_button = if value.is_empty() {
        None
    } else {
        Some(
            button(
                container(lucide::x().size(14)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.studio().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        )
    };

    // Layout: [icon][input][clear?]
    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(28.0))
            .center_x(Length::Shrink)
            .center_y(Length::Shrink),
    ]
    .spacing(SPACING_XS)
    .align_y(iced::Alignment::Center);

    content = content.push(container(input).width(Length::Fill));

    if let Some(btn) = clear_button {
        content = content.push(btn);
    }

    content.into()
}
