//! The library view - the application's single screen.
//!
//! Three regions, each a pure function of state:
//! - category sidebar with search filter
//! - topic chip row for the selected category
//! - content panel with the Concept/Example toggle

use iced::widget::{Space, column, container, markdown, row, scrollable, text};
use iced::{Border, Element, Length, Theme};
use iced_fonts::lucide;

use prep_content::ContentView;

use crate::component::{Chip, EmptyState, SidebarItem, Tab, chip_row, search_box, sidebar, tab_bar};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, StudioColors,
};

// =============================================================================
// MAIN LIBRARY VIEW
// =============================================================================

/// Render the library screen.
pub fn view_library(state: &AppState) -> Element<'_, Message> {
    row![view_sidebar(state), view_content(state)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// =============================================================================
// SIDEBAR REGION
// =============================================================================

/// Category sidebar: app title, search filter, category list.
fn view_sidebar(state: &AppState) -> Element<'_, Message> {
    let title = text("Prepdeck").size(20);

    let search = search_box(
        &state.ui.search_query,
        "Filter categories...",
        Message::SearchChanged,
        Message::SearchCleared,
    );

    let visible = state.visible_categories();
    let selected = state.nav().selected_category();
    let active_index = selected.and_then(|name| visible.iter().position(|c| *c == name));

    let items: Vec<SidebarItem<Message>> = visible
        .iter()
        .map(|name| {
            SidebarItem::new(*name, Message::CategorySelected((*name).to_string()))
                .with_badge(state.store.topic_names(name).len().to_string())
        })
        .collect();

    let list: Element<'_, Message> = if items.is_empty() {
        text("No categories match")
            .size(13)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.studio().text_muted),
            })
            .into()
    } else {
        sidebar(items, active_index)
    };

    container(
        column![
            title,
            Space::new().height(SPACING_MD),
            search,
            Space::new().height(SPACING_SM),
            list,
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(SPACING_MD)
    .style(|theme: &Theme| {
        let studio = theme.studio();
        container::Style {
            background: Some(studio.background_secondary.into()),
            border: Border {
                color: studio.border_subtle,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    })
    .into()
}

// =============================================================================
// CONTENT REGION
// =============================================================================

/// Topic chips, content panel, shortcut footer.
fn view_content(state: &AppState) -> Element<'_, Message> {
    if state.nav().selected_category().is_none() {
        return EmptyState::new(lucide::library().size(48), "Pick a category")
            .description("Choose a category on the left to browse its topics")
            .centered()
            .view();
    }

    let chips: Vec<Chip<Message>> = state
        .current_topics()
        .iter()
        .map(|topic| {
            Chip::new(
                *topic,
                state.nav().selected_topic() == Some(*topic),
                Message::TopicSelected((*topic).to_string()),
            )
        })
        .collect();

    let panel: Element<'_, Message> = match &state.ui.panel {
        Some(panel) => view_panel(state, panel),
        None => EmptyState::new(lucide::mouse_pointer_click().size(48), "Select a topic")
            .description("Pick a topic chip above, then toggle Concept and Example")
            .centered()
            .view(),
    };

    column![
        container(chip_row(chips)).padding([SPACING_MD, SPACING_LG]),
        panel,
        view_footer(),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// The content panel: heading, view toggle, rendered markdown.
fn view_panel<'a>(
    state: &'a AppState,
    panel: &'a crate::state::PanelDocument,
) -> Element<'a, Message> {
    let tabs = vec![
        Tab::new(
            ContentView::Concept.label(),
            Message::ViewSelected(ContentView::Concept),
        ),
        Tab::new(
            ContentView::Example.label(),
            Message::ViewSelected(ContentView::Example),
        ),
    ];
    let active_index = match state.nav().active_view() {
        ContentView::Concept => 0,
        ContentView::Example => 1,
    };

    // Note: markdown::view requires a concrete Theme; the app ships a
    // light theme, so Light matches.
    let body = markdown::view(&panel.items, Theme::Light)
        .map(|url| Message::LinkClicked(url.to_string()));

    let mut header = row![text(panel.topic.as_str()).size(24).width(Length::Fill)]
        .align_y(iced::Alignment::Center);
    header = header.push(tab_bar(tabs, active_index));

    // Showing the sibling view's content is worth a hint, not an error.
    let fallback_hint: Option<Element<'_, Message>> =
        (panel.shown_view != state.nav().active_view()).then(|| {
            text(format!(
                "No {} content for this topic - showing the {} instead",
                state.nav().active_view().label().to_lowercase(),
                panel.shown_view.label().to_lowercase(),
            ))
            .size(12)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.studio().text_muted),
            })
            .into()
        });

    let mut content = column![header, Space::new().height(SPACING_MD)];
    if let Some(hint) = fallback_hint {
        content = content.push(hint).push(Space::new().height(SPACING_SM));
    }
    content = content.push(scrollable(body).height(Length::Fill));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, SPACING_LG])
        .into()
}

/// Keyboard shortcut hints.
fn view_footer<'a>() -> Element<'a, Message> {
    container(
        text("Left / Right: previous / next topic   -   Tab / Shift+Tab: switch view")
            .size(12)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.studio().text_muted),
            }),
    )
    .width(Length::Fill)
    .padding([SPACING_SM, SPACING_LG])
    .into()
}
