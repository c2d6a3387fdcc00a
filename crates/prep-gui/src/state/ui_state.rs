//! Presentation state: search query and the cached panel document.

use iced::widget::markdown;

use prep_content::{ContentView, Resolved, TopicEntry};
use prep_highlight::tag_untagged_blocks;

/// UI state that is not part of the selection state machine.
#[derive(Debug, Default)]
pub struct UiState {
    /// Category filter text. Filtering is a presentation effect only and
    /// never touches `NavigationState`.
    pub search_query: String,

    /// Parsed content for the panel, rebuilt only when a transition
    /// reports a change. `None` while no topic is selected.
    pub panel: Option<PanelDocument>,
}

/// The content panel, parsed once per (topic, view) change.
///
/// Markdown items are cached here because `markdown::view` renders by
/// reference; re-parsing on every frame would defeat that.
#[derive(Debug)]
pub struct PanelDocument {
    /// Topic name, shown as the panel heading.
    pub topic: String,
    /// The view whose body is actually shown (differs from the requested
    /// view after a missing-content fallback).
    pub shown_view: ContentView,
    /// The enriched markdown source the items were parsed from.
    pub source: String,
    /// Parsed markdown, enriched with sniffed language tags.
    pub items: Vec<markdown::Item>,
}

impl PanelDocument {
    /// Resolve the entry for `view` (with fallback), tag untagged code
    /// fences with a sniffed language, and parse the result.
    pub fn build(topic: &str, entry: &TopicEntry, view: ContentView) -> Self {
        let Resolved { view: shown_view, body } = entry.resolve(view);
        let tagged = tag_untagged_blocks(body);
        let items = markdown::parse(&tagged).collect();
        Self {
            topic: topic.to_string(),
            shown_view,
            source: tagged,
            items,
        }
    }
}

/// Case-insensitive substring match used by the sidebar filter.
/// An empty query matches everything.
pub fn category_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_insensitive_substring() {
        let categories = ["HTML", "CSS", "JavaScript"];

        let visible: Vec<&str> = categories
            .iter()
            .copied()
            .filter(|name| category_matches(name, "java"))
            .collect();
        assert_eq!(visible, ["JavaScript"]);

        let visible: Vec<&str> = categories
            .iter()
            .copied()
            .filter(|name| category_matches(name, "JAVA"))
            .collect();
        assert_eq!(visible, ["JavaScript"]);
    }

    #[test]
    fn empty_query_matches_all() {
        for name in ["HTML", "CSS", "JavaScript"] {
            assert!(category_matches(name, ""));
        }
    }

    #[test]
    fn panel_records_fallback_view() {
        let entry = TopicEntry::example_only("```js\nconst x = 1;\n```");
        let panel = PanelDocument::build("Forms", &entry, ContentView::Concept);
        assert_eq!(panel.shown_view, ContentView::Example);
        assert_eq!(panel.topic, "Forms");
        assert!(!panel.items.is_empty());
    }

    #[test]
    fn empty_entry_still_produces_a_document() {
        let panel = PanelDocument::build("Ghost", &TopicEntry::default(), ContentView::Concept);
        assert!(!panel.items.is_empty(), "placeholder must render");
    }
}
