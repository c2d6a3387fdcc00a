//! The selection/view state machine.
//!
//! `NavigationState` owns the three state variables the whole UI derives
//! from: selected category, selected topic, active view. Fields are
//! private; the only way to change them is through the transition
//! methods, each of which enforces its preconditions and reports whether
//! anything changed so callers can skip derived work on no-ops.
//!
//! Invariants:
//! - a topic is selected only while a category is selected, and is always
//!   a key of that category's topic map;
//! - the active view is meaningful only while a topic is selected and
//!   resets to Concept on every topic change.

use prep_content::{ContentStore, ContentView};

/// Direction for topic arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Current selection and view, owned exclusively by the controller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationState {
    selected_category: Option<String>,
    selected_topic: Option<String>,
    active_view: ContentView,
}

impl NavigationState {
    /// The selected category, if any.
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// The selected topic, if any.
    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    /// The active content view. Meaningful only with a selected topic.
    pub fn active_view(&self) -> ContentView {
        self.active_view
    }

    /// Select a category. Clears the topic selection and resets the view,
    /// even when re-selecting the current category.
    ///
    /// Unknown categories are ignored (the UI only offers valid keys;
    /// this is defensive, not an expected path).
    pub fn select_category(&mut self, name: &str, store: &ContentStore) -> bool {
        if !store.has_category(name) {
            return false;
        }
        self.selected_category = Some(name.to_string());
        self.selected_topic = None;
        self.active_view = ContentView::Concept;
        true
    }

    /// Select a topic within the current category and reset the view to
    /// Concept. No-op without a selected category or for an unknown topic.
    pub fn select_topic(&mut self, name: &str, store: &ContentStore) -> bool {
        let Some(category) = self.selected_category.as_deref() else {
            return false;
        };
        if store.entry(category, name).is_none() {
            return false;
        }
        self.selected_topic = Some(name.to_string());
        self.active_view = ContentView::Concept;
        true
    }

    /// Switch the active view. No-op without a selected topic or when
    /// `view` is already active (the caller must not re-render then).
    pub fn set_view(&mut self, view: ContentView) -> bool {
        if self.selected_topic.is_none() || self.active_view == view {
            return false;
        }
        self.active_view = view;
        true
    }

    /// Move to the adjacent topic in the category's natural key order.
    ///
    /// The current index is derived from the selected topic against the
    /// store, never from rendered UI. No-op at either boundary, without a
    /// selected topic, or without a selected category.
    pub fn navigate_topic(&mut self, direction: Direction, store: &ContentStore) -> bool {
        let Some(category) = self.selected_category.as_deref() else {
            return false;
        };
        let Some(current) = self.selected_topic.as_deref() else {
            return false;
        };
        let topics = store.topic_names(category);
        let Some(index) = topics.iter().position(|topic| *topic == current) else {
            return false;
        };

        let target = match direction {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => (index + 1 < topics.len()).then_some(index + 1),
        };
        let Some(target) = target else {
            return false;
        };

        let name = topics[target].to_string();
        self.select_topic(&name, store)
    }

    /// Keyboard view switching: forward key alone goes Concept → Example,
    /// with the modifier held goes Example → Concept. Anything else,
    /// including no selected topic, is a no-op.
    pub fn switch_view_via_key(&mut self, shift_held: bool) -> bool {
        if self.selected_topic.is_none() {
            return false;
        }
        match (shift_held, self.active_view) {
            (false, ContentView::Concept) => {
                self.active_view = ContentView::Example;
                true
            }
            (true, ContentView::Example) => {
                self.active_view = ContentView::Concept;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_content::{CategoryModule, TopicEntry};

    fn store() -> ContentStore {
        ContentStore::from_modules(vec![
            CategoryModule {
                name: "CSS",
                topics: vec![
                    ("Flexbox", TopicEntry::new("<A>", "<B>")),
                    ("Grid", TopicEntry::concept_only("grid")),
                    ("Specificity", TopicEntry::concept_only("cascade")),
                ],
            },
            CategoryModule {
                name: "JavaScript",
                topics: vec![("Closures", TopicEntry::concept_only("closures"))],
            },
        ])
        .expect("valid store")
    }

    #[test]
    fn category_selection_resets_topic_and_view() {
        let store = store();
        let mut nav = NavigationState::default();

        assert!(nav.select_category("CSS", &store));
        assert!(nav.select_topic("Flexbox", &store));
        assert!(nav.set_view(ContentView::Example));

        assert!(nav.select_category("JavaScript", &store));
        assert_eq!(nav.selected_topic(), None);
        assert_eq!(nav.active_view(), ContentView::Concept);
    }

    #[test]
    fn round_trip_does_not_restore_topic() {
        let store = store();
        let mut nav = NavigationState::default();

        nav.select_category("CSS", &store);
        nav.select_topic("Grid", &store);
        nav.select_category("JavaScript", &store);
        nav.select_category("CSS", &store);

        assert_eq!(nav.selected_topic(), None);
    }

    #[test]
    fn topic_requires_category() {
        let store = store();
        let mut nav = NavigationState::default();

        assert!(!nav.select_topic("Flexbox", &store));
        assert_eq!(nav.selected_topic(), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let store = store();
        let mut nav = NavigationState::default();

        assert!(!nav.select_category("Rust", &store));
        nav.select_category("CSS", &store);
        assert!(!nav.select_topic("Tables", &store));
    }

    #[test]
    fn set_view_is_idempotent() {
        let store = store();
        let mut nav = NavigationState::default();
        nav.select_category("CSS", &store);
        nav.select_topic("Flexbox", &store);

        assert!(!nav.set_view(ContentView::Concept));
        assert!(nav.set_view(ContentView::Example));
        assert!(!nav.set_view(ContentView::Example));
    }

    #[test]
    fn set_view_requires_topic() {
        let store = store();
        let mut nav = NavigationState::default();
        nav.select_category("CSS", &store);

        assert!(!nav.set_view(ContentView::Example));
        assert_eq!(nav.active_view(), ContentView::Concept);
    }

    #[test]
    fn arrow_navigation_follows_store_order() {
        let store = store();
        let mut nav = NavigationState::default();
        nav.select_category("CSS", &store);
        nav.select_topic("Flexbox", &store);

        assert!(nav.navigate_topic(Direction::Next, &store));
        assert_eq!(nav.selected_topic(), Some("Grid"));
        assert!(nav.navigate_topic(Direction::Next, &store));
        assert_eq!(nav.selected_topic(), Some("Specificity"));
        assert!(nav.navigate_topic(Direction::Previous, &store));
        assert_eq!(nav.selected_topic(), Some("Grid"));
    }

    #[test]
    fn arrow_navigation_stops_at_boundaries() {
        let store = store();
        let mut nav = NavigationState::default();
        nav.select_category("CSS", &store);
        nav.select_topic("Flexbox", &store);

        let before = nav.clone();
        assert!(!nav.navigate_topic(Direction::Previous, &store));
        assert_eq!(nav, before);

        nav.select_topic("Specificity", &store);
        let before = nav.clone();
        assert!(!nav.navigate_topic(Direction::Next, &store));
        assert_eq!(nav, before);
    }

    #[test]
    fn arrow_navigation_resets_view() {
        let store = store();
        let mut nav = NavigationState::default();
        nav.select_category("CSS", &store);
        nav.select_topic("Flexbox", &store);
        nav.set_view(ContentView::Example);

        nav.navigate_topic(Direction::Next, &store);
        assert_eq!(nav.active_view(), ContentView::Concept);
    }

    #[test]
    fn arrow_navigation_without_topic_is_noop() {
        let store = store();
        let mut nav = NavigationState::default();
        nav.select_category("CSS", &store);

        assert!(!nav.navigate_topic(Direction::Next, &store));
        assert_eq!(nav.selected_topic(), None);
    }

    #[test]
    fn key_view_switch_contract() {
        let store = store();
        let mut nav = NavigationState::default();

        // No topic selected: every combination is a no-op.
        assert!(!nav.switch_view_via_key(false));
        assert!(!nav.switch_view_via_key(true));

        nav.select_category("CSS", &store);
        nav.select_topic("Flexbox", &store);

        assert!(!nav.switch_view_via_key(true)); // shift on Concept
        assert!(nav.switch_view_via_key(false)); // Concept -> Example
        assert_eq!(nav.active_view(), ContentView::Example);
        assert!(!nav.switch_view_via_key(false)); // forward on Example
        assert!(nav.switch_view_via_key(true)); // Example -> Concept
        assert_eq!(nav.active_view(), ContentView::Concept);
    }
}
