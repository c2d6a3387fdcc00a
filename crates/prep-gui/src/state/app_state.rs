//! Application-level state.
//!
//! `AppState` is the root of all state: the immutable content store, the
//! navigation state machine, and presentation state. Transition methods
//! here wrap `NavigationState` and keep the cached panel document in
//! sync, rebuilding it only when a transition actually changed state.

use prep_content::{ContentStore, ContentView, TopicEntry};

use super::navigation::{Direction, NavigationState};
use super::ui_state::{PanelDocument, UiState, category_matches};

/// Top-level application state.
pub struct AppState {
    /// The merged, read-only content store.
    pub store: ContentStore,
    /// Selection/view state machine.
    nav: NavigationState,
    /// Search query and cached panel document.
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_store(ContentStore::builtin())
    }
}

impl AppState {
    /// State over an explicit store (tests use small fixture stores).
    pub fn with_store(store: ContentStore) -> Self {
        Self {
            store,
            nav: NavigationState::default(),
            ui: UiState::default(),
        }
    }

    /// Read access to the navigation state.
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    /// Category names matching the current search query, in store order.
    pub fn visible_categories(&self) -> Vec<&str> {
        self.store
            .category_names()
            .filter(|name| category_matches(name, &self.ui.search_query))
            .collect()
    }

    /// Topic names of the selected category, in store order.
    pub fn current_topics(&self) -> Vec<&str> {
        self.nav
            .selected_category()
            .map(|category| self.store.topic_names(category))
            .unwrap_or_default()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    pub fn select_category(&mut self, name: &str) {
        if self.nav.select_category(name, &self.store) {
            tracing::debug!(category = name, "category selected");
            // No topic selected yet, so no panel either.
            self.ui.panel = None;
        }
    }

    pub fn select_topic(&mut self, name: &str) {
        if self.nav.select_topic(name, &self.store) {
            tracing::debug!(topic = name, "topic selected");
            self.rebuild_panel();
        }
    }

    pub fn set_view(&mut self, view: ContentView) {
        if self.nav.set_view(view) {
            self.rebuild_panel();
        }
    }

    pub fn navigate_topic(&mut self, direction: Direction) {
        if self.nav.navigate_topic(direction, &self.store) {
            self.rebuild_panel();
        }
    }

    pub fn switch_view_via_key(&mut self, shift_held: bool) {
        if self.nav.switch_view_via_key(shift_held) {
            self.rebuild_panel();
        }
    }

    /// Re-derive the cached panel document from the current selection.
    ///
    /// A selection pointing at a missing entry renders the placeholder
    /// (defensive; the UI only offers valid keys).
    fn rebuild_panel(&mut self) {
        let selection = self
            .nav
            .selected_category()
            .zip(self.nav.selected_topic());
        let Some((category, topic)) = selection else {
            self.ui.panel = None;
            return;
        };

        let fallback = TopicEntry::default();
        let entry = self.store.entry(category, topic).unwrap_or(&fallback);
        self.ui.panel = Some(PanelDocument::build(topic, entry, self.nav.active_view()));
    }
}
