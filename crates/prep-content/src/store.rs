//! The content store: categories, topics, and view resolution.

use std::collections::BTreeMap;

use crate::catalog;
use crate::error::{ContentError, Result};

/// Shown when a topic has neither concept nor example content.
pub const PLACEHOLDER: &str = "No content available for this topic yet.";

/// Which rendering of a topic is requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentView {
    /// Explanatory/theory notes (default)
    #[default]
    Concept,

    /// Code sample
    Example,
}

impl ContentView {
    /// Display name for the view toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Concept => "Concept",
            Self::Example => "Example",
        }
    }

    /// The opposite view, used for missing-content fallback.
    pub fn sibling(self) -> Self {
        match self {
            Self::Concept => Self::Example,
            Self::Example => Self::Concept,
        }
    }

    /// Both views in toggle order.
    pub const fn all() -> &'static [ContentView] {
        &[Self::Concept, Self::Example]
    }
}

/// Authored content for a single topic.
///
/// Both fields are pre-formatted Markdown fragments. At least one is
/// expected to be present; [`TopicEntry::resolve`] degrades gracefully
/// when that expectation is broken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicEntry {
    pub concept: Option<String>,
    pub example: Option<String>,
}

impl TopicEntry {
    /// Entry with both views present.
    pub fn new(concept: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            concept: Some(concept.into()),
            example: Some(example.into()),
        }
    }

    /// Entry with only a concept body.
    pub fn concept_only(concept: impl Into<String>) -> Self {
        Self {
            concept: Some(concept.into()),
            example: None,
        }
    }

    /// Entry with only a code sample.
    pub fn example_only(example: impl Into<String>) -> Self {
        Self {
            concept: None,
            example: Some(example.into()),
        }
    }

    fn body(&self, view: ContentView) -> Option<&str> {
        match view {
            ContentView::Concept => self.concept.as_deref(),
            ContentView::Example => self.example.as_deref(),
        }
    }

    /// Resolve the body for `view`, falling back to the sibling view's
    /// body and finally to [`PLACEHOLDER`]. Never empty.
    pub fn resolve(&self, view: ContentView) -> Resolved<'_> {
        if let Some(body) = self.body(view) {
            return Resolved { view, body };
        }
        if let Some(body) = self.body(view.sibling()) {
            return Resolved {
                view: view.sibling(),
                body,
            };
        }
        Resolved {
            view,
            body: PLACEHOLDER,
        }
    }
}

/// Outcome of view resolution: the body actually shown and the view it
/// came from (which differs from the requested view after a fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub view: ContentView,
    pub body: &'a str,
}

/// One independently authored category: its display name plus topics in
/// authored form. Produced by the modules in [`crate::catalog`].
pub struct CategoryModule {
    pub name: &'static str,
    pub topics: Vec<(&'static str, TopicEntry)>,
}

/// The full read-only mapping of categories → topics → content.
///
/// Key order of the underlying `BTreeMap`s is the store's natural order,
/// used both for rendering lists and for previous/next topic navigation.
#[derive(Debug, Default)]
pub struct ContentStore {
    categories: BTreeMap<String, BTreeMap<String, TopicEntry>>,
}

impl ContentStore {
    /// Merge independently authored category modules into one store.
    ///
    /// Fails on duplicate category names, duplicate topics within a
    /// category, or empty names.
    pub fn from_modules(modules: Vec<CategoryModule>) -> Result<Self> {
        let mut categories: BTreeMap<String, BTreeMap<String, TopicEntry>> = BTreeMap::new();

        for module in modules {
            if module.name.is_empty() {
                return Err(ContentError::EmptyName("category"));
            }
            if categories.contains_key(module.name) {
                return Err(ContentError::DuplicateCategory(module.name.to_string()));
            }

            let mut topics = BTreeMap::new();
            for (name, entry) in module.topics {
                if name.is_empty() {
                    return Err(ContentError::EmptyName("topic"));
                }
                if topics.insert(name.to_string(), entry).is_some() {
                    return Err(ContentError::DuplicateTopic {
                        category: module.name.to_string(),
                        topic: name.to_string(),
                    });
                }
            }
            categories.insert(module.name.to_string(), topics);
        }

        Ok(Self { categories })
    }

    /// The built-in catalog shipped with the application.
    ///
    /// # Panics
    ///
    /// Panics if the authored catalog contains duplicates; `catalog`
    /// tests keep that from shipping.
    pub fn builtin() -> Self {
        match Self::from_modules(catalog::modules()) {
            Ok(store) => store,
            Err(err) => panic!("built-in catalog is invalid: {err}"),
        }
    }

    /// Category names in natural order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Whether `name` is a category of this store.
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Topic names of `category` in natural order. Empty for an unknown
    /// category (defensive, not an expected path).
    pub fn topic_names(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|topics| topics.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Look up a topic entry.
    pub fn entry(&self, category: &str, topic: &str) -> Option<&TopicEntry> {
        self.categories.get(category)?.get(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &'static str, topics: Vec<(&'static str, TopicEntry)>) -> CategoryModule {
        CategoryModule { name, topics }
    }

    #[test]
    fn merges_modules_in_key_order() {
        let store = ContentStore::from_modules(vec![
            module("JavaScript", vec![("Closures", TopicEntry::default())]),
            module("CSS", vec![("Flexbox", TopicEntry::default())]),
        ])
        .expect("merge");

        let names: Vec<&str> = store.category_names().collect();
        assert_eq!(names, ["CSS", "JavaScript"]);
        assert_eq!(store.topic_names("CSS"), ["Flexbox"]);
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let err = ContentStore::from_modules(vec![
            module("CSS", vec![]),
            module("CSS", vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, ContentError::DuplicateCategory("CSS".to_string()));
    }

    #[test]
    fn duplicate_topic_is_rejected() {
        let err = ContentStore::from_modules(vec![module(
            "CSS",
            vec![
                ("Flexbox", TopicEntry::default()),
                ("Flexbox", TopicEntry::default()),
            ],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateTopic {
                category: "CSS".to_string(),
                topic: "Flexbox".to_string(),
            }
        );
    }

    #[test]
    fn resolve_prefers_requested_view() {
        let entry = TopicEntry::new("theory", "code");
        let resolved = entry.resolve(ContentView::Example);
        assert_eq!(resolved.view, ContentView::Example);
        assert_eq!(resolved.body, "code");
    }

    #[test]
    fn resolve_falls_back_to_sibling_then_placeholder() {
        let entry = TopicEntry::example_only("code");
        let resolved = entry.resolve(ContentView::Concept);
        assert_eq!(resolved.view, ContentView::Example);
        assert_eq!(resolved.body, "code");

        let empty = TopicEntry::default();
        let resolved = empty.resolve(ContentView::Concept);
        assert_eq!(resolved.body, PLACEHOLDER);
    }

    #[test]
    fn unknown_keys_degrade_to_empty() {
        let store = ContentStore::from_modules(vec![]).expect("merge");
        assert!(store.topic_names("nope").is_empty());
        assert!(store.entry("nope", "nope").is_none());
    }
}
