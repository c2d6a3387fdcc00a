//! End-to-end navigation tests driving the app through its messages.

use prep_content::{CategoryModule, ContentStore, ContentView, PLACEHOLDER, TopicEntry};
use prep_gui::app::App;
use prep_gui::message::Message;
use prep_gui::state::AppState;

fn fixture_store() -> ContentStore {
    ContentStore::from_modules(vec![
        CategoryModule {
            name: "CSS",
            topics: vec![(
                "Flexbox",
                TopicEntry::new("Flexbox is a layout model.", "```css\n.a { display: flex; }\n```"),
            )],
        },
        CategoryModule {
            name: "HTML",
            topics: vec![("Forms", TopicEntry::example_only("```html\n<form></form>\n```"))],
        },
        CategoryModule {
            name: "JavaScript",
            topics: vec![
                ("Closures", TopicEntry::concept_only("Lexical scope.")),
                ("Hoisting", TopicEntry::concept_only("Declarations move up.")),
                ("Promises", TopicEntry::default()),
            ],
        },
    ])
    .expect("fixture store")
}

fn app() -> App {
    App {
        state: AppState::with_store(fixture_store()),
    }
}

#[test]
fn select_category_then_topic_shows_concept_panel() {
    let mut app = app();

    let _ = app.update(Message::CategorySelected("CSS".to_string()));
    assert_eq!(app.state.current_topics(), ["Flexbox"]);
    assert!(app.state.ui.panel.is_none(), "no panel before a topic is picked");

    let _ = app.update(Message::TopicSelected("Flexbox".to_string()));
    assert_eq!(app.state.nav().active_view(), ContentView::Concept);

    let panel = app.state.ui.panel.as_ref().expect("panel after topic");
    assert_eq!(panel.topic, "Flexbox");
    assert!(panel.source.contains("Flexbox is a layout model."));
}

#[test]
fn view_toggle_swaps_panel_body() {
    let mut app = app();
    let _ = app.update(Message::CategorySelected("CSS".to_string()));
    let _ = app.update(Message::TopicSelected("Flexbox".to_string()));

    let _ = app.update(Message::ViewSelected(ContentView::Example));
    let panel = app.state.ui.panel.as_ref().expect("panel");
    assert_eq!(panel.topic, "Flexbox", "heading unchanged");
    assert!(panel.source.contains("display: flex"));

    // Shift+Tab goes back to Concept.
    app.state.switch_view_via_key(true);
    let panel = app.state.ui.panel.as_ref().expect("panel");
    assert_eq!(app.state.nav().active_view(), ContentView::Concept);
    assert!(panel.source.contains("Flexbox is a layout model."));
}

#[test]
fn reselecting_active_view_is_a_noop() {
    let mut app = app();
    let _ = app.update(Message::CategorySelected("CSS".to_string()));
    let _ = app.update(Message::TopicSelected("Flexbox".to_string()));

    let before = app.state.ui.panel.as_ref().expect("panel").source.clone();
    let _ = app.update(Message::ViewSelected(ContentView::Concept));
    let after = &app.state.ui.panel.as_ref().expect("panel").source;
    assert_eq!(&before, after);
    assert_eq!(app.state.nav().active_view(), ContentView::Concept);
}

#[test]
fn category_round_trip_clears_topic() {
    let mut app = app();
    let _ = app.update(Message::CategorySelected("CSS".to_string()));
    let _ = app.update(Message::TopicSelected("Flexbox".to_string()));
    let _ = app.update(Message::CategorySelected("HTML".to_string()));
    let _ = app.update(Message::CategorySelected("CSS".to_string()));

    assert_eq!(app.state.nav().selected_topic(), None);
    assert!(app.state.ui.panel.is_none());
}

#[test]
fn missing_concept_falls_back_to_example_then_placeholder() {
    let mut app = app();
    let _ = app.update(Message::CategorySelected("HTML".to_string()));
    let _ = app.update(Message::TopicSelected("Forms".to_string()));

    // Concept requested, only an example exists.
    let panel = app.state.ui.panel.as_ref().expect("panel");
    assert_eq!(app.state.nav().active_view(), ContentView::Concept);
    assert_eq!(panel.shown_view, ContentView::Example);
    assert!(panel.source.contains("<form>"));

    // Neither view exists: fixed placeholder, never an empty panel.
    let _ = app.update(Message::CategorySelected("JavaScript".to_string()));
    let _ = app.update(Message::TopicSelected("Promises".to_string()));
    let panel = app.state.ui.panel.as_ref().expect("panel");
    assert!(panel.source.contains(PLACEHOLDER));
}

#[test]
fn search_filters_categories_case_insensitively() {
    let mut app = app();

    let _ = app.update(Message::SearchChanged("java".to_string()));
    assert_eq!(app.state.visible_categories(), ["JavaScript"]);

    let _ = app.update(Message::SearchChanged("JAVA".to_string()));
    assert_eq!(app.state.visible_categories(), ["JavaScript"]);

    let _ = app.update(Message::SearchCleared);
    assert_eq!(app.state.visible_categories(), ["CSS", "HTML", "JavaScript"]);
}

#[test]
fn filtering_does_not_touch_selection() {
    let mut app = app();
    let _ = app.update(Message::CategorySelected("CSS".to_string()));
    let _ = app.update(Message::TopicSelected("Flexbox".to_string()));

    let _ = app.update(Message::SearchChanged("java".to_string()));
    assert_eq!(app.state.nav().selected_category(), Some("CSS"));
    assert_eq!(app.state.nav().selected_topic(), Some("Flexbox"));
}

#[test]
fn arrow_keys_walk_topics_without_wrapping() {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    let mut app = app();
    let _ = app.update(Message::CategorySelected("JavaScript".to_string()));
    let _ = app.update(Message::TopicSelected("Closures".to_string()));

    let right = Message::KeyPressed(Key::Named(Named::ArrowRight), Modifiers::empty());
    let left = Message::KeyPressed(Key::Named(Named::ArrowLeft), Modifiers::empty());

    let _ = app.update(right.clone());
    assert_eq!(app.state.nav().selected_topic(), Some("Hoisting"));

    let _ = app.update(left.clone());
    assert_eq!(app.state.nav().selected_topic(), Some("Closures"));

    // First topic: Left is a no-op.
    let _ = app.update(left);
    assert_eq!(app.state.nav().selected_topic(), Some("Closures"));

    // Last topic: Right is a no-op.
    let _ = app.update(right.clone());
    let _ = app.update(right.clone());
    assert_eq!(app.state.nav().selected_topic(), Some("Promises"));
    let _ = app.update(right);
    assert_eq!(app.state.nav().selected_topic(), Some("Promises"));
}

#[test]
fn tab_key_switches_views() {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    let mut app = app();
    let _ = app.update(Message::CategorySelected("CSS".to_string()));
    let _ = app.update(Message::TopicSelected("Flexbox".to_string()));

    let _ = app.update(Message::KeyPressed(
        Key::Named(Named::Tab),
        Modifiers::empty(),
    ));
    assert_eq!(app.state.nav().active_view(), ContentView::Example);

    let _ = app.update(Message::KeyPressed(
        Key::Named(Named::Tab),
        Modifiers::SHIFT,
    ));
    assert_eq!(app.state.nav().active_view(), ContentView::Concept);

    // Shift+Tab on Concept is a no-op.
    let _ = app.update(Message::KeyPressed(
        Key::Named(Named::Tab),
        Modifiers::SHIFT,
    ));
    assert_eq!(app.state.nav().active_view(), ContentView::Concept);
}

#[test]
fn untagged_code_blocks_get_language_tags() {
    let store = ContentStore::from_modules(vec![CategoryModule {
        name: "SQL",
        topics: vec![(
            "Joins",
            TopicEntry::example_only("```\nSELECT * FROM users;\n```"),
        )],
    }])
    .expect("store");

    let mut state = AppState::with_store(store);
    state.select_category("SQL");
    state.select_topic("Joins");
    state.set_view(ContentView::Example);

    let panel = state.ui.panel.as_ref().expect("panel");
    assert!(panel.source.contains("```sql"), "got: {}", panel.source);
}
