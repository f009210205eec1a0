//! Tests for App state

use serde_json::json;

use super::*;
use crate::config::{Config, UiConfig};
use crate::test_utils::test_helpers::{handle, suggestion, test_app, test_harness, type_text};

#[test]
fn test_app_initialization() {
    let app = test_app();

    assert_eq!(app.focus, Focus::InputField);
    assert!(!app.should_quit());
    assert!(!app.output_selection());
    assert_eq!(app.query(), "");
    assert!(app.search.suggestions().is_empty());
    assert!(app.search.selected().is_empty());
}

#[test]
fn test_app_takes_dropdown_size_from_config() {
    let config = Config {
        ui: UiConfig {
            max_visible_suggestions: 3,
        },
        ..Config::default()
    };
    let app = App::new(&config);
    assert_eq!(app.max_visible_suggestions, 3);
}

#[test]
fn test_sync_query_only_fires_on_change() {
    let mut harness = test_harness();
    harness.app.input.insert("ca");

    harness.app.sync_query();
    harness.app.sync_query();

    assert_eq!(harness.app.query(), "ca");
    assert_eq!(harness.sent_terms(), vec!["ca"]);
}

#[test]
fn test_select_suggestion_clears_input_and_query_together() {
    let mut harness = test_harness();
    type_text(&mut harness.app, "ca");
    harness.respond("ca", vec![suggestion(1, "Cat"), suggestion(2, "Car")]);

    let cat = harness.app.search.suggestions()[0].clone();
    harness.app.select_suggestion(&cat);

    assert_eq!(harness.app.input.query(), "");
    assert_eq!(harness.app.query(), "");
    assert!(harness.app.search.suggestions().is_empty());
    assert_eq!(harness.app.search.selected().len(), 1);
}

#[test]
fn test_select_highlighted_without_suggestions() {
    let mut app = test_app();
    assert!(!app.select_highlighted());
    assert!(app.search.selected().is_empty());
}

#[test]
fn test_removing_last_chip_returns_focus_to_input() {
    let mut app = test_app();
    let cat = handle(1, "Cat");
    app.select_suggestion(&cat);
    app.focus = Focus::Selection;

    app.remove_selected(&cat);

    assert!(app.search.selected().is_empty());
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_select_highlighted_clears_input() {
    let mut harness = test_harness();
    type_text(&mut harness.app, "ca");
    harness.respond("ca", vec![suggestion(1, "Cat"), suggestion(2, "Car")]);
    harness.app.search.highlight_next();

    assert!(harness.app.select_highlighted());

    assert_eq!(harness.app.input.query(), "");
    assert_eq!(harness.app.search.selected()[0].name, "Car");
    assert!(harness.app.search.suggestions().is_empty());
}

#[test]
fn test_remove_at_cursor_returns_focus_when_empty() {
    let mut app = test_app();
    app.select_suggestion(&handle(1, "Cat"));
    app.select_suggestion(&handle(2, "Car"));
    app.focus = Focus::Selection;
    app.search.set_chip_cursor(1);

    app.remove_at_cursor();
    assert_eq!(app.search.selected().len(), 1);
    assert_eq!(app.focus, Focus::Selection);

    app.remove_at_cursor();
    assert!(app.search.selected().is_empty());
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_remove_at_cursor_without_selection_is_noop() {
    let mut app = test_app();
    app.remove_at_cursor();
    assert!(app.search.selected().is_empty());
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_selection_json_keeps_received_fields() {
    let mut harness = test_harness();
    type_text(&mut harness.app, "e");
    let mut eve = suggestion(7, "Eve");
    eve.extra.insert("kind".to_string(), json!("person"));
    harness.respond("e", vec![eve]);
    assert!(harness.app.select_highlighted());

    let output: serde_json::Value =
        serde_json::from_str(&harness.app.selection_json().unwrap()).unwrap();

    assert_eq!(output, json!([{"id": 7, "name": "Eve", "kind": "person"}]));
}

#[test]
fn test_selection_json_empty() {
    let app = test_app();
    assert_eq!(app.selection_json().unwrap(), "[]");
}

#[test]
fn test_tick_applies_responses() {
    let mut harness = test_harness();
    type_text(&mut harness.app, "x");

    harness
        .responses
        .send(crate::lookup::LookupResponse::Suggestions {
            term: "x".to_string(),
            suggestions: vec![suggestion(4, "X-ray")],
        })
        .unwrap();

    assert!(harness.app.tick());
    assert_eq!(harness.app.search.suggestions().len(), 1);
    assert!(!harness.app.tick());
}
