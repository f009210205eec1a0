//! Mouse click handling
//!
//! Clicking a dropdown row selects it, clicking a chip's `[x]` removes it.

use super::app_state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Suggestion(index)) => click_suggestion(app, index),
        Some(Region::ChipRemove(index)) => click_chip_remove(app, index),
        Some(Region::Chip(index)) => click_chip(app, index),
        Some(Region::InputField) => app.focus = Focus::InputField,
        Some(Region::SelectionPane) | None => {}
    }
}

fn click_suggestion(app: &mut App, index: usize) {
    if let Some(suggestion) = app.search.suggestions().get(index).cloned() {
        app.select_suggestion(&suggestion);
        app.focus = Focus::InputField;
    }
}

fn click_chip_remove(app: &mut App, index: usize) {
    if let Some(suggestion) = app.search.selected().get(index).cloned() {
        app.remove_selected(&suggestion);
    }
}

fn click_chip(app: &mut App, index: usize) {
    if index < app.search.selected().len() {
        app.focus = Focus::Selection;
        app.search.set_chip_cursor(index);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
