//! Layout module for tracking UI component regions
//!
//! Rendering records where the input, dropdown rows and chips landed so a
//! mouse click can be mapped back to what was under it.

use ratatui::layout::{Position, Rect};

/// Clickable UI component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// Dropdown row, by index into the suggestion list
    Suggestion(usize),
    /// Chip body, by index into the selected options
    Chip(usize),
    /// Chip removal control, by index into the selected options
    ChipRemove(usize),
    SelectionPane,
}

/// Screen areas recorded during the last render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub selection_pane: Option<Rect>,
    pub suggestion_rows: Vec<(Rect, usize)>,
    pub chips: Vec<(Rect, usize)>,
    pub chip_removes: Vec<(Rect, usize)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Find the region at a screen position
///
/// The dropdown is drawn over the selection pane, so its rows are checked
/// first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let pos = Position::new(column, row);

    if let Some((_, index)) = regions.suggestion_rows.iter().find(|(r, _)| r.contains(pos)) {
        return Some(Region::Suggestion(*index));
    }
    if let Some((_, index)) = regions.chip_removes.iter().find(|(r, _)| r.contains(pos)) {
        return Some(Region::ChipRemove(*index));
    }
    if let Some((_, index)) = regions.chips.iter().find(|(r, _)| r.contains(pos)) {
        return Some(Region::Chip(*index));
    }
    if regions.input_field.is_some_and(|r| r.contains(pos)) {
        return Some(Region::InputField);
    }
    if regions.selection_pane.is_some_and(|r| r.contains(pos)) {
        return Some(Region::SelectionPane);
    }
    None
}
