use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::lookup::{LookupRequest, LookupResponse};
use crate::search::SearchState;
use crate::suggestion::{Suggestion, SuggestionRef};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    Selection,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub focus: Focus,
    pub should_quit: bool,
    /// Print the selection when exiting (Enter)
    pub output_selection: bool,
    pub layout_regions: LayoutRegions,
    pub max_visible_suggestions: usize,
}

impl App {
    /// Create an App with no lookup worker; queries never produce suggestions
    pub fn new(config: &Config) -> Self {
        Self::with_search(config, SearchState::new())
    }

    /// Create an App wired to a lookup worker
    pub fn with_lookup(
        config: &Config,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        Self::with_search(config, SearchState::with_lookup(request_tx, response_rx))
    }

    fn with_search(config: &Config, search: SearchState) -> Self {
        Self {
            input: InputState::new(),
            search,
            focus: Focus::InputField,
            should_quit: false,
            output_selection: false,
            layout_regions: LayoutRegions::new(),
            max_visible_suggestions: config.ui.max_visible_suggestions,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_selection(&self) -> bool {
        self.output_selection
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Apply lookup responses that arrived since the last tick
    pub fn tick(&mut self) -> bool {
        self.search.poll_responses()
    }

    /// Report the input text to the search state if it changed
    pub fn sync_query(&mut self) {
        let text = self.input.query();
        if text != self.search.query() {
            let text = text.to_string();
            self.search.on_query_change(&text);
        }
    }

    /// Pick a suggestion; the input is emptied in the same step
    pub fn select_suggestion(&mut self, suggestion: &SuggestionRef) {
        self.search.select(suggestion);
        self.input.clear();
    }

    /// Pick the highlighted suggestion, returning false if the dropdown is empty
    pub fn select_highlighted(&mut self) -> bool {
        if self.search.select_highlighted().is_none() {
            return false;
        }
        self.input.clear();
        true
    }

    pub fn remove_selected(&mut self, suggestion: &SuggestionRef) {
        self.search.remove(suggestion);
        self.refocus_if_selection_empty();
    }

    /// Remove the chip under the cursor
    pub fn remove_at_cursor(&mut self) {
        if self.search.remove_at_cursor().is_some() {
            self.refocus_if_selection_empty();
        }
    }

    fn refocus_if_selection_empty(&mut self) {
        if self.search.selected().is_empty() {
            self.focus = Focus::InputField;
        }
    }

    /// Selected options as a JSON array, each entry as it was received
    pub fn selection_json(&self) -> serde_json::Result<String> {
        let selected: Vec<&Suggestion> = self.search.selected().iter().map(|s| s.as_ref()).collect();
        serde_json::to_string_pretty(&selected)
    }
}
