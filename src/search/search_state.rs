use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use crate::lookup::{LookupRequest, LookupResponse};
use crate::suggestion::SuggestionRef;

/// State of the search-and-select component
///
/// `query`, `suggestions` and `selected` are only changed through the
/// methods below. Lookups are fire-and-forget: every response is applied in
/// the order it arrives, so a slow response for an older query can replace
/// the list produced by a newer one.
pub struct SearchState {
    query: String,
    suggestions: Vec<SuggestionRef>,
    selected: Vec<SuggestionRef>,
    /// Highlighted dropdown row
    highlighted: usize,
    /// Focused chip in the selection row
    chip_cursor: usize,
    /// Requests sent whose response has not come back yet
    pending: usize,
    request_tx: Option<UnboundedSender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Create a state with no lookup worker attached
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            selected: Vec::new(),
            highlighted: 0,
            chip_cursor: 0,
            pending: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Create a state that talks to a lookup worker over the given channels
    pub fn with_lookup(
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            ..Self::new()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[SuggestionRef] {
        &self.suggestions
    }

    pub fn selected(&self) -> &[SuggestionRef] {
        &self.selected
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted_suggestion(&self) -> Option<&SuggestionRef> {
        self.suggestions.get(self.highlighted)
    }

    pub fn chip_cursor(&self) -> usize {
        self.chip_cursor
    }

    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// The input text changed to `new_text`
    pub fn on_query_change(&mut self, new_text: &str) {
        self.query = new_text.to_string();
        self.fetch_suggestions(new_text);
    }

    /// Clear the list for an empty term, otherwise send one lookup
    pub fn fetch_suggestions(&mut self, term: &str) {
        if term.is_empty() {
            self.replace_suggestions(Vec::new());
            return;
        }

        let Some(request_tx) = &self.request_tx else {
            log::debug!("No lookup worker, ignoring term '{}'", term);
            return;
        };

        let request = LookupRequest {
            term: term.to_string(),
        };
        if request_tx.send(request).is_ok() {
            self.pending += 1;
        } else {
            log::debug!("Lookup worker gone, ignoring term '{}'", term);
        }
    }

    /// Apply every response the worker has delivered so far
    ///
    /// Returns true if anything was received.
    pub fn poll_responses(&mut self) -> bool {
        let Some(response_rx) = &self.response_rx else {
            return false;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            log::debug!("Lookup worker disconnected");
            self.response_rx = None;
        }

        let received = !responses.is_empty();
        for response in responses {
            self.apply_response(response);
        }
        received
    }

    /// Apply one worker response
    ///
    /// Successful responses replace the list no matter which query they were
    /// for. Failures leave the list as it is.
    pub fn apply_response(&mut self, response: LookupResponse) {
        self.pending = self.pending.saturating_sub(1);

        match response {
            LookupResponse::Suggestions { term, suggestions } => {
                if term != self.query {
                    log::debug!(
                        "Applying response for '{}' while query is '{}'",
                        term,
                        self.query
                    );
                }
                self.replace_suggestions(suggestions.into_iter().map(Arc::new).collect());
            }
            LookupResponse::Failed { term, error } => {
                log::debug!("Lookup '{}' failed: {}", term, error);
            }
        }
    }

    /// Add `suggestion` to the selection and reset the query and dropdown
    ///
    /// Selecting the same suggestion again adds it again.
    pub fn select(&mut self, suggestion: &SuggestionRef) {
        self.selected.push(Arc::clone(suggestion));
        self.query.clear();
        self.replace_suggestions(Vec::new());
    }

    /// Select the highlighted dropdown row, if any
    pub fn select_highlighted(&mut self) -> Option<SuggestionRef> {
        let suggestion = self.highlighted_suggestion().cloned()?;
        self.select(&suggestion);
        Some(suggestion)
    }

    /// Drop every selected entry that is this exact handle
    ///
    /// Entries that are only field-equal to `suggestion` stay.
    pub fn remove(&mut self, suggestion: &SuggestionRef) {
        self.selected.retain(|item| !Arc::ptr_eq(item, suggestion));
        self.clamp_chip_cursor();
    }

    /// Remove the chip under the cursor
    pub fn remove_at_cursor(&mut self) -> Option<SuggestionRef> {
        let suggestion = self.selected.get(self.chip_cursor).cloned()?;
        self.remove(&suggestion);
        Some(suggestion)
    }

    pub fn highlight_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.suggestions.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = if self.highlighted == 0 {
                self.suggestions.len() - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    pub fn chip_next(&mut self) {
        if self.chip_cursor + 1 < self.selected.len() {
            self.chip_cursor += 1;
        }
    }

    pub fn chip_previous(&mut self) {
        self.chip_cursor = self.chip_cursor.saturating_sub(1);
    }

    pub fn set_chip_cursor(&mut self, index: usize) {
        self.chip_cursor = index;
        self.clamp_chip_cursor();
    }

    fn replace_suggestions(&mut self, suggestions: Vec<SuggestionRef>) {
        self.suggestions = suggestions;
        self.highlighted = 0;
    }

    fn clamp_chip_cursor(&mut self) {
        self.chip_cursor = self.chip_cursor.min(self.selected.len().saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
