use ratatui::style::{Color, Modifier, Style};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Search...";

/// Single-line text input for the search query
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Empty the input
    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Insert text at the cursor; line breaks are flattened to spaces
    pub fn insert(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flattened);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
