use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::layout::{Region, region_at};

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::Selection => self.handle_selection_key(key),
        }
    }

    /// Pasted text is inserted at the cursor as one edit
    pub fn handle_paste_event(&mut self, text: String) {
        self.focus = Focus::InputField;
        self.input.insert(&text);
        self.sync_query();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, region),
            MouseEventKind::ScrollDown if matches!(region, Some(Region::Suggestion(_))) => {
                self.search.highlight_next();
            }
            MouseEventKind::ScrollUp if matches!(region, Some(Region::Suggestion(_))) => {
                self.search.highlight_previous();
            }
            _ => {}
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }
        false
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                if !self.select_highlighted() {
                    self.output_selection = true;
                    self.should_quit = true;
                }
            }
            KeyCode::Down => self.search.highlight_next(),
            KeyCode::Up => self.search.highlight_previous(),
            KeyCode::Char('n') if ctrl => self.search.highlight_next(),
            KeyCode::Char('p') if ctrl => self.search.highlight_previous(),
            // Would insert a line break in the textarea
            KeyCode::Char('m') if ctrl => {}
            KeyCode::Tab | KeyCode::BackTab => {
                if !self.search.selected().is_empty() {
                    self.focus = Focus::Selection;
                }
            }
            _ => {
                if self.input.textarea.input(key) {
                    self.sync_query();
                }
            }
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = Focus::InputField;
            }
            KeyCode::Enter => {
                self.output_selection = true;
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.search.chip_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.search.chip_next(),
            KeyCode::Home => self.search.set_chip_cursor(0),
            KeyCode::End => self
                .search
                .set_chip_cursor(self.search.selected().len().saturating_sub(1)),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('x') => self.remove_at_cursor(),
            _ => {}
        }
    }
}
