use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use super::help_line;
use crate::input::input_render;
use crate::search::search_render;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Selected options
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        let input_area = layout[0];
        let selection_area = layout[1];
        let help_area = layout[2];

        input_render::render_field(self, frame, input_area);
        search_render::render_selection(self, frame, selection_area);
        help_line::render_line(self, frame, help_area);

        // Drawn last so it overlays the selection pane
        search_render::render_dropdown(self, frame, input_area);
    }
}
