//! Help line rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::InputField if !app.search.suggestions().is_empty() => {
            " ↑/↓: Highlight | Enter: Select | Esc: Quit"
        }
        Focus::InputField => " Enter: Done | Tab: Selected | Esc: Quit",
        Focus::Selection => " ←/→: Move | x: Remove | Enter: Done | Tab: Back",
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
