//! Input field rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

/// Render the search input
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::InputField {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if app.search.is_pending() {
        block = block.title_top(
            Line::from(vec![Span::styled(" searching… ", Style::default().fg(Color::Yellow))])
                .alignment(Alignment::Right),
        );
    }

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
    app.layout_regions.input_field = Some(area);
}
