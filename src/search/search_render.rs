//! Suggestion dropdown and selection row rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::widgets::popup;

const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const KEY_LABEL_SPACING: usize = 3;
const REMOVE_LABEL: &str = "[x]";
const CHIP_GAP: u16 = 1;

/// First visible row so the highlighted one stays in view
fn scroll_start(highlighted: usize, visible: usize) -> usize {
    if visible == 0 || highlighted < visible {
        0
    } else {
        highlighted + 1 - visible
    }
}

/// Render the suggestion dropdown under the input field
///
/// Nothing is drawn while the suggestion list is empty.
pub fn render_dropdown(app: &mut App, frame: &mut Frame, input_area: Rect) {
    app.layout_regions.suggestion_rows.clear();

    let suggestions = app.search.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let max_visible = app.max_visible_suggestions.max(1);
    let visible_count = suggestions.len().min(max_visible);
    let popup_height = u16::try_from(visible_count)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);

    let title = format!(" Suggestions ({}) ", suggestions.len());
    let max_name_width = suggestions
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);
    let max_key_width = suggestions
        .iter()
        .map(|s| s.key().width() + 1)
        .max()
        .unwrap_or(0);
    let content_width = (max_name_width + max_key_width + KEY_LABEL_SPACING)
        .max(title.width())
        .min(MAX_POPUP_WIDTH);
    let popup_width = (content_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    // The popup may be clipped by the terminal; scroll within the rows that remain
    let inner = popup::inset_rect(popup_area, 1, 1);
    let shown_count = visible_count.min(inner.height as usize);
    let highlighted = app.search.highlighted();
    let start = scroll_start(highlighted, shown_count);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(start)
        .take(shown_count)
        .map(|(i, suggestion)| {
            let padding = " ".repeat(max_name_width.saturating_sub(suggestion.name.width()));
            let key_label = format!("#{}", suggestion.key());

            let line = if i == highlighted {
                Line::from(vec![
                    Span::styled(
                        format!("► {} {}", suggestion.name, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {}", key_label),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {} {}", suggestion.name, padding),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(
                        format!(" {}", key_label),
                        Style::default().fg(Color::DarkGray).bg(Color::Black),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let rows: Vec<(Rect, usize)> = (0..shown_count)
        .map(|offset| start + offset)
        .filter(|&index| index < suggestions.len())
        .enumerate()
        .map(|(row, index)| (Rect::new(inner.x, inner.y + row as u16, inner.width, 1), index))
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    app.layout_regions.suggestion_rows = rows;
}

/// Render the selected options as chips, each with a removal control
pub fn render_selection(app: &mut App, frame: &mut Frame, area: Rect) {
    app.layout_regions.chips.clear();
    app.layout_regions.chip_removes.clear();
    app.layout_regions.selection_pane = Some(area);

    let focused = app.focus == Focus::Selection;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let selected = app.search.selected();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Selected ({}) ", selected.len()))
        .border_style(Style::default().fg(border_color));

    if selected.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner = popup::inset_rect(area, 1, 1);
    let remove_width = REMOVE_LABEL.width() as u16;

    let mut lines: Vec<Line> = vec![Line::default()];
    let mut x = 0u16;
    let mut row = 0u16;

    for (index, option) in selected.iter().enumerate() {
        let label = format!(" {} ", option.name);
        let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        let chip_width = label_width.saturating_add(remove_width);

        if x > 0 && x.saturating_add(CHIP_GAP).saturating_add(chip_width) > inner.width {
            lines.push(Line::default());
            x = 0;
            row = row.saturating_add(1);
        }

        let is_cursor = focused && index == app.search.chip_cursor();
        let (label_style, remove_style) = if is_cursor {
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Red).bg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::White).bg(Color::Blue),
                Style::default().fg(Color::Red).bg(Color::Blue),
            )
        };

        if let Some(line) = lines.last_mut() {
            if x > 0 {
                line.spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
            }
            line.spans.push(Span::styled(label, label_style));
            line.spans.push(Span::styled(REMOVE_LABEL, remove_style));
        }

        let chip_x = if x > 0 { x.saturating_add(CHIP_GAP) } else { x };
        if row < inner.height && chip_x < inner.width {
            let visible_width = chip_width.min(inner.width - chip_x);
            app.layout_regions
                .chips
                .push((Rect::new(inner.x + chip_x, inner.y + row, visible_width, 1), index));

            let remove_x = chip_x.saturating_add(label_width);
            if remove_x < inner.width {
                let visible_remove = remove_width.min(inner.width - remove_x);
                app.layout_regions.chip_removes.push((
                    Rect::new(inner.x + remove_x, inner.y + row, visible_remove, 1),
                    index,
                ));
            }
        }

        x = chip_x.saturating_add(chip_width);
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
