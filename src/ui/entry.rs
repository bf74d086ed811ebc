//! Lyrics entry editor view.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::create_titled_block;

/// Draw the lyrics entry editor: one line per future lyric line, with the
/// terminal cursor at the edit position.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_entry(f: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .split(area);

    let title = format!("Lyrics ({} mode)", app.sync_mode);
    let block = create_titled_block(&title, !app.entry.is_command_mode);
    let inner_area = block.inner(layout[0]);
    f.render_widget(block, layout[0]);

    // Update the viewport height so scrolling works correctly
    app.entry.viewport_height = inner_area.height as usize;

    // Calculate the visible portion of the content
    let start_line = app.entry.scroll_offset;
    let end_line =
        (app.entry.scroll_offset + inner_area.height as usize).min(app.entry.content.len());

    let visible: Vec<Line> = app.entry.content[start_line..end_line]
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();

    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(Color::White)),
        inner_area,
    );

    // Place the terminal cursor at the edit position. The screen column is
    // the display width of the text before the cursor, not the char count.
    if !app.entry.is_command_mode {
        let cursor_y = app.entry.cursor_y.saturating_sub(start_line);
        if cursor_y < inner_area.height as usize {
            let line = app.entry.current_line();
            let cursor_col = line[..app.entry.cursor_byte()].width();
            f.set_cursor(
                inner_area.left() + cursor_col as u16,
                inner_area.top() + cursor_y as u16,
            );
        }
    }
}
