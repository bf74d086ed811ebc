//! Finished session view: preview of the serialized LRC output.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::lrc;

use super::create_titled_block;

/// Draw the finished screen with the output preview.
pub fn draw_finished(f: &mut Frame, app: &App, area: Rect) {
    let title = app.audio_path.as_ref().map_or_else(
        || "Result".to_string(),
        |p| format!("Result: {}", lrc::output_file_name(p)),
    );
    let block = create_titled_block(&title, true);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(output) = app.output.as_ref() else { return };

    let lines: Vec<Line> = output
        .lines()
        .take(inner.height as usize)
        .map(Line::from)
        .collect();

    f.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::White)),
        inner,
    );
}
