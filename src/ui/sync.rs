//! The tap-along synchronization view.
//!
//! Shows the previous line for context, the current line with per-word
//! highlighting in word-granularity modes, and a progress gauge over the
//! session's lines. Word states mirror what a tapper needs at a glance:
//! passed words dim, the active word bright, upcoming words plain.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::sync::LyricLine;

use super::create_titled_block;

/// Draw the sync screen.
pub fn draw_sync(f: &mut Frame, app: &App, area: Rect) {
    let Some(cursor) = app.cursor.as_ref() else { return };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // previous line
            Constraint::Min(3),    // current line
            Constraint::Length(3), // progress
        ])
        .split(area);

    // Previous line, dimmed, for context
    let previous = cursor
        .previous_line()
        .map_or("---", |l| l.text.as_str());
    let prev_block = create_titled_block("Previous", false);
    let prev_inner = prev_block.inner(layout[0]);
    f.render_widget(prev_block, layout[0]);
    f.render_widget(
        Paragraph::new(previous)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        prev_inner,
    );

    // Current line, word-highlighted in word granularity
    let current_block = create_titled_block("Now", true);
    let current_inner = current_block.inner(layout[1]);
    f.render_widget(current_block, layout[1]);

    if let Some(line) = cursor.current_line() {
        let rendered = if cursor.mode().is_word_granularity() {
            word_spans(line, cursor.word_idx())
        } else {
            Line::from(Span::styled(
                line.text.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
        };

        // Vertically center within the block
        let pad = current_inner.height.saturating_sub(1) / 2;
        let text_area = Rect {
            x: current_inner.x,
            y: current_inner.y + pad,
            width: current_inner.width,
            height: current_inner.height.saturating_sub(pad).max(1),
        };
        f.render_widget(
            Paragraph::new(rendered).alignment(Alignment::Center),
            text_area,
        );
    }

    // Progress over lines (marker excluded from the total)
    let progress = cursor.progress();
    let gauge = Gauge::default()
        .block(create_titled_block("Progress", false))
        .gauge_style(Style::default().fg(Color::LightBlue))
        .label(format!("{:.0}%", progress * 100.0))
        .ratio(progress);
    f.render_widget(gauge, layout[2]);
}

/// Style one span per word: passed words dim, the active word highlighted,
/// upcoming words plain.
fn word_spans(line: &LyricLine, active: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.words.len() * 2);
    for (i, word) in line.words.iter().enumerate() {
        let style = match active {
            Some(a) if i == a => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Some(a) if i < a => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::White),
        };
        spans.push(Span::styled(word.text.clone(), style));
        if i + 1 < line.words.len() {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}
