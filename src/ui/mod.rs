//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod entry;
mod finished;
mod sync;

pub use entry::draw_entry;
pub use finished::draw_finished;
pub use sync::draw_sync;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppMode};

/// Render the full application UI to the terminal frame.
#[allow(clippy::cast_possible_truncation)]
pub fn draw(f: &mut Frame, app: &mut App) {
    // Create the base layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    // Draw the main content based on current mode
    match app.mode {
        AppMode::Splash => draw_splash(f, app, chunks[0]),
        AppMode::Entry => draw_entry(f, app, chunks[0]),
        AppMode::Sync => draw_sync(f, app, chunks[0]),
        AppMode::Finished => draw_finished(f, app, chunks[0]),
    }

    // Draw status/info modal (blocking)
    if let Some(status) = &app.status_message {
        draw_status_message(f, status);
        return;
    }
    // Draw error message if present (blocking)
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    // Draw help modal if shown
    if app.show_help {
        draw_help_modal(f);
    }

    // Draw command/status bar at the bottom (except in splash screen)
    if app.mode == AppMode::Splash {
        // Draw a simple press any key message
        let msg = "Press any key to continue...";

        // Make sure the area is large enough for the message
        if chunks[1].width >= msg.len() as u16 && chunks[1].height >= 3 {
            let width = msg.len() as u16;
            let x = (chunks[1].width.saturating_sub(width)) / 2;
            let y = chunks[1].top() + 1;

            let text_area = Rect {
                x: chunks[1].left() + x,
                y,
                width,
                height: 1,
            };

            let style = Style::default().fg(Color::Yellow);
            f.render_widget(Paragraph::new(msg).style(style), text_area);
        }
    } else {
        draw_command_bar(f, app, chunks[1]);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.mode == AppMode::Entry && app.entry.is_command_mode {
        "Command"
    } else {
        "Commands/Status"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(title, Style::default().fg(Color::Yellow)));

    f.render_widget(block, area);

    // Calculate the inner area to render text with more padding
    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Add a margin of 1 to account for the border
        .split(area)[0];

    if app.mode == AppMode::Entry && app.entry.is_command_mode {
        let command = Paragraph::new(format!(" :{}", app.entry.command_buffer))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(command, inner_area);
        f.set_cursor(
            inner_area.left() + app.entry.command_buffer.len() as u16 + 2,
            inner_area.top(),
        );
    } else {
        // Show context-sensitive help/status
        let help_text = match app.mode {
            AppMode::Splash => vec![], // No help text for splash screen
            AppMode::Entry => {
                let audio = app.audio_path.as_ref().map_or_else(
                    || "none".to_string(),
                    |p| p.display().to_string(),
                );
                let status = format!(
                    "Ln {}, Col {} | Mode: {} | Audio: {audio}",
                    app.entry.cursor_y + 1,
                    app.entry.cursor_x + 1,
                    app.sync_mode
                );
                let mut text = create_help_text(&[
                    (":start", "Sync"),
                    (":mode", "line|word|adlib"),
                    (":audio", "<path>"),
                    ("F2", "Cycle mode"),
                    (":q", "Quit"),
                ]);
                text.push(Span::styled(
                    format!(" | {status}"),
                    Style::default().fg(Color::Gray),
                ));
                text
            }
            AppMode::Sync => {
                let clock = if app.clock.is_running() { "" } else { " (paused)" };
                let mut text = create_help_text(&[
                    ("Space", "Tap"),
                    ("p", "Pause/Resume"),
                    ("ESC", "Abandon"),
                ]);
                text.push(Span::styled(
                    format!(" | {}{clock}", app.clock.now()),
                    Style::default().fg(Color::Gray),
                ));
                text
            }
            AppMode::Finished => create_help_text(&[
                ("s", "Save .lrc"),
                ("c", "Copy"),
                ("n", "New session"),
                ("q", "Quit"),
            ]),
        };

        let status_bar =
            Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, inner_area);
    }
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        // Add the key with bold styling
        text.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));

        // Add the description
        text.push(Span::raw(format!(": {description}")));

        // Add separator unless it's the last item
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

#[allow(clippy::cast_possible_truncation)]
fn draw_splash(f: &mut Frame, _app: &App, area: Rect) {
    // Define ASCII art logo for the app
    let logo = vec![
        r"  _            _                   ",
        r" | |_ __ ___  | |_  __ _  _ __     ",
        r" | | '__/ __| | __|/ _` || '_ \    ",
        r" | | | | (__  | |_| (_| || |_) |   ",
        r" |_|_|  \___|  \__|\__,_|| .__/    ",
        r"                         |_|       ",
        r"                                   ",
        r"    Tap along. Walk away with LRC.  ",
        r"                                   ",
    ];

    // Use block to create a nice border around the splash
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue))
        .title(Span::styled(
            "lrctap",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));

    f.render_widget(block, area);

    // Calculate center position (accounting for border)
    let logo_height = logo.len() as u16;
    let logo_width = logo[0].len() as u16;

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Add a margin to account for the border
        .split(area)[0];

    let vertical_pad = (inner_area.height.saturating_sub(logo_height)) / 2;
    let horizontal_pad = (inner_area.width.saturating_sub(logo_width)) / 2;

    // Render each line of the logo
    for (i, line) in logo.iter().enumerate() {
        let y = inner_area.top() + vertical_pad + i as u16;
        if y >= inner_area.bottom() {
            break;
        }

        let text_area = Rect {
            x: inner_area.left() + horizontal_pad,
            y,
            width: line.len() as u16,
            height: 1,
        };

        let style = if i < 6 {
            // Logo itself is light blue
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
        } else {
            // Tagline is yellow
            Style::default().fg(Color::Yellow)
        };

        f.render_widget(Paragraph::new(*line).style(style), text_area);
    }

    // Add version info at the bottom
    let version_text = concat!("v", env!("CARGO_PKG_VERSION"));

    // Make sure the area is large enough to display the version
    if area.width > (version_text.len() + 2) as u16 && area.height >= 2 {
        let version_area = Rect {
            x: area.right() - version_text.len() as u16 - 2,
            y: area.bottom() - 2,
            width: version_text.len() as u16,
            height: 1,
        };

        f.render_widget(
            Paragraph::new(version_text).style(Style::default().fg(Color::Gray)),
            version_area,
        );
    }
}

// Draw an error message overlay
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();

    // Create a smaller centered box for the error message
    let width = 46.min(size.width.saturating_sub(4));
    let height = 6;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    // Create a block with a border
    let block = Block::default()
        .title(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    // Create error text with word wrapping
    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    // Adjust area for inner text
    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for a "Press Esc to dismiss" hint
        ])
        .margin(1) // Add a margin for the border
        .split(area);

    f.render_widget(text, inner_area[0]);

    // Add "Press Esc to dismiss" hint
    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_status_message(f: &mut Frame, message: &str) {
    use unicode_width::UnicodeWidthStr;
    let size = f.size();

    // Calculate box width (max 80% of screen, min 50)
    let max_width = (size.width as usize * 80) / 100;
    let width = message.width().saturating_add(6).min(max_width).max(50) as u16;

    // Calculate how many lines the message will need when wrapped
    let inner_width = width.saturating_sub(4) as usize; // account for borders + margin
    let msg_lines = message.width().div_ceil(inner_width.max(1));
    let height = (msg_lines as u16 + 4).min(size.height.saturating_sub(4));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Info",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // message (flexible)
            Constraint::Length(1), // hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

fn draw_help_modal(f: &mut Frame) {
    let size = f.size();

    let width = 56.min(size.width.saturating_sub(4));
    let height = 16.min(size.height.saturating_sub(2));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Help",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Lyrics entry", Style::default().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![Span::styled("  :audio <path>  ", key_style), Span::raw("pick the audio file to sync against")]),
        Line::from(vec![Span::styled("  :mode <m>      ", key_style), Span::raw("line, word or adlib tapping")]),
        Line::from(vec![Span::styled("  :start         ", key_style), Span::raw("begin the sync session")]),
        Line::from(""),
        Line::from(Span::styled("Syncing", Style::default().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![Span::styled("  Space/Enter    ", key_style), Span::raw("tap: stamp the current line or word")]),
        Line::from(vec![Span::styled("  p              ", key_style), Span::raw("pause/resume the playback clock")]),
        Line::from(vec![Span::styled("  Esc            ", key_style), Span::raw("abandon the session")]),
        Line::from(""),
        Line::from(Span::styled("Finished", Style::default().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![Span::styled("  s / c          ", key_style), Span::raw("save <audio>.lrc / copy to clipboard")]),
    ];

    let text = Paragraph::new(lines).wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(block.clone(), area);
    f.render_widget(text, block.inner(area));
}
