//! Application state and key handling.
//!
//! The [`App`] owns one sync session end to end: the lyrics entry editor,
//! the [`SyncCursor`] while tapping, the playback stopwatch, and the
//! serialized result. All state lives on this struct and is passed into the
//! UI and input layers by reference; nothing is ambient.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent};

use crate::config::Config;
use crate::error::Error;
use crate::input::{
    FinishedHandler, GlobalHandler, InputContext, InputHandler, InputResult, SplashHandler,
    SyncHandler,
};
use crate::lrc;
use crate::session::Session;
use crate::sync::{SyncCursor, SyncMode, TapOutcome};
use crate::timestamp::Timestamp;

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Initial splash screen.
    Splash,
    /// Lyrics entry editor.
    Entry,
    /// Tap-along synchronization screen.
    Sync,
    /// Finished session with serialized output.
    Finished,
}

/// Stopwatch standing in for the external audio playback clock.
///
/// The user starts it together with their audio player; the cursor itself
/// only ever sees [`Timestamp`] values read from here per tap.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl PlaybackClock {
    /// Start or resume the clock. No-op while already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Pause the clock, banking the elapsed time.
    pub fn pause(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Toggle between running and paused.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Whether the clock is currently advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current playback position.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        let elapsed = self.accumulated
            + self.started_at.map_or(Duration::ZERO, |s| s.elapsed());
        Timestamp::from_duration(elapsed)
    }

    /// Reset to zero, stopped.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }
}

/// State of the lyrics entry editor.
#[derive(Debug, Clone)]
pub struct EntryState {
    /// Editor lines.
    pub content: Vec<String>,
    /// Cursor column, counted in characters rather than bytes.
    pub cursor_x: usize,
    /// Cursor line.
    pub cursor_y: usize,
    /// First visible line.
    pub scroll_offset: usize,
    /// Visible height, updated by the UI each frame.
    pub viewport_height: usize,
    /// Pending `:` command text.
    pub command_buffer: String,
    /// Whether the command bar is capturing input.
    pub is_command_mode: bool,
}

impl Default for EntryState {
    fn default() -> Self {
        Self {
            content: vec![String::new()],
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            viewport_height: 20, // Default value until UI updates it
            command_buffer: String::new(),
            is_command_mode: false,
        }
    }
}

impl EntryState {
    /// Whether the editor holds any non-blank line.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.iter().any(|line| !line.trim().is_empty())
    }

    /// Text of the line the cursor is on.
    #[must_use]
    pub fn current_line(&self) -> &str {
        self.content.get(self.cursor_y).map_or("", String::as_str)
    }

    /// Byte offset of the cursor within the current line.
    #[must_use]
    pub fn cursor_byte(&self) -> usize {
        byte_index(self.current_line(), self.cursor_x)
    }
}

/// Byte offset of character column `col` in `line`, clamped to the line end.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

/// Top-level application state.
pub struct App {
    /// Current screen.
    pub mode: AppMode,
    /// Lyrics entry editor state.
    pub entry: EntryState,
    /// Sync mode for the next/current session.
    pub sync_mode: SyncMode,
    /// Audio file the session is synced against.
    pub audio_path: Option<PathBuf>,
    /// The active sync cursor, while on the sync screen or finished.
    pub cursor: Option<SyncCursor>,
    /// Playback stopwatch.
    pub clock: PlaybackClock,
    /// Serialized LRC output, once the session completed.
    pub output: Option<String>,
    /// Where the output was last written, if saved.
    pub saved_path: Option<PathBuf>,
    /// Blocking error message, dismissed with Esc.
    pub error_message: Option<String>,
    /// Blocking status message, dismissed with Esc.
    pub status_message: Option<String>,
    /// Whether the help modal is shown.
    pub show_help: bool,
    /// Application configuration.
    pub config: Config,
    /// Where the draft session is persisted; `None` disables persistence.
    session_file: Option<PathBuf>,
    should_quit: bool,
}

impl App {
    /// Create the application, restoring any saved draft session.
    #[must_use]
    pub fn new() -> Self {
        // Load configuration (fallback to default on error)
        let config = Config::load().unwrap_or_default();
        let session = Session::load();
        let session_file = Session::default_path();
        Self::from_parts(config, session, session_file)
    }

    /// Build the application from explicit parts, without touching the
    /// filesystem. The draft is written back to `session_file` when set.
    #[must_use]
    pub fn from_parts(
        config: Config,
        session: Session,
        session_file: Option<PathBuf>,
    ) -> Self {
        let entry = if session.has_lyrics() {
            EntryState {
                content: session.lyrics.clone(),
                ..EntryState::default()
            }
        } else {
            EntryState::default()
        };
        let sync_mode = if session.has_lyrics() {
            session.mode
        } else {
            config.default_mode
        };

        Self {
            mode: AppMode::Splash,
            entry,
            sync_mode,
            audio_path: session.audio_path,
            cursor: None,
            clock: PlaybackClock::default(),
            output: None,
            saved_path: None,
            error_message: None,
            status_message: None,
            show_help: false,
            config,
            session_file,
            should_quit: false,
        }
    }

    /// Whether the main loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request a clean exit, saving the draft session first.
    pub fn quit(&mut self) {
        self.persist_session();
        self.should_quit = true;
    }

    /// Best-effort draft persistence; a lost draft is an inconvenience, not
    /// an error worth interrupting the user for.
    fn persist_session(&self) {
        let Some(path) = self.session_file.as_ref() else { return };
        let session = Session {
            lyrics: self.entry.content.clone(),
            mode: self.sync_mode,
            audio_path: self.audio_path.clone(),
        };
        if let Err(e) = session.save_to(path) {
            tracing::warn!("Failed to save session to {}: {e}", path.display());
        }
    }

    /// Drive time-based work: commit a deferred word-to-line advance one
    /// tick after the frame that showed the completed word, and finish the
    /// session once the cursor turns terminal.
    pub fn on_tick(&mut self) {
        if self.mode != AppMode::Sync {
            return;
        }
        let Some(cursor) = self.cursor.as_mut() else { return };
        if cursor.has_pending_advance() {
            cursor.commit_advance();
            if cursor.is_complete() {
                self.finish_sync();
            }
        }
    }

    /// Handle a key event, layering modals over command mode over the
    /// per-screen handlers.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // First, check if help modal is shown
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return; // Don't process other keys while help is displayed
        }

        // Dismiss blocking error/status messages with Esc
        if self.error_message.is_some() {
            if key.code == KeyCode::Esc {
                self.error_message = None;
            }
            return;
        }
        if self.status_message.is_some() {
            if key.code == KeyCode::Esc {
                self.status_message = None;
            }
            return;
        }

        let ctx = InputContext {
            mode: self.mode,
            is_command_mode: self.entry.is_command_mode,
        };

        if GlobalHandler.handle(key, &ctx) == InputResult::ShowHelp {
            self.show_help = true;
            return;
        }

        let result = match self.mode {
            AppMode::Splash => SplashHandler.handle(key, &ctx),
            // The editor needs the full entry state, so it stays inline
            AppMode::Entry => {
                self.handle_entry_input(key);
                return;
            }
            AppMode::Sync => SyncHandler.handle(key, &ctx),
            AppMode::Finished => FinishedHandler.handle(key, &ctx),
        };
        self.apply_input(result);
    }

    /// Apply an action produced by one of the input handlers.
    fn apply_input(&mut self, result: InputResult) {
        match result {
            InputResult::Ignored => {}
            InputResult::ShowHelp => self.show_help = true,
            InputResult::Quit => self.quit(),
            InputResult::ModeChange(mode) => self.change_mode(mode),
            InputResult::Tap => self.tap(),
            InputResult::TogglePause => self.clock.toggle(),
            InputResult::SaveOutput => self.save_output(),
            InputResult::CopyOutput => self.copy_output(),
            InputResult::NewSession => {
                self.cursor = None;
                self.output = None;
                self.saved_path = None;
                self.clock.reset();
                self.mode = AppMode::Entry;
            }
        }
    }

    /// Leaving the sync screen abandons the session; the draft lyrics survive.
    fn change_mode(&mut self, mode: AppMode) {
        if self.mode == AppMode::Sync {
            self.cursor = None;
            self.clock.reset();
        }
        self.mode = mode;
    }

    /// Handle pasted text (bracketed paste) into the entry editor.
    pub fn handle_paste(&mut self, text: &str) {
        if self.mode != AppMode::Entry || self.entry.is_command_mode {
            return;
        }
        for c in text.chars() {
            match c {
                '\n' => self.newline(),
                '\r' => {}
                _ => self.insert_char(c),
            }
        }
    }

    fn handle_entry_input(&mut self, key: KeyEvent) {
        if self.entry.is_command_mode {
            self.handle_entry_command_input(key);
        } else {
            self.handle_entry_normal_input(key);
        }

        // Keep the cursor inside the viewport
        if self.entry.cursor_y < self.entry.scroll_offset {
            self.entry.scroll_offset = self.entry.cursor_y;
        } else if self.entry.cursor_y >= self.entry.scroll_offset + self.entry.viewport_height {
            self.entry.scroll_offset = self.entry.cursor_y - self.entry.viewport_height + 1;
        }
    }

    fn handle_entry_command_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.entry.is_command_mode = false;
                self.entry.command_buffer.clear();
            }
            KeyCode::Enter => {
                self.execute_entry_command();
                self.entry.is_command_mode = false;
                self.entry.command_buffer.clear();
            }
            KeyCode::Backspace => {
                self.entry.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.entry.command_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_entry_normal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(':') => {
                self.entry.is_command_mode = true;
                self.entry.command_buffer.clear();
            }
            KeyCode::F(2) => {
                self.sync_mode = self.sync_mode.next();
            }
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter => self.newline(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => {
                if self.entry.cursor_x > 0 {
                    self.entry.cursor_x -= 1;
                } else if self.entry.cursor_y > 0 {
                    self.entry.cursor_y -= 1;
                    self.entry.cursor_x = self.current_line_len();
                }
            }
            KeyCode::Right => {
                if self.entry.cursor_x < self.current_line_len() {
                    self.entry.cursor_x += 1;
                } else if self.entry.cursor_y + 1 < self.entry.content.len() {
                    self.entry.cursor_y += 1;
                    self.entry.cursor_x = 0;
                }
            }
            KeyCode::Up => {
                if self.entry.cursor_y > 0 {
                    self.entry.cursor_y -= 1;
                    self.entry.cursor_x = self.entry.cursor_x.min(self.current_line_len());
                }
            }
            KeyCode::Down => {
                if self.entry.cursor_y + 1 < self.entry.content.len() {
                    self.entry.cursor_y += 1;
                    self.entry.cursor_x = self.entry.cursor_x.min(self.current_line_len());
                }
            }
            _ => {}
        }
    }

    /// Length of the cursor line in characters.
    fn current_line_len(&self) -> usize {
        self.entry.current_line().chars().count()
    }

    fn insert_char(&mut self, c: char) {
        if self.entry.cursor_y >= self.entry.content.len() {
            self.entry.content.push(String::new());
        }
        let col = self.entry.cursor_x.min(self.current_line_len());
        let line = &mut self.entry.content[self.entry.cursor_y];
        let at = byte_index(line, col);
        line.insert(at, c);
        self.entry.cursor_x = col + 1;
    }

    fn newline(&mut self) {
        if self.entry.cursor_y >= self.entry.content.len() {
            self.entry.content.push(String::new());
        }
        let col = self.entry.cursor_x.min(self.current_line_len());
        let line = &mut self.entry.content[self.entry.cursor_y];
        let at = byte_index(line, col);
        let remainder = line.split_off(at);
        self.entry.cursor_y += 1;
        self.entry.content.insert(self.entry.cursor_y, remainder);
        self.entry.cursor_x = 0;
    }

    fn backspace(&mut self) {
        if self.entry.cursor_x > 0 {
            let col = self.entry.cursor_x - 1;
            let line = &mut self.entry.content[self.entry.cursor_y];
            let at = byte_index(line, col);
            line.remove(at);
            self.entry.cursor_x = col;
        } else if self.entry.cursor_y > 0 {
            let current = self.entry.content.remove(self.entry.cursor_y);
            self.entry.cursor_y -= 1;
            self.entry.cursor_x = self.entry.content[self.entry.cursor_y].chars().count();
            self.entry.content[self.entry.cursor_y].push_str(&current);
        }
    }

    fn execute_entry_command(&mut self) {
        let cmd = self.entry.command_buffer.trim().to_string();
        match cmd.as_str() {
            "q" | "quit" => self.quit(),
            "start" | "sync" => self.start_sync(),
            "clear" => {
                self.entry = EntryState::default();
            }
            _ if cmd.starts_with("mode ") => match cmd[5..].parse::<SyncMode>() {
                Ok(mode) => self.sync_mode = mode,
                Err(e) => self.error_message = Some(e.to_string()),
            },
            _ if cmd.starts_with("audio ") => {
                let path = shellexpand::tilde(cmd[6..].trim()).to_string();
                self.audio_path = Some(PathBuf::from(path));
            }
            _ => {}
        }
    }

    /// Validate the draft and enter the sync screen.
    ///
    /// Mirrors the original flow: the audio source is checked before the
    /// lyrics, and either failure aborts with no partial session state.
    pub fn start_sync(&mut self) {
        if self.audio_path.is_none() {
            self.error_message = Some(
                Error::missing_resource(
                    "no audio file selected",
                    "Set one with :audio <path>",
                )
                .to_string(),
            );
            return;
        }

        if !self.entry.has_content() {
            self.error_message = Some(
                Error::invalid_input(
                    "lyrics are empty",
                    "Type or paste lyrics before starting",
                )
                .to_string(),
            );
            return;
        }

        let raw: String = self.entry.content.join("\n");
        match SyncCursor::new(&raw, self.sync_mode) {
            Ok(cursor) => {
                self.cursor = Some(cursor);
                self.clock.reset();
                self.output = None;
                self.saved_path = None;
                self.persist_session();
                self.mode = AppMode::Sync;
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Record a tap against the playback clock. The first tap starts the
    /// clock, the way the original started playback.
    pub fn tap(&mut self) {
        if !self.clock.is_running() {
            self.clock.start();
        }
        let now = self.clock.now();
        let Some(cursor) = self.cursor.as_mut() else { return };
        match cursor.tap(now) {
            TapOutcome::Finished => self.finish_sync(),
            // LineCompleted is committed by on_tick after one frame
            TapOutcome::Stamped | TapOutcome::LineCompleted | TapOutcome::Ignored => {}
        }
    }

    fn finish_sync(&mut self) {
        self.clock.pause();
        let Some(cursor) = self.cursor.as_ref() else { return };
        // Audio duration when configured, else the current playback position
        let fallback = self.config.audio_duration.unwrap_or_else(|| self.clock.now());
        self.output = Some(lrc::serialize(cursor, fallback));
        self.mode = AppMode::Finished;
    }

    fn save_output(&mut self) {
        let (Some(output), Some(audio)) = (self.output.as_ref(), self.audio_path.as_ref())
        else {
            return;
        };
        match lrc::write_lrc_file(&self.config.output_dir, audio, output) {
            Ok(path) => {
                self.status_message = Some(format!("Saved: {}", path.display()));
                self.saved_path = Some(path);
            }
            Err(e) => self.error_message = Some(format!("Save failed: {e}")),
        }
    }

    fn copy_output(&mut self) {
        let Some(output) = self.output.clone() else { return };
        let copied = Clipboard::new()
            .and_then(|mut cb| cb.set_text(output))
            .map_err(|e| Error::Clipboard(e.to_string()));
        match copied {
            Ok(()) => self.status_message = Some("Copied to clipboard".to_string()),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// A fresh app that never touches the real config or session files.
    fn test_app() -> App {
        let mut app = App::from_parts(Config::default(), Session::default(), None);
        app.mode = AppMode::Entry;
        app
    }

    fn app_with_lyrics(lyrics: &str, mode: SyncMode) -> App {
        let mut app = test_app();
        app.entry.content = lyrics.lines().map(String::from).collect();
        app.sync_mode = mode;
        app.audio_path = Some(PathBuf::from("/music/track.mp3"));
        app
    }

    #[test]
    fn start_sync_requires_audio() {
        let mut app = app_with_lyrics("Hello", SyncMode::Line);
        app.audio_path = None;
        app.start_sync();
        assert_eq!(app.mode, AppMode::Entry);
        assert!(app.error_message.as_ref().unwrap().contains("audio"));
        assert!(app.cursor.is_none());
    }

    #[test]
    fn start_sync_rejects_blank_lyrics() {
        let mut app = app_with_lyrics("   \n  ", SyncMode::Line);
        app.start_sync();
        assert_eq!(app.mode, AppMode::Entry);
        assert!(app.cursor.is_none());
    }

    #[test]
    fn line_mode_session_finishes_on_last_tap() {
        let mut app = app_with_lyrics("One\nTwo", SyncMode::Line);
        app.start_sync();
        assert_eq!(app.mode, AppMode::Sync);

        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.mode, AppMode::Finished);
        let output = app.output.unwrap();
        assert!(output.starts_with("[00:00.000]♪\n"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn word_mode_session_finishes_after_tick() {
        let mut app = app_with_lyrics("Only", SyncMode::Word);
        app.start_sync();
        app.handle_key(key(KeyCode::Char(' ')));
        // Completed word still on screen until the next tick
        assert_eq!(app.mode, AppMode::Sync);
        app.on_tick();
        assert_eq!(app.mode, AppMode::Finished);
    }

    #[test]
    fn finished_screen_new_session_keeps_draft() {
        let mut app = app_with_lyrics("One", SyncMode::Line);
        app.start_sync();
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.mode, AppMode::Finished);

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.mode, AppMode::Entry);
        assert!(app.cursor.is_none());
        assert!(app.output.is_none());
        assert_eq!(app.entry.content, vec!["One".to_string()]);
    }

    #[test]
    fn sync_screen_pause_key_toggles_clock() {
        let mut app = app_with_lyrics("One\nTwo", SyncMode::Line);
        app.start_sync();
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.clock.is_running());
        app.handle_key(key(KeyCode::Char('p')));
        assert!(!app.clock.is_running());
    }

    #[test]
    fn quit_persists_draft_to_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut app =
            App::from_parts(Config::default(), Session::default(), Some(path.clone()));
        app.mode = AppMode::Entry;
        app.handle_paste("Hello");
        app.quit();
        assert!(app.should_quit());

        let saved = Session::load_from(&path).unwrap();
        assert_eq!(saved.lyrics, vec!["Hello".to_string()]);
    }

    #[test]
    fn escape_abandons_session_and_keeps_draft() {
        let mut app = app_with_lyrics("Keep me", SyncMode::Line);
        app.start_sync();
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Entry);
        assert!(app.cursor.is_none());
        assert_eq!(app.entry.content, vec!["Keep me".to_string()]);
    }

    #[test]
    fn entry_commands_set_mode_and_audio() {
        let mut app = test_app();

        app.handle_key(key(KeyCode::Char(':')));
        for c in "mode adlib".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.sync_mode, SyncMode::Adlib);

        app.handle_key(key(KeyCode::Char(':')));
        for c in "audio /tmp/song.mp3".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.audio_path, Some(PathBuf::from("/tmp/song.mp3")));
    }

    #[test]
    fn paste_splits_into_editor_lines() {
        let mut app = test_app();
        app.handle_paste("Hello world\nFoo bar");
        assert_eq!(
            app.entry.content,
            vec!["Hello world".to_string(), "Foo bar".to_string()]
        );
    }

    #[test]
    fn paste_handles_multibyte_characters() {
        let mut app = test_app();
        app.handle_paste("héllo wörld\nsjöng én sång");
        assert_eq!(
            app.entry.content,
            vec!["héllo wörld".to_string(), "sjöng én sång".to_string()]
        );
        // Cursor tracks character columns, not bytes
        assert_eq!(app.entry.cursor_x, "sjöng én sång".chars().count());
    }

    #[test]
    fn editing_around_multibyte_characters() {
        let mut app = test_app();
        app.handle_paste("héllo");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.entry.content, vec!["héll".to_string()]);

        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.entry.content, vec!["héxll".to_string()]);
        assert_eq!(app.entry.cursor_x, 3);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.entry.content,
            vec!["héx".to_string(), "ll".to_string()]
        );

        // Joining the lines back lands the cursor after the multibyte prefix
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.entry.content, vec!["héxll".to_string()]);
        assert_eq!(app.entry.cursor_x, 3);
    }

    #[test]
    fn f2_cycles_sync_mode() {
        let mut app = test_app();
        app.sync_mode = SyncMode::Line;
        app.handle_key(key(KeyCode::F(2)));
        assert_eq!(app.sync_mode, SyncMode::Word);
    }

    #[test]
    fn error_modal_blocks_other_keys() {
        let mut app = test_app();
        app.error_message = Some("boom".to_string());
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.entry.content[0].is_empty());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn playback_clock_pauses_and_resumes() {
        let mut clock = PlaybackClock::default();
        assert!(!clock.is_running());
        clock.start();
        assert!(clock.is_running());
        clock.pause();
        let frozen = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.now(), frozen);
    }
}
