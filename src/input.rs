//! Mode-specific key dispatch.
//!
//! Keys are translated into [`InputResult`] actions by small per-screen
//! handlers so each mapping can be tested without building a full
//! [`App`](crate::app::App); `App::handle_key` runs the handler for the
//! current screen and applies the returned action to its state.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::AppMode;

/// Action produced by an input handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// The key means nothing in this context.
    Ignored,
    /// Show the help modal.
    ShowHelp,
    /// Quit the application.
    Quit,
    /// Switch to another screen.
    ModeChange(AppMode),
    /// Record a sync tap.
    Tap,
    /// Pause or resume the playback clock.
    TogglePause,
    /// Write the serialized output to the output directory.
    SaveOutput,
    /// Copy the serialized output to the clipboard.
    CopyOutput,
    /// Start a fresh session over the same draft lyrics.
    NewSession,
}

/// The slice of application state a handler is allowed to see.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Current screen.
    pub mode: AppMode,
    /// Whether the entry editor is capturing a `:` command.
    pub is_command_mode: bool,
}

/// Translates key events into [`InputResult`] actions.
pub trait InputHandler {
    /// Map one key event to an action.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;
}

/// Shortcuts that apply on every screen.
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        // The command bar owns the keyboard while a `:` command is typed
        if ctx.is_command_mode {
            return InputResult::Ignored;
        }
        // `?` stays insertable text in the entry editor
        match key.code {
            KeyCode::F(1) => InputResult::ShowHelp,
            KeyCode::Char('?') if ctx.mode != AppMode::Entry => InputResult::ShowHelp,
            _ => InputResult::Ignored,
        }
    }
}

/// Splash screen: any key moves on to the editor.
#[derive(Debug, Default)]
pub struct SplashHandler;

impl InputHandler for SplashHandler {
    fn handle(&mut self, _key: KeyEvent, _ctx: &InputContext) -> InputResult {
        InputResult::ModeChange(AppMode::Entry)
    }
}

/// Tap keys on the sync screen.
#[derive(Debug, Default)]
pub struct SyncHandler;

impl InputHandler for SyncHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if ctx.mode != AppMode::Sync {
            return InputResult::Ignored;
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => InputResult::Tap,
            KeyCode::Char('p') => InputResult::TogglePause,
            KeyCode::Esc => InputResult::ModeChange(AppMode::Entry),
            _ => InputResult::Ignored,
        }
    }
}

/// Keys on the finished screen.
#[derive(Debug, Default)]
pub struct FinishedHandler;

impl InputHandler for FinishedHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if ctx.mode != AppMode::Finished {
            return InputResult::Ignored;
        }
        match key.code {
            KeyCode::Char('s') => InputResult::SaveOutput,
            KeyCode::Char('c') => InputResult::CopyOutput,
            KeyCode::Char('n') => InputResult::NewSession,
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            _ => InputResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn make_context(mode: AppMode) -> InputContext {
        InputContext {
            mode,
            is_command_mode: false,
        }
    }

    #[test]
    fn splash_handler_any_key_enters_editor() {
        let mut handler = SplashHandler;
        let ctx = make_context(AppMode::Splash);
        let result = handler.handle(make_key(KeyCode::Enter), &ctx);

        assert_eq!(result, InputResult::ModeChange(AppMode::Entry));
    }

    #[test]
    fn global_handler_f1_shows_help() {
        let mut handler = GlobalHandler;
        let ctx = make_context(AppMode::Sync);

        assert_eq!(
            handler.handle(make_key(KeyCode::F(1)), &ctx),
            InputResult::ShowHelp
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('?')), &ctx),
            InputResult::ShowHelp
        );
    }

    #[test]
    fn global_handler_defers_to_command_bar() {
        let mut handler = GlobalHandler;
        let ctx = InputContext {
            mode: AppMode::Entry,
            is_command_mode: true,
        };
        assert_eq!(
            handler.handle(make_key(KeyCode::F(1)), &ctx),
            InputResult::Ignored
        );
    }

    #[test]
    fn global_handler_question_mark_in_entry_ignored() {
        let mut handler = GlobalHandler;
        let ctx = make_context(AppMode::Entry);
        let result = handler.handle(make_key(KeyCode::Char('?')), &ctx);

        assert_eq!(result, InputResult::Ignored);
    }

    #[test]
    fn sync_handler_maps_tap_keys() {
        let mut handler = SyncHandler;
        let ctx = make_context(AppMode::Sync);

        assert_eq!(handler.handle(make_key(KeyCode::Char(' ')), &ctx), InputResult::Tap);
        assert_eq!(handler.handle(make_key(KeyCode::Enter), &ctx), InputResult::Tap);
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('p')), &ctx),
            InputResult::TogglePause
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Esc), &ctx),
            InputResult::ModeChange(AppMode::Entry)
        );
    }

    #[test]
    fn sync_handler_ignores_other_modes() {
        let mut handler = SyncHandler;
        let ctx = make_context(AppMode::Finished);
        assert_eq!(
            handler.handle(make_key(KeyCode::Char(' ')), &ctx),
            InputResult::Ignored
        );
    }

    #[test]
    fn finished_handler_maps_session_keys() {
        let mut handler = FinishedHandler;
        let ctx = make_context(AppMode::Finished);

        assert_eq!(
            handler.handle(make_key(KeyCode::Char('s')), &ctx),
            InputResult::SaveOutput
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('c')), &ctx),
            InputResult::CopyOutput
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('n')), &ctx),
            InputResult::NewSession
        );
        assert_eq!(handler.handle(make_key(KeyCode::Char('q')), &ctx), InputResult::Quit);
        assert_eq!(handler.handle(make_key(KeyCode::Esc), &ctx), InputResult::Quit);
    }
}
