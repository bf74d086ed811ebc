//! Persistent sync session drafts.
//!
//! Stores the pasted lyrics, selected sync mode, and audio path between runs
//! so an interrupted session can be resumed, with the draft kept as a small
//! JSON file in the platform data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sync::SyncMode;

/// Session file name
const SESSION_FILE: &str = "session.json";

/// Get the application data directory, creating it if needed.
fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("lrctap");
    fs_err::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Get the session file path, if a platform data directory exists.
fn session_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join(SESSION_FILE))
}

/// A draft sync session: everything needed to pick up where the user left
/// off before tapping started.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Draft lyrics, one entry per editor line.
    #[serde(default)]
    pub lyrics: Vec<String>,
    /// Selected sync mode.
    #[serde(default)]
    pub mode: SyncMode,
    /// Audio file the lyrics are being synced against.
    #[serde(default)]
    pub audio_path: Option<PathBuf>,
}

impl Session {
    /// Default session file location, if a platform data directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        session_path()
    }

    /// Load the saved session, or a fresh one when none exists or the file
    /// is unreadable. A corrupt session file is logged and discarded, never
    /// a fatal error.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = session_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            if path.exists() {
                tracing::warn!("Discarding unreadable session at {}: {e}", path.display());
            }
            Self::default()
        })
    }

    /// Load a session from an explicit path.
    ///
    /// # Errors
    /// Returns [`Error::Session`] when the file is missing or not valid
    /// session JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs_err::read_to_string(path)
            .map_err(|e| Error::Session(format!("read failed: {e}")))?;
        serde_json::from_str(&data).map_err(|e| Error::Session(format!("parse failed: {e}")))
    }

    /// Save the session to an explicit path.
    ///
    /// # Errors
    /// Returns [`Error::Session`] on serialization failure and [`Error::Io`]
    /// on write failure.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Session(format!("serialize failed: {e}")))?;
        fs_err::write(path, json).map_err(|e| Error::io(e, path.to_path_buf()))?;
        Ok(())
    }

    /// Whether the draft has any non-blank lyric content.
    #[must_use]
    pub fn has_lyrics(&self) -> bool {
        self.lyrics.iter().any(|l| !l.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session {
            lyrics: vec!["Hello world".to_string(), "Foo bar".to_string()],
            mode: SyncMode::Adlib,
            audio_path: Some(PathBuf::from("/music/track.mp3")),
        };
        session.save_to(&path).unwrap();

        let loaded = Session::load_from(&path).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn corrupt_session_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs_err::write(&path, "{not json").unwrap();

        assert!(matches!(
            Session::load_from(&path),
            Err(Error::Session(_))
        ));
    }

    #[test]
    fn missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs_err::write(&path, "{}").unwrap();

        let loaded = Session::load_from(&path).unwrap();
        assert_eq!(loaded, Session::default());
        assert_eq!(loaded.mode, SyncMode::Line);
        assert!(!loaded.has_lyrics());
    }
}
