//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Lyrics input was empty or unusable
    #[error("Invalid lyrics input: {message}. {hint}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// A required resource (audio file) was not provided
    #[error("Missing resource: {message}. {hint}")]
    MissingResource {
        /// Description of the missing resource.
        message: String,
        /// Actionable guidance for providing it.
        hint: &'static str,
    },

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Session persistence error
    #[error("Session error: {0}")]
    Session(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an invalid-input error with actionable hint
    pub fn invalid_input(message: impl Into<String>, hint: &'static str) -> Self {
        Self::InvalidInput { message: message.into(), hint }
    }

    /// Create a missing-resource error with actionable hint
    pub fn missing_resource(message: impl Into<String>, hint: &'static str) -> Self {
        Self::MissingResource { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn invalid_input_carries_hint() {
        let err = Error::invalid_input("no lines", "Paste lyrics before starting");
        match err {
            Error::InvalidInput { hint, .. } => {
                assert!(hint.contains("Paste"));
            }
            _ => panic!("Expected InvalidInput error with hint"),
        }
    }

    #[test]
    fn display_includes_message_and_hint() {
        let err = Error::missing_resource("no audio file", "Use :audio <path>");
        let text = err.to_string();
        assert!(text.contains("no audio file"));
        assert!(text.contains(":audio"));
    }
}
