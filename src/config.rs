//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::sync::SyncMode;
use crate::timestamp::Timestamp;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory where finished `.lrc` files are written
    pub output_dir: PathBuf,
    /// Sync mode used when a session does not specify one
    pub default_mode: SyncMode,
    /// Total audio duration, used as the closing-tag fallback when known
    pub audio_duration: Option<Timestamp>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            output_dir: default_output_dir(),
            default_mode: SyncMode::Line,
            audio_duration: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Output directory: env var override with tilde expansion
        if let Ok(dir) = env::var("LRCTAP_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        // Default sync mode
        if let Ok(mode) = env::var("LRCTAP_MODE") {
            if let Ok(mode) = mode.parse::<SyncMode>() {
                config.default_mode = mode;
            }
        }

        // Audio duration in seconds, for the final closing tag
        if let Ok(secs) = env::var("LRCTAP_AUDIO_DURATION") {
            if let Ok(secs) = secs.parse::<f64>() {
                if secs > 0.0 {
                    config.audio_duration = Some(Timestamp::from_secs_f64(secs));
                }
            }
        }

        Ok(config)
    }
}

/// Where finished files land when no directory is configured: the platform
/// download directory, like a browser download, else the working directory.
fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
