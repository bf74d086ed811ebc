//! `lrctap` - manual audio-to-lyrics synchronization.
//!
//! This crate provides a tap-driven cursor over lyric lines and words
//! ([`sync::SyncCursor`]) and serialization of recorded timestamps into the
//! LRC text formats ([`lrc`]), plus the terminal front end that drives them.

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod lrc;
pub mod session;
pub mod sync;
pub mod timestamp;
pub mod ui;
