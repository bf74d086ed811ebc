//! LRC output: serialization of a sync session and file writing.
//!
//! Serialization is a pure function of the cursor's line data plus the mode
//! and a fallback closing time; calling it twice on the same completed
//! session yields byte-identical output. Lines or words the user never
//! tapped serialize with an empty tag rather than failing or being
//! interpolated; a skipped tap stays visible in the output as a gap.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::sync::{LyricLine, SyncCursor, SyncMode};
use crate::timestamp::Timestamp;

/// Serialize a session using the mode the cursor was built with.
///
/// `fallback` closes the final line's display window when no next line
/// timestamp exists; callers source it from the audio duration, or from the
/// current playback time when the duration is unknown.
#[must_use]
pub fn serialize(cursor: &SyncCursor, fallback: Timestamp) -> String {
    serialize_lines(cursor.lines(), cursor.mode(), fallback)
}

/// Serialize raw line data. One output line per stored line, in order,
/// marker and adlib separator lines included. Zero lines yields the empty
/// string.
#[must_use]
pub fn serialize_lines(lines: &[LyricLine], mode: SyncMode, fallback: Timestamp) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let encoded = match mode {
            SyncMode::Line => encode_line(line),
            SyncMode::Word => encode_words(line, lines.get(idx + 1), fallback),
            SyncMode::Adlib => encode_adlib(line, lines.get(idx + 1), fallback),
        };
        out.push_str(&encoded);
        out.push('\n');
    }
    out
}

/// `[MM:SS.mmm]text`, with the tag omitted entirely when the line was never
/// tapped.
fn encode_line(line: &LyricLine) -> String {
    let tag = line.timestamp.map(Timestamp::bracket).unwrap_or_default();
    format!("{tag}{}", line.text)
}

/// Angle tag for a word: the word's own time, falling back to the line's.
fn word_tag(line: &LyricLine, word_timestamp: Option<Timestamp>) -> String {
    word_timestamp
        .or(line.timestamp)
        .map(Timestamp::angle)
        .unwrap_or_default()
}

/// The closing tag for a line: the next line's start in angle form, or the
/// fallback time when there is no stamped next line.
fn closing_tag(next: Option<&LyricLine>, fallback: Timestamp) -> String {
    next.and_then(|l| l.timestamp).unwrap_or(fallback).angle()
}

/// `[line]<word>text <word>text<closing>`
fn encode_words(line: &LyricLine, next: Option<&LyricLine>, fallback: Timestamp) -> String {
    let mut encoded = line.timestamp.map(Timestamp::bracket).unwrap_or_default();
    for word in &line.words {
        encoded.push_str(&word_tag(line, word.timestamp));
        encoded.push_str(&word.text);
        encoded.push(' ');
    }
    format!("{}{}", encoded.trim_end(), closing_tag(next, fallback))
}

/// `[bg:<word>text <word>text <closing>]`
fn encode_adlib(line: &LyricLine, next: Option<&LyricLine>, fallback: Timestamp) -> String {
    let parts: Vec<String> = line
        .words
        .iter()
        .map(|w| format!("{}{}", word_tag(line, w.timestamp), w.text))
        .collect();
    format!(
        "[bg:{} {}]",
        parts.join(" "),
        closing_tag(next, fallback)
    )
}

/// Derive the output file name for an audio source: the audio file's stem,
/// sanitized for the filesystem, with an `.lrc` extension.
#[must_use]
pub fn output_file_name(audio: &Path) -> String {
    let stem = audio
        .file_stem()
        .map_or_else(|| "synced_lyrics".to_string(), |s| s.to_string_lossy().to_string());
    format!("{}.lrc", sanitize_file_stem(&stem))
}

fn sanitize_file_stem(name: &str) -> String {
    lazy_static! {
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | ',' | '.' | '(' | ')') {
                c
            } else {
                ' '
            }
        })
        .collect();
    let collapsed = WHITESPACE_RE.replace_all(cleaned.trim(), " ").to_string();
    if collapsed.is_empty() {
        "synced_lyrics".to_string()
    } else {
        collapsed
    }
}

/// Write serialized LRC text next to the given directory, named after the
/// audio source. Returns the path written.
///
/// # Errors
/// Returns [`Error::Io`] when the directory cannot be created or the file
/// cannot be written.
pub fn write_lrc_file(dir: &Path, audio: &Path, contents: &str) -> Result<PathBuf> {
    fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;
    let path = dir.join(output_file_name(audio));
    fs_err::write(&path, contents).map_err(|e| Error::io(e, path.clone()))?;
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}
