//! The tap-driven synchronization state machine.
//!
//! A [`SyncCursor`] owns the lyric data for one sync session and walks a
//! two-level (line x word) position through it as the user taps along with
//! playback. Timestamps are supplied by the caller on every tap; the cursor
//! never reads a clock itself.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timestamp::Timestamp;

/// Text of the synthetic marker line prepended to every session.
pub const MARKER_TEXT: &str = "♪";

/// Text of the synthetic separator lines interleaved in adlib mode.
pub const SEPARATOR_TEXT: &str = ".";

/// How taps map onto positions in the lyrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// One tap per line.
    #[default]
    Line,
    /// One tap per word.
    Word,
    /// One tap per word, with background-vocal separator lines interleaved
    /// and a distinct `[bg:...]` output encoding.
    Adlib,
}

impl SyncMode {
    /// Returns all modes in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Line, Self::Word, Self::Adlib]
    }

    /// Returns the human-readable name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Word => "word",
            Self::Adlib => "adlib",
        }
    }

    /// Cycle to the next mode (for the F2 key override).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Line => Self::Word,
            Self::Word => Self::Adlib,
            Self::Adlib => Self::Line,
        }
    }

    /// Whether taps in this mode advance word by word rather than line by
    /// line. Adlib tapping behaves exactly like word tapping.
    #[must_use]
    pub const fn is_word_granularity(self) -> bool {
        matches!(self, Self::Word | Self::Adlib)
    }
}

impl std::str::FromStr for SyncMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "word" => Ok(Self::Word),
            "adlib" => Ok(Self::Adlib),
            other => Err(Error::invalid_input(
                format!("unknown sync mode '{other}'"),
                "Valid modes are: line, word, adlib",
            )),
        }
    }
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single word within a line. The text never changes after construction;
/// the timestamp is written at most once, when a tap first reaches the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word text, as split from the line on whitespace.
    pub text: String,
    /// When the word was reached, if it has been tapped.
    pub timestamp: Option<Timestamp>,
}

impl Word {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), timestamp: None }
    }
}

/// One line of the session: the trimmed source text, its words, and the
/// line's own timestamp (stamped when the line, or its first word, is
/// reached). A line always has at least one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    /// Full trimmed line text.
    pub text: String,
    /// The line split on whitespace; never empty.
    pub words: Vec<Word>,
    /// When the line was entered, if it has been reached.
    pub timestamp: Option<Timestamp>,
}

impl LyricLine {
    fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            words: text.split_whitespace().map(Word::new).collect(),
            timestamp: None,
        }
    }

    fn separator() -> Self {
        Self {
            text: SEPARATOR_TEXT.to_string(),
            words: vec![Word::new(SEPARATOR_TEXT)],
            timestamp: None,
        }
    }

    fn marker() -> Self {
        Self {
            text: MARKER_TEXT.to_string(),
            words: vec![Word {
                text: MARKER_TEXT.to_string(),
                timestamp: Some(Timestamp::ZERO),
            }],
            timestamp: Some(Timestamp::ZERO),
        }
    }
}

/// What a call to [`SyncCursor::tap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A line or word was stamped; the cursor stays within the current line
    /// (or, in line granularity, moved on to the next line).
    Stamped,
    /// The last word of the current line was stamped. The cursor holds its
    /// position so a renderer can show the completed word for one frame;
    /// call [`SyncCursor::commit_advance`] to roll over to the next line.
    LineCompleted,
    /// This tap stamped the final line and the cursor is now terminal.
    Finished,
    /// The cursor was already terminal; nothing changed.
    Ignored,
}

/// The tap-driven cursor over one session's lyrics.
///
/// `lines[0]` is always the synthetic marker line, pre-stamped at zero and
/// never advanced into; tapping starts at index 1. Once `line_idx` reaches
/// `lines.len()` the cursor is terminal and further taps are ignored.
#[derive(Debug, Clone)]
pub struct SyncCursor {
    lines: Vec<LyricLine>,
    mode: SyncMode,
    line_idx: usize,
    word_idx: Option<usize>,
    pending_advance: bool,
}

impl SyncCursor {
    /// Build a cursor from raw pasted lyrics.
    ///
    /// Splits `raw` into non-empty trimmed lines, splits each line into
    /// words, interleaves "." separator lines in adlib mode, and prepends
    /// the "♪" marker line stamped at `00:00.000`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] when `raw` yields no non-empty lines.
    pub fn new(raw: &str, mode: SyncMode) -> Result<Self> {
        let mut lines = vec![LyricLine::marker()];
        for source in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
            lines.push(LyricLine::from_text(source));
            if mode == SyncMode::Adlib {
                lines.push(LyricLine::separator());
            }
        }

        if lines.len() == 1 {
            return Err(Error::invalid_input(
                "lyrics contain no usable lines",
                "Paste at least one non-empty lyric line before starting",
            ));
        }

        Ok(Self {
            lines,
            mode,
            line_idx: 1,
            word_idx: None,
            pending_advance: false,
        })
    }

    /// Record a tap at playback time `now`.
    ///
    /// A tap arriving while a line advance is still pending commits the
    /// advance first, so fast tapping never loses an event.
    pub fn tap(&mut self, now: Timestamp) -> TapOutcome {
        self.commit_advance();

        if self.line_idx >= self.lines.len() {
            return TapOutcome::Ignored;
        }

        if self.mode.is_word_granularity() {
            self.tap_word(now)
        } else {
            self.tap_line(now)
        }
    }

    fn tap_line(&mut self, now: Timestamp) -> TapOutcome {
        self.lines[self.line_idx].timestamp = Some(now);
        self.line_idx += 1;
        if self.line_idx >= self.lines.len() {
            TapOutcome::Finished
        } else {
            TapOutcome::Stamped
        }
    }

    fn tap_word(&mut self, now: Timestamp) -> TapOutcome {
        let idx = self.word_idx.map_or(0, |i| i + 1);
        self.word_idx = Some(idx);

        let line = &mut self.lines[self.line_idx];
        if idx == 0 {
            line.timestamp = Some(now);
        }
        if let Some(word) = line.words.get_mut(idx) {
            word.timestamp = Some(now);
        }

        if idx + 1 >= line.words.len() {
            self.pending_advance = true;
            TapOutcome::LineCompleted
        } else {
            TapOutcome::Stamped
        }
    }

    /// Apply a pending word-granularity line advance: reset the word position
    /// to "before first word" and move to the next line. No-op when no
    /// advance is pending.
    pub fn commit_advance(&mut self) {
        if self.pending_advance {
            self.pending_advance = false;
            self.word_idx = None;
            self.line_idx += 1;
        }
    }

    /// Whether a word-granularity line advance is waiting for
    /// [`Self::commit_advance`].
    #[must_use]
    pub const fn has_pending_advance(&self) -> bool {
        self.pending_advance
    }

    /// True once the cursor has moved past the final line. Terminal cursors
    /// ignore all further taps.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.line_idx >= self.lines.len()
    }

    /// Fraction of lines passed, in `[0, 1]`, for progress rendering.
    /// The marker line does not count toward the total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.lines.len() <= 1 {
            return 0.0;
        }
        (self.line_idx as f64 / (self.lines.len() - 1) as f64).min(1.0)
    }

    /// All lines in session order, marker and separators included.
    #[must_use]
    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    /// The mode this cursor was built with.
    #[must_use]
    pub const fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Index of the line the next tap targets.
    #[must_use]
    pub const fn line_idx(&self) -> usize {
        self.line_idx
    }

    /// Index of the most recently stamped word within the current line, or
    /// `None` when the line has not been entered yet.
    #[must_use]
    pub const fn word_idx(&self) -> Option<usize> {
        self.word_idx
    }

    /// The line the next tap targets, if the cursor is not terminal.
    #[must_use]
    pub fn current_line(&self) -> Option<&LyricLine> {
        self.lines.get(self.line_idx)
    }

    /// The line before the current one, for context display.
    #[must_use]
    pub fn previous_line(&self) -> Option<&LyricLine> {
        self.line_idx.checked_sub(1).and_then(|i| self.lines.get(i))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn ts(secs: f64) -> Timestamp {
        Timestamp::from_secs_f64(secs)
    }

    #[test]
    fn construction_prepends_stamped_marker() {
        let cursor = SyncCursor::new("Hello world\nFoo bar", SyncMode::Line).unwrap();
        assert_eq!(cursor.lines()[0].text, MARKER_TEXT);
        assert_eq!(cursor.lines()[0].timestamp, Some(Timestamp::ZERO));
        assert_eq!(cursor.line_idx(), 1);
        assert_eq!(cursor.lines().len(), 3);
    }

    #[test]
    fn construction_trims_and_drops_blank_lines() {
        let cursor = SyncCursor::new("  One  \n\n   \nTwo\n", SyncMode::Line).unwrap();
        assert_eq!(cursor.lines().len(), 3);
        assert_eq!(cursor.lines()[1].text, "One");
        assert_eq!(cursor.lines()[2].text, "Two");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = SyncCursor::new("  \n\n  ", SyncMode::Line).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn adlib_interleaves_separator_lines() {
        let cursor = SyncCursor::new("La la\nOh oh\nHey", SyncMode::Adlib).unwrap();
        // marker + 3 * (real + separator)
        assert_eq!(cursor.lines().len(), 7);
        assert_eq!(cursor.lines()[1].text, "La la");
        assert_eq!(cursor.lines()[1].words.len(), 2);
        assert_eq!(cursor.lines()[2].text, SEPARATOR_TEXT);
        assert_eq!(cursor.lines()[2].words.len(), 1);
        assert_eq!(cursor.lines()[2].words[0].text, SEPARATOR_TEXT);
    }

    #[test]
    fn line_mode_taps_stamp_and_advance() {
        let mut cursor = SyncCursor::new("A\nB\nC", SyncMode::Line).unwrap();
        assert_eq!(cursor.tap(ts(1.5)), TapOutcome::Stamped);
        assert_eq!(cursor.line_idx(), 2);
        assert_eq!(cursor.lines()[1].timestamp, Some(ts(1.5)));
        assert_eq!(cursor.lines()[2].timestamp, None);
        assert_eq!(cursor.lines()[3].timestamp, None);

        assert_eq!(cursor.tap(ts(2.0)), TapOutcome::Stamped);
        assert_eq!(cursor.tap(ts(3.0)), TapOutcome::Finished);
        assert!(cursor.is_complete());
    }

    #[test]
    fn terminal_cursor_ignores_taps() {
        let mut cursor = SyncCursor::new("Only line", SyncMode::Line).unwrap();
        assert_eq!(cursor.tap(ts(1.0)), TapOutcome::Finished);
        let before = cursor.lines().to_vec();
        assert_eq!(cursor.tap(ts(9.0)), TapOutcome::Ignored);
        assert_eq!(cursor.lines(), &before[..]);
    }

    #[test]
    fn word_mode_first_tap_stamps_line_and_word() {
        let mut cursor = SyncCursor::new("Hello wide world", SyncMode::Word).unwrap();
        assert_eq!(cursor.tap(ts(1.0)), TapOutcome::Stamped);
        assert_eq!(cursor.word_idx(), Some(0));
        assert_eq!(cursor.lines()[1].timestamp, Some(ts(1.0)));
        assert_eq!(cursor.lines()[1].words[0].timestamp, Some(ts(1.0)));
        assert_eq!(cursor.lines()[1].words[1].timestamp, None);
    }

    #[test]
    fn word_mode_line_advance_is_two_phase() {
        let mut cursor = SyncCursor::new("One two\nThree", SyncMode::Word).unwrap();
        cursor.tap(ts(1.0));
        assert_eq!(cursor.tap(ts(2.0)), TapOutcome::LineCompleted);

        // Completed word still visible: cursor has not rolled over yet
        assert!(cursor.has_pending_advance());
        assert_eq!(cursor.line_idx(), 1);
        assert_eq!(cursor.word_idx(), Some(1));

        cursor.commit_advance();
        assert_eq!(cursor.line_idx(), 2);
        assert_eq!(cursor.word_idx(), None);
        assert!(!cursor.is_complete());
    }

    #[test]
    fn tap_while_advance_pending_commits_first() {
        let mut cursor = SyncCursor::new("One two\nThree", SyncMode::Word).unwrap();
        cursor.tap(ts(1.0));
        cursor.tap(ts(2.0));
        // No commit_advance between taps; the next tap must land on "Three"
        assert_eq!(cursor.tap(ts(3.0)), TapOutcome::LineCompleted);
        assert_eq!(cursor.lines()[2].timestamp, Some(ts(3.0)));
        assert_eq!(cursor.lines()[2].words[0].timestamp, Some(ts(3.0)));
        cursor.commit_advance();
        assert!(cursor.is_complete());
    }

    #[test]
    fn adlib_separator_lines_tap_like_any_other() {
        let mut cursor = SyncCursor::new("La la", SyncMode::Adlib).unwrap();
        cursor.tap(ts(1.0));
        cursor.tap(ts(2.0));
        cursor.commit_advance();
        // Now on the "." separator, a single-word line
        assert_eq!(cursor.current_line().unwrap().text, SEPARATOR_TEXT);
        assert_eq!(cursor.tap(ts(3.0)), TapOutcome::LineCompleted);
        assert_eq!(cursor.lines()[2].timestamp, Some(ts(3.0)));
        cursor.commit_advance();
        assert!(cursor.is_complete());
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let mut cursor = SyncCursor::new("A\nB", SyncMode::Line).unwrap();
        assert!((cursor.progress() - 0.5).abs() < f64::EPSILON);
        cursor.tap(ts(1.0));
        cursor.tap(ts(2.0));
        assert!((cursor.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mode_parsing_and_cycling() {
        assert_eq!("word".parse::<SyncMode>().unwrap(), SyncMode::Word);
        assert_eq!(" ADLIB ".parse::<SyncMode>().unwrap(), SyncMode::Adlib);
        assert!("speed".parse::<SyncMode>().is_err());
        assert_eq!(SyncMode::Adlib.next(), SyncMode::Line);
    }
}
