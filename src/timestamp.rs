//! Typed playback timestamps.
//!
//! A [`Timestamp`] is a non-negative duration since the start of the audio,
//! held at millisecond precision. The two LRC tag forms are produced by
//! explicit formatters ([`Timestamp::bracket`] and [`Timestamp::angle`])
//! rather than by text substitution on rendered tags, so lyric text containing
//! literal brackets can never corrupt a tag.

use std::fmt;
use std::time::Duration;

/// A point on the playback clock, stored as whole milliseconds.
///
/// The canonical text form is `MM:SS.mmm`. Minutes are zero-padded to two
/// digits but not clamped; songs longer than 99 minutes simply render wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    millis: u64,
}

impl Timestamp {
    /// The zero timestamp (`00:00.000`), used for the synthetic marker line.
    pub const ZERO: Self = Self { millis: 0 };

    /// Create a timestamp from whole milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create a timestamp from fractional seconds, truncating below the
    /// millisecond. Negative or non-finite input clamps to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::ZERO;
        }
        Self { millis: (secs * 1000.0) as u64 }
    }

    /// Create a timestamp from an elapsed [`Duration`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_duration(elapsed: Duration) -> Self {
        Self { millis: elapsed.as_millis() as u64 }
    }

    /// Total whole milliseconds since audio start.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// The bracketed tag form, `[MM:SS.mmm]`, used for line openings.
    #[must_use]
    pub fn bracket(self) -> String {
        format!("[{self}]")
    }

    /// The angled tag form, `<MM:SS.mmm>`, used for word and closing tags.
    #[must_use]
    pub fn angle(self) -> String {
        format!("<{self}>")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.millis / 60_000;
        let seconds = (self.millis / 1000) % 60;
        let millis = self.millis % 1000;
        write!(f, "{minutes:02}:{seconds:02}.{millis:03}")
    }
}

impl From<Duration> for Timestamp {
    fn from(d: Duration) -> Self {
        Self::from_duration(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_canonically() {
        assert_eq!(Timestamp::ZERO.to_string(), "00:00.000");
        assert_eq!(Timestamp::ZERO.bracket(), "[00:00.000]");
    }

    #[test]
    fn fractional_seconds_truncate_to_millis() {
        let ts = Timestamp::from_secs_f64(90.5);
        assert_eq!(ts.to_string(), "01:30.500");

        // Sub-millisecond detail is floored, never rounded up
        let ts = Timestamp::from_secs_f64(1.9999);
        assert_eq!(ts.to_string(), "00:01.999");
    }

    #[test]
    fn negative_and_nan_clamp_to_zero() {
        assert_eq!(Timestamp::from_secs_f64(-3.0), Timestamp::ZERO);
        assert_eq!(Timestamp::from_secs_f64(f64::NAN), Timestamp::ZERO);
    }

    #[test]
    fn angle_and_bracket_forms_differ_only_in_delimiters() {
        let ts = Timestamp::from_millis(83_250);
        assert_eq!(ts.bracket(), "[01:23.250]");
        assert_eq!(ts.angle(), "<01:23.250>");
    }

    #[test]
    fn minutes_widen_past_two_digits() {
        let ts = Timestamp::from_millis(100 * 60_000);
        assert_eq!(ts.to_string(), "100:00.000");
    }
}
