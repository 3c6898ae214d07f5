use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: SRT timecode encoding and decoding

// @const: Fixed HH:MM:SS,mmm grammar
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// Format elapsed seconds as an SRT timecode (`HH:MM:SS,mmm`).
///
/// Negative or non-finite input is clamped to `00:00:00,000`. The value is
/// rounded to the nearest millisecond before splitting into fields, so a
/// float like `3661.234` that is stored as `3661.23399…` still encodes as
/// `01:01:01,234`.
pub fn encode(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Parse an SRT timecode back to elapsed seconds.
///
/// Strict inverse of [`encode`]: input that does not match the fixed grammar
/// is rejected with [`SubtitleError::InvalidTimecode`].
pub fn decode(text: &str) -> Result<f64, SubtitleError> {
    let caps = TIMECODE_REGEX
        .captures(text)
        .ok_or_else(|| SubtitleError::InvalidTimecode {
            text: text.to_string(),
        })?;

    // Captures are \d{2,3} so the parses cannot fail
    let field = |idx: usize| -> u64 { caps[idx].parse().unwrap_or(0) };
    let hours = field(1);
    let minutes = field(2);
    let secs = field(3);
    let millis = field(4);

    Ok((hours * 3600 + minutes * 60 + secs) as f64 + millis as f64 / 1000.0)
}

/// Check whether text matches the timecode grammar without failing.
///
/// Same pattern as [`decode`]'s precondition; used for interactive
/// validation of editor input.
pub fn validate(text: &str) -> bool {
    TIMECODE_REGEX.is_match(text)
}
