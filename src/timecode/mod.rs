//! Timecode codec shared by exported filenames and manifests.
//!
//! A timecode is the textual form `MMmSSsMMMms` of an elapsed duration with
//! millisecond precision, e.g. `01m05s250ms` for 65.25 seconds. Minutes are
//! zero-padded to at least two digits and grow past that when needed.

mod display;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use display::{format_clock, format_precise, format_time_param, parse_time_param};

/// Pattern for a timecode-shaped substring, without anchors.
pub(crate) const TIMECODE_SHAPE: &str = r"\d+m\d+s\d+ms";

/// Tolerance used to snap `seconds * 1000` onto a whole millisecond.
const MS_SNAP_EPSILON: f64 = 1e-6;

fn search_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)m(\d+)s(\d+)ms").expect("timecode pattern is valid"))
}

fn exact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)m(\d+)s(\d+)ms$").expect("timecode pattern is valid"))
}

/// Encode a playback position as a timecode string.
///
/// Values are truncated (never rounded) to the millisecond. Negative and
/// non-finite input is clamped to zero.
///
/// ```
/// use framecap::timecode::encode;
///
/// assert_eq!(encode(0.0), "00m00s000ms");
/// assert_eq!(encode(65.25), "01m05s250ms");
/// ```
pub fn encode(seconds: f64) -> String {
    let total_ms = whole_millis(seconds);
    let minutes = total_ms / 60_000;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{:02}m{:02}s{:03}ms", minutes, secs, millis)
}

/// Decode the first timecode found anywhere in `text`.
///
/// Returns `None` when no timecode-shaped substring exists or when the
/// components overflow a `u64` count of seconds.
pub fn decode(text: &str) -> Option<f64> {
    let caps = search_regex().captures(text)?;
    seconds_from_parts(&caps[1], &caps[2], &caps[3])
}

/// Whole milliseconds in `seconds`, floored.
///
/// `seconds * 1000` is snapped to the nearest integer first when it lies
/// within [`MS_SNAP_EPSILON`] of it, so values such as `3599.999` (stored as
/// `3599.99899999...`) still encode as 999 ms.
fn whole_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    let scaled = seconds * 1000.0;
    let nearest = scaled.round();
    let ms = if (scaled - nearest).abs() < MS_SNAP_EPSILON {
        nearest
    } else {
        scaled.floor()
    };
    ms as u64
}

fn seconds_from_parts(minutes: &str, seconds: &str, millis: &str) -> Option<f64> {
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    let millis: u64 = millis.parse().ok()?;
    let whole = minutes.checked_mul(60)?.checked_add(seconds)?;
    Some(whole as f64 + millis as f64 / 1000.0)
}

/// A validated timecode string.
///
/// Parsing accepts any `<digits>m<digits>s<digits>ms` text exactly as given,
/// so a timecode captured from a filename keeps its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timecode(String);

impl Timecode {
    /// Canonical timecode for a playback position.
    pub fn from_seconds(seconds: f64) -> Self {
        Self(encode(seconds))
    }

    /// Seconds represented by this timecode.
    pub fn seconds(&self) -> f64 {
        // Shape was validated on construction
        decode(&self.0).unwrap_or(0.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when text is not a well-formed timecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid timecode '{0}': expected MMmSSsMMMms")]
pub struct InvalidTimecode(pub String);

impl FromStr for Timecode {
    type Err = InvalidTimecode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = exact_regex()
            .captures(s)
            .ok_or_else(|| InvalidTimecode(s.to_string()))?;
        seconds_from_parts(&caps[1], &caps[2], &caps[3])
            .map(|_| Timecode(s.to_string()))
            .ok_or_else(|| InvalidTimecode(s.to_string()))
    }
}

impl TryFrom<String> for Timecode {
    type Error = InvalidTimecode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timecode> for String {
    fn from(tc: Timecode) -> Self {
        tc.0
    }
}

impl AsRef<str> for Timecode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
