use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{RawEntry, TimedEntry};
use crate::timecode::{self, TIMECODE_SHAPE};

fn frame_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"frame_(\d+)_t({})", TIMECODE_SHAPE)).expect("frame pattern is valid")
    })
}

/// One exported matching-result frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEntry {
    pub filename: String,
    pub frame_number: u64,
    /// Timecode exactly as it appears in the filename.
    pub timecode: String,
    pub seconds: f64,
}

impl FrameEntry {
    /// Parse a `frame_<N>_t<timecode>` filename. Anything after the
    /// timecode is ignored.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let caps = frame_regex().captures(filename)?;
        let frame_number = caps[1].parse().ok()?;
        let timecode = caps[2].to_string();
        let seconds = timecode::decode(&timecode)?;
        Some(Self {
            filename: filename.to_string(),
            frame_number,
            timecode,
            seconds,
        })
    }

    /// Normalise a manifest record.
    ///
    /// The filename must still parse as a frame; structured fields then
    /// replace the parsed values one by one.
    pub fn from_raw(raw: &RawEntry) -> Option<Self> {
        let Some(filename) = raw.filename() else {
            tracing::debug!(record = ?raw, "skipping manifest record without filename");
            return None;
        };
        let Some(parsed) = Self::from_filename(filename) else {
            tracing::debug!(filename, "skipping manifest record that is not a frame");
            return None;
        };
        let Some(fields) = raw.fields() else {
            return Some(parsed);
        };
        Some(Self {
            filename: fields.filename.clone().unwrap_or(parsed.filename),
            frame_number: fields.frame_number.unwrap_or(parsed.frame_number),
            timecode: fields.timecode.clone().unwrap_or(parsed.timecode),
            seconds: fields.seconds.unwrap_or(parsed.seconds),
        })
    }
}

impl TimedEntry for FrameEntry {
    fn seconds(&self) -> Option<f64> {
        Some(self.seconds)
    }
}
