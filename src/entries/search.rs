use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{RawEntry, TimedEntry};
use crate::timecode::{self, TIMECODE_SHAPE};

fn timecode_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"_t({})", TIMECODE_SHAPE)).expect("timecode tag pattern is valid")
    })
}

fn whole_seconds_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_(\d+)s(?:\.[^.]+)?$").expect("seconds suffix pattern is valid"))
}

/// One exported training/crop image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub filename: String,
    pub timecode: Option<String>,
    pub seconds: Option<f64>,
}

impl SearchEntry {
    /// Parse whatever time information the filename carries.
    ///
    /// `seconds` comes from a trailing `_<N>s` suffix when present and
    /// non-zero, otherwise from the `_t<timecode>` tag.
    pub fn from_filename(filename: &str) -> Self {
        let timecode = timecode_tag_regex()
            .captures(filename)
            .map(|caps| caps[1].to_string());
        let suffix = whole_seconds_regex()
            .captures(filename)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .map(|s| s as f64);

        // A zero suffix defers to the timecode, which carries the sub-second part
        let seconds = match (suffix, timecode.as_deref()) {
            (Some(s), _) if s != 0.0 => Some(s),
            (_, Some(tc)) => timecode::decode(tc),
            (s, None) => s,
        };

        Self {
            filename: filename.to_string(),
            timecode,
            seconds,
        }
    }

    /// Normalise a manifest record. Only records without a filename are
    /// dropped; structured `timecode` and `seconds` take precedence.
    pub fn from_raw(raw: &RawEntry) -> Option<Self> {
        let Some(filename) = raw.filename() else {
            tracing::debug!(record = ?raw, "skipping manifest record without filename");
            return None;
        };
        let parsed = Self::from_filename(filename);
        let Some(fields) = raw.fields() else {
            return Some(parsed);
        };
        Some(Self {
            filename: parsed.filename,
            timecode: fields.timecode.clone().or(parsed.timecode),
            seconds: fields.seconds.or(parsed.seconds),
        })
    }

    /// Whether the entry can take part in time-based highlighting.
    pub fn has_time(&self) -> bool {
        self.seconds.is_some_and(f64::is_finite)
    }
}

impl TimedEntry for SearchEntry {
    fn seconds(&self) -> Option<f64> {
        self.seconds
    }
}
