//! Names for exported training images.
//!
//! Exports are named `training_<label>_t<timecode>_<wholeSeconds>s.png`, e.g.
//! `training_striped_shirt_t01m05s250ms_65s.png`. Full-frame captures use the
//! label `full_frame`. The name parses back through
//! [`SearchEntry::from_filename`](crate::entries::SearchEntry::from_filename).

use deunicode::deunicode;

use crate::timecode;

/// Label used for whole-frame captures.
pub const FULL_FRAME_LABEL: &str = "full_frame";

/// Fallback when a label sanitizes to nothing.
const FALLBACK_LABEL: &str = "crop";

/// Longest label kept after sanitization.
const MAX_LABEL_LENGTH: usize = 100;

/// What part of the frame is being exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportKind {
    /// A selected region with a free-form label.
    Crop { label: String },
    /// The entire captured frame.
    FullFrame,
}

impl ExportKind {
    pub fn crop(label: impl Into<String>) -> Self {
        ExportKind::Crop {
            label: label.into(),
        }
    }

    /// Label as it appears in the filename.
    pub fn label(&self) -> String {
        match self {
            ExportKind::Crop { label } => sanitize_label(label),
            ExportKind::FullFrame => FULL_FRAME_LABEL.to_string(),
        }
    }
}

/// Filename for an export captured at `seconds` into the video.
pub fn export_filename(kind: &ExportKind, seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!(
        "training_{}_t{}_{}s.png",
        kind.label(),
        timecode::encode(seconds),
        whole
    )
}

/// Make a free-form label safe for the filename convention.
///
/// 1. Unicode → ASCII transliteration
/// 2. Whitespace and hyphen runs → a single `_`
/// 3. Anything else outside `[A-Za-z0-9_]` removed
/// 4. Leading/trailing `_` trimmed, length capped
/// 5. Empty results → `crop`
pub fn sanitize_label(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_sep = false;
    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !last_was_sep {
                result.push('_');
                last_was_sep = true;
            }
        } else if c.is_ascii_alphanumeric() {
            result.push(c);
            last_was_sep = false;
        }
    }

    let trimmed: String = result
        .trim_matches('_')
        .chars()
        .take(MAX_LABEL_LENGTH)
        .collect();
    let trimmed = trimmed.trim_end_matches('_');

    if trimmed.is_empty() {
        FALLBACK_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}
