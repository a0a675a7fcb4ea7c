//! Nearest-match selection of the active entry for a playback position.
//!
//! Entries are scanned forward in ascending time order. The first entry
//! within `[t - look_back, t + look_ahead]` wins. Entries more than
//! `look_back` behind `t` are remembered as a fallback; the scan stops at
//! the first entry beyond `look_ahead`.

mod tracker;

use crate::entries::TimedEntry;

pub use tracker::{HighlightChange, HighlightTracker};

/// Default tolerance behind the playback position, in seconds.
pub const DEFAULT_LOOK_BACK: f64 = 0.6;
/// Default tolerance ahead of the playback position, in seconds.
pub const DEFAULT_LOOK_AHEAD: f64 = 1.2;

/// Asymmetric tolerance window around the playback position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorWindow {
    pub look_back: f64,
    pub look_ahead: f64,
}

impl Default for SelectorWindow {
    fn default() -> Self {
        Self {
            look_back: DEFAULT_LOOK_BACK,
            look_ahead: DEFAULT_LOOK_AHEAD,
        }
    }
}

/// Error for a window with a negative or non-finite tolerance.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid selector window: look_back={look_back}, look_ahead={look_ahead} (both must be finite and >= 0)")]
pub struct InvalidWindow {
    pub look_back: f64,
    pub look_ahead: f64,
}

impl SelectorWindow {
    pub fn new(look_back: f64, look_ahead: f64) -> Result<Self, InvalidWindow> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(look_back) && valid(look_ahead) {
            Ok(Self {
                look_back,
                look_ahead,
            })
        } else {
            Err(InvalidWindow {
                look_back,
                look_ahead,
            })
        }
    }
}

/// Pick the index of the active entry for playback time `t`.
///
/// `entries` must be sorted ascending by time; entries without a finite
/// time are skipped. Returns `None` for an empty list, a non-finite `t`, or
/// when no entry is in the window and none was passed on the way.
///
/// Window bounds are inclusive, and among entries sharing a time the lowest
/// index wins.
pub fn pick_active_index<E: TimedEntry>(
    entries: &[E],
    t: f64,
    window: SelectorWindow,
) -> Option<usize> {
    if !t.is_finite() || entries.is_empty() {
        return None;
    }

    let mut just_passed = None;
    for (idx, entry) in entries.iter().enumerate() {
        let Some(seconds) = entry.seconds().filter(|s| s.is_finite()) else {
            continue;
        };
        let diff = seconds - t;
        if diff >= -window.look_back && diff <= window.look_ahead {
            return Some(idx);
        }
        if diff < -window.look_back {
            just_passed = Some(idx);
        }
        if diff > window.look_ahead {
            break;
        }
    }
    just_passed
}
