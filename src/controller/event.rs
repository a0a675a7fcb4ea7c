//! Inputs to and outputs from the controller dispatch loop.

use crate::manifest::{ListKind, Manifest};
use crate::selector::HighlightChange;

/// Identifies one manifest request.
///
/// Obtained from [`Controller::begin_load`](super::Controller::begin_load)
/// and handed back with the response, so late responses for an older
/// request or another dataset can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub kind: ListKind,
    pub dataset_id: Option<String>,
    pub generation: u64,
}

/// A manifest that finished loading.
#[derive(Debug, Clone)]
pub struct ManifestResponse {
    pub ticket: LoadTicket,
    pub manifest: Manifest,
}

/// A manifest that could not be fetched or parsed.
#[derive(Debug, Clone)]
pub struct ManifestFailure {
    pub ticket: LoadTicket,
    pub message: String,
}

/// Everything the controller reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic or playback-driven position update.
    TimeUpdated(f64),
    /// User seek to an absolute position.
    SeekRequested(f64),
    /// Step by whole frames (negative steps backwards).
    FrameStep(i32),
    /// Jump by a number of seconds (negative rewinds).
    Skip(f64),
    /// Media metadata became available.
    MediaLoaded {
        duration: f64,
        total_frames: Option<u64>,
    },
    /// Switch to another dataset; in-flight loads become stale.
    DatasetSelected(String),
    ManifestLoaded(ManifestResponse),
    ManifestFailed(ManifestFailure),
}

/// What the UI collaborator needs to act on after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Highlight {
        list: ListKind,
        change: HighlightChange,
    },
    /// Playback should move to this position.
    Seeked { seconds: f64 },
    /// A list was replaced wholesale; `count` is the count to display.
    ListReplaced { list: ListKind, count: usize },
    /// Loading a list failed; the list is now empty.
    ListFailed { list: ListKind, message: String },
    /// A response arrived for a superseded request and was ignored.
    StaleDiscarded { list: ListKind },
}
