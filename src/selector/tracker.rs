//! Change detection for the active entry.

use super::{pick_active_index, SelectorWindow};
use crate::entries::TimedEntry;

/// What happened to the highlight after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightChange {
    /// The active entry is the same as before (including "none" both times).
    Unchanged,
    /// The previously active entry lost its highlight and nothing replaced it.
    Cleared { previous: usize },
    /// A new entry became active.
    Moved {
        previous: Option<usize>,
        current: usize,
    },
}

impl HighlightChange {
    pub fn is_change(&self) -> bool {
        !matches!(self, HighlightChange::Unchanged)
    }
}

/// Remembers the active index of one entry list across playback updates.
///
/// The tracker indexes into a list owned by the caller. After the list is
/// replaced, call [`HighlightTracker::reset`] so the next update is computed
/// from scratch.
#[derive(Debug, Clone, Default)]
pub struct HighlightTracker {
    window: SelectorWindow,
    active: Option<usize>,
}

impl HighlightTracker {
    pub fn new(window: SelectorWindow) -> Self {
        Self {
            window,
            active: None,
        }
    }

    /// Currently active index.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn window(&self) -> SelectorWindow {
        self.window
    }

    /// Recompute the active entry for playback time `t`.
    pub fn update<E: TimedEntry>(&mut self, entries: &[E], t: f64) -> HighlightChange {
        let next = pick_active_index(entries, t, self.window);
        if next == self.active {
            return HighlightChange::Unchanged;
        }

        let previous = self.active;
        self.active = next;
        match (previous, next) {
            (_, Some(current)) => HighlightChange::Moved { previous, current },
            (Some(previous), None) => HighlightChange::Cleared { previous },
            (None, None) => HighlightChange::Unchanged,
        }
    }

    /// Drop the highlight, reporting it if one was active.
    pub fn clear(&mut self) -> HighlightChange {
        match self.active.take() {
            Some(previous) => HighlightChange::Cleared { previous },
            None => HighlightChange::Unchanged,
        }
    }

    /// Forget the active index without reporting a change.
    pub fn reset(&mut self) {
        self.active = None;
    }
}
