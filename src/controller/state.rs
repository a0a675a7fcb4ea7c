//! Controller state and event dispatch.

use super::event::{Event, LoadTicket, ManifestFailure, ManifestResponse, Notice};
use super::playback::Playback;
use crate::entries::{FrameEntry, SearchEntry, TimedEntry};
use crate::manifest::{ListKind, LoadedList};
use crate::selector::{HighlightTracker, SelectorWindow};

/// Status shown for a results list that loaded but is empty.
const NO_RESULTS: &str = "No matching frames found in results folder.";
/// Status shown for a search list that loaded but is empty.
const NO_SEARCH_IMAGES: &str = "No training images found in search folder.";

/// One entry list with its highlight and load bookkeeping.
#[derive(Debug, Clone)]
struct ListState<T> {
    list: LoadedList<T>,
    tracker: HighlightTracker,
    /// Generation of the most recent load request
    generation: u64,
    status: Option<String>,
}

impl<T: TimedEntry> ListState<T> {
    fn new(window: SelectorWindow) -> Self {
        Self {
            list: LoadedList::empty(),
            tracker: HighlightTracker::new(window),
            generation: 0,
            status: None,
        }
    }

    fn refresh(&mut self, kind: ListKind, t: f64, notices: &mut Vec<Notice>) {
        let change = self.tracker.update(&self.list.entries, t);
        if change.is_change() {
            notices.push(Notice::Highlight { list: kind, change });
        }
    }

    fn clear_highlight(&mut self, kind: ListKind, notices: &mut Vec<Notice>) {
        let change = self.tracker.clear();
        if change.is_change() {
            notices.push(Notice::Highlight { list: kind, change });
        }
    }

    fn replace(
        &mut self,
        kind: ListKind,
        list: LoadedList<T>,
        empty_status: &str,
        t: f64,
        notices: &mut Vec<Notice>,
    ) {
        self.clear_highlight(kind, notices);
        self.status = if list.is_empty() {
            Some(empty_status.to_string())
        } else {
            None
        };
        notices.push(Notice::ListReplaced {
            list: kind,
            count: list.total_count,
        });
        self.list = list;
        self.refresh(kind, t, notices);
    }

    fn fail(&mut self, kind: ListKind, message: String, notices: &mut Vec<Notice>) {
        self.clear_highlight(kind, notices);
        self.list = LoadedList::empty();
        self.status = Some(message.clone());
        notices.push(Notice::ListFailed {
            list: kind,
            message,
        });
    }

    fn reset(&mut self, kind: ListKind, notices: &mut Vec<Notice>) {
        self.clear_highlight(kind, notices);
        self.generation += 1;
        self.list = LoadedList::empty();
        self.status = None;
        notices.push(Notice::ListReplaced {
            list: kind,
            count: 0,
        });
    }
}

/// Owner of the highlight state for both entry lists.
#[derive(Debug, Clone)]
pub struct Controller {
    dataset_id: Option<String>,
    playback: Playback,
    results: ListState<FrameEntry>,
    search: ListState<SearchEntry>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(SelectorWindow::default())
    }
}

impl Controller {
    pub fn new(window: SelectorWindow) -> Self {
        Self {
            dataset_id: None,
            playback: Playback::default(),
            results: ListState::new(window),
            search: ListState::new(window),
        }
    }

    /// Controller already bound to a dataset.
    pub fn with_dataset(window: SelectorWindow, dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: Some(dataset_id.into()),
            ..Self::new(window)
        }
    }

    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset_id.as_deref()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn current_time(&self) -> f64 {
        self.playback.current_time
    }

    pub fn results(&self) -> &[FrameEntry] {
        &self.results.list.entries
    }

    pub fn search(&self) -> &[SearchEntry] {
        &self.search.list.entries
    }

    /// Active index of a list, if any.
    pub fn active(&self, kind: ListKind) -> Option<usize> {
        match kind {
            ListKind::Results => self.results.tracker.active(),
            ListKind::Search => self.search.tracker.active(),
        }
    }

    /// Count to display for a list (the manifest count when it had one).
    pub fn total_count(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Results => self.results.list.total_count,
            ListKind::Search => self.search.list.total_count,
        }
    }

    /// Empty-state or failure message of a list.
    pub fn status(&self, kind: ListKind) -> Option<&str> {
        match kind {
            ListKind::Results => self.results.status.as_deref(),
            ListKind::Search => self.search.status.as_deref(),
        }
    }

    /// Start a manifest request for `kind`.
    ///
    /// Any response to an earlier request for the same list becomes stale.
    pub fn begin_load(&mut self, kind: ListKind) -> LoadTicket {
        let generation = match kind {
            ListKind::Results => &mut self.results.generation,
            ListKind::Search => &mut self.search.generation,
        };
        *generation += 1;
        LoadTicket {
            kind,
            dataset_id: self.dataset_id.clone(),
            generation: *generation,
        }
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        let generation = match ticket.kind {
            ListKind::Results => self.results.generation,
            ListKind::Search => self.search.generation,
        };
        ticket.generation == generation && ticket.dataset_id == self.dataset_id
    }

    /// Handle one event and report what changed.
    pub fn dispatch(&mut self, event: Event) -> Vec<Notice> {
        let mut notices = Vec::new();
        match event {
            Event::TimeUpdated(t) => {
                if t.is_finite() {
                    self.playback.current_time = t;
                }
                self.refresh_all(t, &mut notices);
            }
            Event::SeekRequested(t) => {
                let target = self.playback.clamp(t);
                self.seek(target, &mut notices);
            }
            Event::FrameStep(delta) => {
                let target = self.playback.step_target(delta);
                self.seek(target, &mut notices);
            }
            Event::Skip(seconds) => {
                let target = self.playback.skip_target(seconds);
                self.seek(target, &mut notices);
            }
            Event::MediaLoaded {
                duration,
                total_frames,
            } => {
                self.playback.duration = Some(duration).filter(|d| d.is_finite() && *d >= 0.0);
                self.playback.total_frames = total_frames;
                let t = self.playback.current_time;
                self.refresh_all(t, &mut notices);
            }
            Event::DatasetSelected(id) => {
                tracing::debug!(dataset = %id, "dataset selected");
                self.dataset_id = Some(id);
                self.results.reset(ListKind::Results, &mut notices);
                self.search.reset(ListKind::Search, &mut notices);
            }
            Event::ManifestLoaded(response) => self.apply_manifest(response, &mut notices),
            Event::ManifestFailed(failure) => self.apply_failure(failure, &mut notices),
        }
        notices
    }

    fn seek(&mut self, target: f64, notices: &mut Vec<Notice>) {
        self.playback.current_time = target;
        notices.push(Notice::Seeked { seconds: target });
        self.refresh_all(target, notices);
    }

    fn refresh_all(&mut self, t: f64, notices: &mut Vec<Notice>) {
        self.results.refresh(ListKind::Results, t, notices);
        self.search.refresh(ListKind::Search, t, notices);
    }

    fn apply_manifest(&mut self, response: ManifestResponse, notices: &mut Vec<Notice>) {
        let kind = response.ticket.kind;
        if !self.is_current(&response.ticket) {
            tracing::debug!(kind = kind.name(), generation = response.ticket.generation, "discarding stale manifest");
            notices.push(Notice::StaleDiscarded { list: kind });
            return;
        }

        let t = self.playback.current_time;
        match kind {
            ListKind::Results => {
                let list = response.manifest.frame_list();
                self.results.replace(kind, list, NO_RESULTS, t, notices);
            }
            ListKind::Search => {
                let list = response.manifest.search_list();
                self.search.replace(kind, list, NO_SEARCH_IMAGES, t, notices);
            }
        }
    }

    fn apply_failure(&mut self, failure: ManifestFailure, notices: &mut Vec<Notice>) {
        let kind = failure.ticket.kind;
        if !self.is_current(&failure.ticket) {
            notices.push(Notice::StaleDiscarded { list: kind });
            return;
        }

        tracing::warn!(kind = kind.name(), message = %failure.message, "manifest load failed");
        match kind {
            ListKind::Results => self.results.fail(kind, failure.message, notices),
            ListKind::Search => self.search.fail(kind, failure.message, notices),
        }
    }
}
