//! Tests for the event-driven controller using manifest fixtures.

use framecap::controller::{Controller, Event, ManifestFailure, ManifestResponse, Notice};
use framecap::manifest::ListKind;
use framecap::selector::{HighlightChange, SelectorWindow};

use crate::helpers::manifest_fixture;

fn load(controller: &mut Controller, kind: ListKind, fixture: &str) -> Vec<Notice> {
    let ticket = controller.begin_load(kind);
    controller.dispatch(Event::ManifestLoaded(ManifestResponse {
        ticket,
        manifest: manifest_fixture(fixture),
    }))
}

fn loaded_controller() -> Controller {
    let mut controller = Controller::with_dataset(SelectorWindow::default(), "episode-2");
    load(&mut controller, ListKind::Results, "results_manifest.json");
    load(&mut controller, ListKind::Search, "search_manifest.json");
    controller
}

fn highlights(notices: &[Notice]) -> Vec<(ListKind, HighlightChange)> {
    notices
        .iter()
        .filter_map(|notice| match notice {
            Notice::Highlight { list, change } => Some((*list, *change)),
            _ => None,
        })
        .collect()
}

#[test]
fn loading_reports_manifest_count() {
    let mut controller = Controller::default();
    let notices = load(&mut controller, ListKind::Results, "results_manifest.json");
    assert!(notices.contains(&Notice::ListReplaced {
        list: ListKind::Results,
        count: 4
    }));
    assert_eq!(controller.results().len(), 3);
    assert_eq!(controller.total_count(ListKind::Results), 4);
    assert_eq!(controller.status(ListKind::Results), None);
}

#[test]
fn time_update_highlights_both_lists() {
    let mut controller = loaded_controller();
    let notices = controller.dispatch(Event::TimeUpdated(10.0));
    assert_eq!(
        highlights(&notices),
        vec![
            (
                ListKind::Results,
                HighlightChange::Moved {
                    previous: None,
                    current: 1
                }
            ),
            (
                ListKind::Search,
                HighlightChange::Moved {
                    previous: None,
                    current: 1
                }
            ),
        ]
    );
    assert_eq!(controller.current_time(), 10.0);
}

#[test]
fn repeated_time_update_is_quiet() {
    let mut controller = loaded_controller();
    controller.dispatch(Event::TimeUpdated(10.0));
    let notices = controller.dispatch(Event::TimeUpdated(10.1));
    assert!(highlights(&notices).is_empty());
}

#[test]
fn seek_is_clamped_to_media_duration() {
    let mut controller = loaded_controller();
    controller.dispatch(Event::MediaLoaded {
        duration: 30.0,
        total_frames: Some(900),
    });

    let notices = controller.dispatch(Event::SeekRequested(45.0));
    assert_eq!(notices[0], Notice::Seeked { seconds: 30.0 });
    assert_eq!(controller.active(ListKind::Results), Some(2));

    let notices = controller.dispatch(Event::SeekRequested(-3.0));
    assert_eq!(notices[0], Notice::Seeked { seconds: 0.0 });
    assert_eq!(controller.active(ListKind::Results), None);
    assert_eq!(controller.active(ListKind::Search), Some(0));
}

#[test]
fn frame_step_uses_estimated_frame_duration() {
    let mut controller = loaded_controller();
    controller.dispatch(Event::MediaLoaded {
        duration: 30.0,
        total_frames: Some(600),
    });
    controller.dispatch(Event::SeekRequested(1.0));
    controller.dispatch(Event::FrameStep(2));
    assert!((controller.current_time() - 1.1).abs() < 1e-9);
    controller.dispatch(Event::Skip(-5.0));
    assert_eq!(controller.current_time(), 0.0);
}

#[test]
fn dataset_switch_discards_in_flight_load() {
    let mut controller = Controller::with_dataset(SelectorWindow::default(), "episode-1");
    let ticket = controller.begin_load(ListKind::Results);

    controller.dispatch(Event::DatasetSelected("episode-2".to_string()));
    let notices = controller.dispatch(Event::ManifestLoaded(ManifestResponse {
        ticket,
        manifest: manifest_fixture("results_manifest.json"),
    }));

    assert_eq!(
        notices,
        vec![Notice::StaleDiscarded {
            list: ListKind::Results
        }]
    );
    assert!(controller.results().is_empty());
    assert_eq!(controller.dataset_id(), Some("episode-2"));
}

#[test]
fn newer_request_supersedes_older_one() {
    let mut controller = Controller::default();
    let first = controller.begin_load(ListKind::Search);
    let second = controller.begin_load(ListKind::Search);

    controller.dispatch(Event::ManifestLoaded(ManifestResponse {
        ticket: second,
        manifest: manifest_fixture("search_manifest.json"),
    }));
    let notices = controller.dispatch(Event::ManifestFailed(ManifestFailure {
        ticket: first,
        message: "late failure".to_string(),
    }));

    assert_eq!(
        notices,
        vec![Notice::StaleDiscarded {
            list: ListKind::Search
        }]
    );
    assert_eq!(controller.search().len(), 4);
}

#[test]
fn failure_clears_list_and_sets_status() {
    let mut controller = loaded_controller();
    controller.dispatch(Event::TimeUpdated(10.0));

    let ticket = controller.begin_load(ListKind::Results);
    let notices = controller.dispatch(Event::ManifestFailed(ManifestFailure {
        ticket,
        message: "Could not load results manifest.".to_string(),
    }));

    assert_eq!(
        highlights(&notices),
        vec![(ListKind::Results, HighlightChange::Cleared { previous: 1 })]
    );
    assert!(controller.results().is_empty());
    assert_eq!(
        controller.status(ListKind::Results),
        Some("Could not load results manifest.")
    );
    assert_eq!(controller.active(ListKind::Search), Some(1));
}
