//! Tests for nearest-match selection against manifest fixtures.

use framecap::selector::{pick_active_index, HighlightChange, HighlightTracker, SelectorWindow};

use crate::helpers::manifest_fixture;

fn results() -> Vec<framecap::FrameEntry> {
    manifest_fixture("results_manifest.json").frame_list().entries
}

fn search() -> Vec<framecap::SearchEntry> {
    manifest_fixture("search_manifest.json").search_list().entries
}

#[test]
fn results_fixture_is_sorted_and_filtered() {
    let entries = results();
    let frames: Vec<u64> = entries.iter().map(|e| e.frame_number).collect();
    assert_eq!(frames, vec![150, 300, 600]);
}

#[test]
fn search_fixture_puts_untimed_last() {
    let entries = search();
    let names: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "training_full_frame_t00m00s400ms_0s.png",
            "training_full_frame_t00m10s000ms_10s.png",
            "training_striped_shirt_t00m12s750ms_12s.png",
            "reference_shirt.png",
        ]
    );
    assert_eq!(entries[0].seconds, Some(0.4));
}

#[test]
fn picks_entry_inside_window() {
    let w = SelectorWindow::default();
    assert_eq!(pick_active_index(&results(), 4.5, w), Some(0));
    assert_eq!(pick_active_index(&results(), 10.0, w), Some(1));
}

#[test]
fn look_ahead_bound_is_inclusive() {
    // 10.0 - 8.8 lands on the 1.2s look-ahead boundary
    assert_eq!(
        pick_active_index(&results(), 8.8, SelectorWindow::default()),
        Some(1)
    );
}

#[test]
fn falls_back_to_last_passed_entry() {
    let w = SelectorWindow::default();
    assert_eq!(pick_active_index(&results(), 15.0, w), Some(1));
    assert_eq!(pick_active_index(&results(), 500.0, w), Some(2));
}

#[test]
fn nothing_before_first_entry() {
    assert_eq!(
        pick_active_index(&results(), 1.0, SelectorWindow::default()),
        None
    );
}

#[test]
fn untimed_search_entries_are_never_active() {
    let w = SelectorWindow::default();
    let entries = search();
    assert_eq!(pick_active_index(&entries, 0.0, w), Some(0));
    assert_eq!(pick_active_index(&entries, 11.5, w), Some(2));
    assert_eq!(pick_active_index(&entries, 9999.0, w), Some(2));
}

#[test]
fn non_finite_time_selects_nothing() {
    let w = SelectorWindow::default();
    assert_eq!(pick_active_index(&results(), f64::NAN, w), None);
    assert_eq!(pick_active_index(&results(), f64::INFINITY, w), None);
}

#[test]
fn custom_window_narrows_matches() {
    let w = SelectorWindow::new(0.0, 0.0).unwrap();
    assert_eq!(pick_active_index(&results(), 9.5, w), Some(0));
    assert_eq!(pick_active_index(&results(), 10.0, w), Some(1));
}

#[test]
fn negative_window_is_rejected() {
    assert!(SelectorWindow::new(-0.1, 1.0).is_err());
}

#[test]
fn tracker_reports_each_change_once() {
    let entries = results();
    let mut tracker = HighlightTracker::new(SelectorWindow::default());

    assert_eq!(tracker.update(&entries, 1.0), HighlightChange::Unchanged);
    assert_eq!(
        tracker.update(&entries, 4.5),
        HighlightChange::Moved {
            previous: None,
            current: 0
        }
    );
    assert_eq!(tracker.update(&entries, 5.0), HighlightChange::Unchanged);
    assert_eq!(
        tracker.update(&entries, 19.0),
        HighlightChange::Moved {
            previous: Some(0),
            current: 2
        }
    );
    assert_eq!(
        tracker.update(&entries, f64::NAN),
        HighlightChange::Cleared { previous: 2 }
    );
    assert_eq!(tracker.active(), None);
}
