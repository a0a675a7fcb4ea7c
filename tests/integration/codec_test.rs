//! Tests for the timecode codec and filename extraction.

use framecap::entries::{FrameEntry, SearchEntry};
use framecap::files::{export_filename, ExportKind};
use framecap::timecode::{self, Timecode};

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn encode_boundaries() {
    assert_eq!(timecode::encode(0.0), "00m00s000ms");
    assert_eq!(timecode::encode(65.25), "01m05s250ms");
    assert_eq!(timecode::encode(3599.999), "59m59s999ms");
}

#[test]
fn decode_rejects_malformed_input() {
    assert_eq!(timecode::decode("not a timecode"), None);
}

#[test]
fn decode_of_encode_round_trips_millisecond_values() {
    for seconds in [0.0, 0.001, 5.25, 10.0, 59.999, 65.25, 3599.999, 4000.125] {
        assert_eq!(timecode::decode(&timecode::encode(seconds)), Some(seconds));
    }
}

#[test]
fn encode_of_decode_reproduces_canonical_timecode() {
    for tc in ["00m00s000ms", "01m05s250ms", "12m34s567ms", "120m00s001ms"] {
        let seconds = timecode::decode(tc).unwrap();
        assert_eq!(timecode::encode(seconds), tc);
    }
}

#[test]
fn timecode_type_matches_free_functions() {
    let tc = Timecode::from_seconds(65.25);
    assert_eq!(tc.as_str(), timecode::encode(65.25));
    assert_eq!(tc.seconds(), 65.25);
}

// ============================================================================
// Filename extraction
// ============================================================================

#[test]
fn frame_entry_from_filename() {
    let entry = FrameEntry::from_filename("frame_12_t00m05s250ms_extra.png").unwrap();
    assert_eq!(entry.frame_number, 12);
    assert_eq!(entry.timecode, "00m05s250ms");
    assert_eq!(entry.seconds, 5.25);
    assert_eq!(entry.filename, "frame_12_t00m05s250ms_extra.png");
}

#[test]
fn frame_entry_rejects_other_names() {
    assert!(FrameEntry::from_filename("not_a_frame.png").is_none());
}

#[test]
fn huge_minutes_field_is_not_a_time() {
    let name = "frame_1_t999999999999999999m00s000ms.png";
    assert_eq!(timecode::decode(name), None);
    assert!(FrameEntry::from_filename(name).is_none());
    assert!(SearchEntry::from_filename(name).seconds.is_none());
}

#[test]
fn search_entry_with_seconds_suffix() {
    let entry = SearchEntry::from_filename("training_full_frame_t00m10s000ms_10s.png");
    assert_eq!(entry.seconds, Some(10.0));
    assert_eq!(entry.timecode.as_deref(), Some("00m10s000ms"));
}

#[test]
fn search_entry_without_time_is_still_valid() {
    let entry = SearchEntry::from_filename("reference_shirt.png");
    assert_eq!(entry.filename, "reference_shirt.png");
    assert!(entry.timecode.is_none());
    assert!(entry.seconds.is_none());
}

#[test]
fn export_names_are_recognised_as_search_entries() {
    for (kind, at) in [
        (ExportKind::crop("striped shirt"), 65.25),
        (ExportKind::FullFrame, 3599.999),
    ] {
        let name = export_filename(&kind, at);
        let entry = SearchEntry::from_filename(&name);
        assert_eq!(entry.timecode.as_deref(), Some(timecode::encode(at).as_str()));
        assert_eq!(entry.seconds, Some(at.floor()));
    }
}
