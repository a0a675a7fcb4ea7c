//! Tests for building manifests from image directories.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use framecap::config::{Config, Dataset};
use framecap::manifest::{build_dataset, BuildOutcome, ListKind, Manifest, MANIFEST_FILE};

use crate::helpers::{fixtures_dir, framecap, touch_all};

const RESULT_IMAGES: &[&str] = &[
    "frame_600_t00m20s000ms.png",
    "frame_150_t00m05s000ms.png",
    "frame_300_t00m10s000ms_crop.PNG",
    "notes.png",
    "frame_900_t00m30s000ms.jpg",
    "frame_7_t999999999999999999m00s000ms.png",
];

const SEARCH_IMAGES: &[&str] = &[
    "training_striped_shirt_t00m12s750ms_12s.png",
    "reference_shirt.JPG",
    "training_full_frame_t00m00s400ms_0s.png",
    "readme.txt",
];

/// Temp workspace with the fixture config and images for `episode-2` only.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(fixtures_dir().join("config.json"), dir.path().join("config.json")).unwrap();
    touch_all(&dir.path().join("data/results/episode-2"), RESULT_IMAGES);
    touch_all(&dir.path().join("data/search/episode-2"), SEARCH_IMAGES);
    dir
}

#[test]
fn results_manifest_lists_parseable_frames() {
    let dir = workspace();
    let config = Config::load(&dir.path().join("config.json")).unwrap();
    let dataset = config.dataset_by_id("episode-2").unwrap();

    let outcomes = build_dataset(dataset, dir.path(), &[ListKind::Results]).unwrap();
    let path = dir.path().join("data/results/episode-2").join(MANIFEST_FILE);
    assert_eq!(
        outcomes,
        vec![BuildOutcome::Written {
            kind: ListKind::Results,
            path: path.clone(),
            count: 3
        }]
    );

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.count, Some(3));
    assert!(manifest.generated_at.is_some());

    let list = manifest.frame_list();
    let frames: Vec<u64> = list.entries.iter().map(|e| e.frame_number).collect();
    assert_eq!(frames, vec![150, 300, 600]);
    assert_eq!(list.entries[1].seconds, 10.0);
}

#[test]
fn search_manifest_lists_images_only() {
    let dir = workspace();
    let config = Config::load(&dir.path().join("config.json")).unwrap();
    let dataset = config.dataset_by_id("episode-2").unwrap();

    build_dataset(dataset, dir.path(), &[ListKind::Search]).unwrap();
    let manifest =
        Manifest::load(&dir.path().join("data/search/episode-2").join(MANIFEST_FILE)).unwrap();

    assert_eq!(manifest.count, Some(3));
    let names: Vec<&str> = manifest.files.iter().filter_map(|f| f.filename()).collect();
    assert_eq!(
        names,
        vec![
            "reference_shirt.JPG",
            "training_full_frame_t00m00s400ms_0s.png",
            "training_striped_shirt_t00m12s750ms_12s.png",
        ]
    );
}

#[test]
fn rebuilding_ignores_existing_manifest() {
    let dir = workspace();
    let dataset = Dataset {
        results_dir: Some("data/results/episode-2".to_string()),
        ..Dataset::new("again")
    };

    build_dataset(&dataset, dir.path(), &[ListKind::Results]).unwrap();
    let outcomes = build_dataset(&dataset, dir.path(), &[ListKind::Results]).unwrap();
    assert!(matches!(
        outcomes[0],
        BuildOutcome::Written { count: 3, .. }
    ));
}

#[test]
fn missing_directory_is_skipped() {
    let dir = TempDir::new().unwrap();
    let dataset = Dataset::new("absent");

    let outcomes = build_dataset(&dataset, dir.path(), &ListKind::ALL).unwrap();
    assert!(outcomes
        .iter()
        .all(|o| matches!(o, BuildOutcome::Skipped { .. })));
}

#[test]
fn cli_build_reports_written_and_missing_dirs() {
    let dir = workspace();

    framecap()
        .arg("build")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote results manifest with 3 entries"))
        .stdout(predicate::str::contains("Wrote search manifest with 3 entries"))
        .stderr(predicate::str::contains(
            "Warning: results directory not found for dataset \"episode-1\"",
        ))
        .stderr(predicate::str::contains(
            "Warning: search directory not found for dataset \"episode-1\"",
        ));

    assert!(dir
        .path()
        .join("data/results/episode-2")
        .join(MANIFEST_FILE)
        .is_file());
}

#[test]
fn cli_build_only_one_list() {
    let dir = workspace();

    framecap()
        .args(["build", "--only", "search", "--dataset", "episode-2", "--config"])
        .arg(dir.path().join("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote search manifest"))
        .stdout(predicate::str::contains("Wrote results").not());

    assert!(!dir
        .path()
        .join("data/results/episode-2")
        .join(MANIFEST_FILE)
        .exists());
}

#[test]
fn cli_build_unknown_dataset_fails() {
    let dir = workspace();

    framecap()
        .args(["build", "--dataset", "nope", "--config"])
        .arg(dir.path().join("config.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dataset 'nope'"));
}

#[test]
fn cli_build_without_config_uses_default_dirs() {
    let dir = TempDir::new().unwrap();
    touch_all(&dir.path().join("data/results"), &["frame_1_t00m00s033ms.png"]);

    framecap()
        .arg("build")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote results manifest with 1 entries"))
        .stderr(predicate::str::contains("Warning: search directory not found"));
}
