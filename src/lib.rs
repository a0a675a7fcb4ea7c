//! framecap - frame capture toolkit for training-image datasets
//!
//! Exported images carry their position in the source video inside the
//! filename (`frame_12_t00m05s250ms.png`, `training_shirt_t00m05s250ms_5s.png`).
//! This crate provides:
//!
//! - [`timecode`]: the shared `MMmSSsMMMms` codec
//! - [`entries`]: parsing filenames and manifest records into entries
//! - [`selector`]: picking the entry that matches the playback position
//! - [`manifest`]: reading and building `manifest.json` indexes
//! - [`config`]: dataset configuration
//! - [`controller`]: the event loop state tying playback time to highlights
//! - [`files`]: export filename generation

pub mod cli;
pub mod config;
pub mod controller;
pub mod entries;
pub mod files;
pub mod manifest;
pub mod selector;
pub mod timecode;

pub use config::{Config, Dataset};
pub use controller::{Controller, Event, Notice};
pub use entries::{FrameEntry, RawEntry, SearchEntry};
pub use manifest::{ListKind, Manifest};
pub use selector::{pick_active_index, HighlightChange, HighlightTracker, SelectorWindow};
