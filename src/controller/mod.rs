//! Event-driven controller tying playback time to entry highlights.
//!
//! The [`Controller`] owns all mutable state: the loaded entry lists, the
//! active highlight of each list, the current dataset and the playback
//! position. Hosts feed it [`Event`]s from a single loop and render the
//! returned [`Notice`]s.
//!
//! # Usage
//!
//! ```
//! use framecap::controller::{Controller, Event, ManifestResponse, Notice};
//! use framecap::manifest::{ListKind, Manifest};
//!
//! let mut controller = Controller::default();
//! let ticket = controller.begin_load(ListKind::Results);
//! let manifest = Manifest::from_json(r#"{"files": ["frame_1_t00m05s000ms.png"]}"#).unwrap();
//! controller.dispatch(Event::ManifestLoaded(ManifestResponse { ticket, manifest }));
//!
//! let notices = controller.dispatch(Event::TimeUpdated(4.5));
//! assert!(matches!(notices[0], Notice::Highlight { .. }));
//! assert_eq!(controller.active(ListKind::Results), Some(0));
//! ```

mod event;
mod playback;
mod state;

pub use event::{Event, LoadTicket, ManifestFailure, ManifestResponse, Notice};
pub use playback::{Playback, DEFAULT_FRAME_DURATION, MIN_FRAME_DURATION};
pub use state::Controller;
