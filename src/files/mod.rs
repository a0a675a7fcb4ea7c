//! File naming for exported captures.

pub mod export;

pub use export::{export_filename, sanitize_label, ExportKind, FULL_FRAME_LABEL};
