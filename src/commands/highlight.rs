//! Highlight subcommand handler

use anyhow::{Context, Result};
use std::path::Path;

use framecap::controller::{Controller, Event, ManifestFailure, ManifestResponse, Notice};
use framecap::manifest::{ListKind, Manifest};
use framecap::selector::{HighlightChange, SelectorWindow};

use super::inspect::{describe_frame, describe_search};

/// Feed a manifest and a sequence of playback positions through the
/// controller, printing one line per position labelled with the position
/// exactly as given.
pub fn handle(
    path: &Path,
    kind: ListKind,
    times: &[f64],
    look_back: f64,
    look_ahead: f64,
) -> Result<()> {
    let window = SelectorWindow::new(look_back, look_ahead)?;
    let mut controller = Controller::new(window);

    let ticket = controller.begin_load(kind);
    match Manifest::load(path) {
        Ok(manifest) => {
            controller.dispatch(Event::ManifestLoaded(ManifestResponse { ticket, manifest }));
        }
        Err(e) => {
            let message = format!(
                "Could not load {} manifest. Ensure {} is present.",
                kind,
                path.display()
            );
            controller.dispatch(Event::ManifestFailed(ManifestFailure {
                ticket,
                message: message.clone(),
            }));
            return Err(e).context(message);
        }
    }

    if let Some(status) = controller.status(kind) {
        println!("{}", status);
    }

    for &t in times {
        let notices = controller.dispatch(Event::TimeUpdated(t));
        let change = notices.iter().find_map(|notice| match notice {
            Notice::Highlight { list, change } if *list == kind => Some(*change),
            _ => None,
        });
        // Position as given, not rounded to the millisecond
        println!("{:<9} {}", t, describe_change(&controller, kind, change));
    }

    Ok(())
}

fn describe_change(controller: &Controller, kind: ListKind, change: Option<HighlightChange>) -> String {
    match change.unwrap_or(HighlightChange::Unchanged) {
        HighlightChange::Moved { current, .. } => format!("-> {}", describe_active(controller, kind, current)),
        HighlightChange::Cleared { previous } => format!("cleared (was #{})", previous),
        HighlightChange::Unchanged => match controller.active(kind) {
            Some(idx) => format!("== #{}", idx),
            None => "none".to_string(),
        },
    }
}

fn describe_active(controller: &Controller, kind: ListKind, idx: usize) -> String {
    match kind {
        ListKind::Results => controller
            .results()
            .get(idx)
            .map(|entry| describe_frame(idx, entry)),
        ListKind::Search => controller
            .search()
            .get(idx)
            .map(|entry| describe_search(idx, entry)),
    }
    .unwrap_or_else(|| format!("#{}", idx))
}
