//! Inspect subcommand handler

use anyhow::{Context, Result};
use std::path::Path;

use framecap::entries::{FrameEntry, SearchEntry};
use framecap::manifest::{ListKind, Manifest};
use framecap::timecode::{format_clock, format_time_param};

/// Print the entries of a manifest in the order the selector sees them.
pub fn handle(path: &Path, kind: ListKind, json: bool) -> Result<()> {
    let manifest = Manifest::load(path)
        .with_context(|| format!("Could not load {} manifest {}", kind, path.display()))?;

    match kind {
        ListKind::Results => {
            let list = manifest.frame_list();
            for (idx, entry) in list.entries.iter().enumerate() {
                if json {
                    println!("{}", serde_json::to_string(entry)?);
                } else {
                    println!("{}", describe_frame(idx, entry));
                }
            }
            if !json {
                print_summary(kind, list.entries.len(), list.total_count);
            }
        }
        ListKind::Search => {
            let list = manifest.search_list();
            for (idx, entry) in list.entries.iter().enumerate() {
                if json {
                    println!("{}", serde_json::to_string(entry)?);
                } else {
                    println!("{}", describe_search(idx, entry));
                }
            }
            if !json {
                print_summary(kind, list.entries.len(), list.total_count);
            }
        }
    }
    Ok(())
}

fn print_summary(kind: ListKind, parsed: usize, total: usize) {
    println!("{} {} entries (manifest count {})", parsed, kind, total);
}

/// One-line description of a result frame.
pub fn describe_frame(idx: usize, entry: &FrameEntry) -> String {
    format!(
        "#{:<4} {}  {:>8}  frame {}  t={}  {}",
        idx,
        entry.timecode,
        format_clock(entry.seconds),
        entry.frame_number,
        format_time_param(entry.seconds).unwrap_or_default(),
        entry.filename
    )
}

/// One-line description of a search image.
pub fn describe_search(idx: usize, entry: &SearchEntry) -> String {
    match entry.seconds.filter(|s| s.is_finite()) {
        Some(seconds) => format!(
            "#{:<4} {}  {:>8}  t={}  {}",
            idx,
            entry.timecode.as_deref().unwrap_or("-"),
            format_clock(seconds),
            format_time_param(seconds).unwrap_or_default(),
            entry.filename
        ),
        None => format!("#{:<4} (no time)  {}", idx, entry.filename),
    }
}
