//! Timecode and export-name subcommand handlers

use anyhow::{bail, Result};

use framecap::files::{export_filename, ExportKind};
use framecap::timecode;

fn ensure_position(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        bail!("Playback position must be a non-negative number, got {}", seconds);
    }
    Ok(())
}

pub fn handle_encode(seconds: f64) -> Result<()> {
    ensure_position(seconds)?;
    println!("{}", timecode::encode(seconds));
    Ok(())
}

pub fn handle_decode(text: &str) -> Result<()> {
    match timecode::decode(text) {
        Some(seconds) => {
            println!("{}", seconds);
            Ok(())
        }
        None => bail!("No timecode found in '{}'", text),
    }
}

pub fn handle_export_name(at: f64, label: Option<&str>, full_frame: bool) -> Result<()> {
    ensure_position(at)?;
    let kind = match (label, full_frame) {
        (_, true) => ExportKind::FullFrame,
        (Some(label), false) => ExportKind::crop(label),
        (None, false) => bail!("Provide --label <LABEL> for a crop or --full-frame"),
    };
    println!("{}", export_filename(&kind, at));
    Ok(())
}
