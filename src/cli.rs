//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::manifest::ListKind;
use crate::selector::{DEFAULT_LOOK_AHEAD, DEFAULT_LOOK_BACK};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (built ",
    env!("FRAMECAP_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("FRAMECAP_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "framecap",
    version,
    long_version = LONG_VERSION,
    about = "Timecoded frame exports: manifest builder, timecode codec and highlight sync",
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build manifest.json for the image directories of every configured dataset
    Build {
        /// Dataset configuration file (JSON, or TOML with a .toml extension)
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Only build manifests for this list
        #[arg(long, value_enum)]
        only: Option<ListKind>,

        /// Only build manifests for the dataset with this id
        #[arg(long)]
        dataset: Option<String>,
    },

    /// Encode seconds to a timecode or decode a timecode to seconds
    Timecode {
        #[command(subcommand)]
        action: TimecodeAction,
    },

    /// Print the filename a capture at the given time is exported under
    ExportName {
        /// Playback position in seconds
        #[arg(long)]
        at: f64,

        /// Label for a cropped region
        #[arg(long, conflicts_with = "full_frame")]
        label: Option<String>,

        /// Name a full-frame capture instead of a crop
        #[arg(long)]
        full_frame: bool,
    },

    /// List the entries of a manifest in selection order
    Inspect {
        /// Path to a manifest.json
        manifest: PathBuf,

        /// Which kind of list the manifest holds
        #[arg(long, value_enum)]
        kind: ListKind,

        /// Print entries as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Replay playback positions against a manifest and print highlight changes
    Highlight {
        /// Path to a manifest.json
        manifest: PathBuf,

        /// Which kind of list the manifest holds
        #[arg(long, value_enum)]
        kind: ListKind,

        /// Playback positions in seconds, applied in order
        #[arg(long = "at", required = true, num_args = 1.., allow_negative_numbers = true)]
        at: Vec<f64>,

        /// Tolerance behind the playback position in seconds
        #[arg(long, default_value_t = DEFAULT_LOOK_BACK)]
        look_back: f64,

        /// Tolerance ahead of the playback position in seconds
        #[arg(long, default_value_t = DEFAULT_LOOK_AHEAD)]
        look_ahead: f64,
    },

    /// Inspect dataset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum TimecodeAction {
    /// Seconds to MMmSSsMMMms
    Encode {
        /// Non-negative playback position in seconds
        seconds: f64,
    },
    /// Find a timecode in the text (e.g. a filename) and print its seconds
    Decode {
        /// Timecode or filename containing one
        text: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// List datasets with their resolved directories
    Datasets {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}
