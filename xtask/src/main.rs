//! Development tasks for framecap.
//!
//! Usage: `cargo xtask man [--out-dir DIR]`

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "framecap development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for framecap and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = framecap::cli::Cli::command();
    clap_mangen::generate_to(cmd, out_dir).context("Failed to render man pages")?;

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}
