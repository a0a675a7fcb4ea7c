use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::Level;

use framecap::cli::{Cli, Commands, ConfigAction, TimecodeAction};

mod commands;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            config,
            only,
            dataset,
        } => commands::build::handle(&config, only, dataset.as_deref()),
        Commands::Timecode { action } => match action {
            TimecodeAction::Encode { seconds } => commands::timecode::handle_encode(seconds),
            TimecodeAction::Decode { text } => commands::timecode::handle_decode(&text),
        },
        Commands::ExportName {
            at,
            label,
            full_frame,
        } => commands::timecode::handle_export_name(at, label.as_deref(), full_frame),
        Commands::Inspect {
            manifest,
            kind,
            json,
        } => commands::inspect::handle(&manifest, kind, json),
        Commands::Highlight {
            manifest,
            kind,
            at,
            look_back,
            look_ahead,
        } => commands::highlight::handle(&manifest, kind, &at, look_back, look_ahead),
        Commands::Config { action } => match action {
            ConfigAction::Show { config } => commands::config::handle_show(&config),
            ConfigAction::Datasets { config } => commands::config::handle_datasets(&config),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "framecap", &mut std::io::stdout());
            Ok(())
        }
    }
}
