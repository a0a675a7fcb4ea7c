//! Build subcommand handler

use anyhow::{bail, Result};
use std::path::Path;

use framecap::config::{config_root, Config, Dataset};
use framecap::manifest::{build_dataset, BuildOutcome, ListKind};

/// Build manifests for the configured datasets.
///
/// A missing image directory or a failing dataset is reported and the
/// remaining datasets are still processed.
pub fn handle(config_path: &Path, only: Option<ListKind>, dataset_id: Option<&str>) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let root = config_root(config_path);
    let kinds: Vec<ListKind> = match only {
        Some(kind) => vec![kind],
        None => ListKind::ALL.to_vec(),
    };

    let datasets: Vec<&Dataset> = match dataset_id {
        Some(id) => match config.dataset_by_id(id) {
            Some(dataset) => vec![dataset],
            None => bail!("Unknown dataset '{}'", id),
        },
        None => config.datasets.iter().collect(),
    };

    let mut failed = 0usize;
    for dataset in datasets {
        match build_dataset(dataset, &root, &kinds) {
            Ok(outcomes) => {
                for outcome in outcomes {
                    print_outcome(dataset, &outcome);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!(
                    "Error: failed to build manifests for dataset \"{}\": {}",
                    dataset.id, e
                );
            }
        }
    }

    if failed > 0 {
        bail!("{} dataset(s) could not be built", failed);
    }
    Ok(())
}

fn print_outcome(dataset: &Dataset, outcome: &BuildOutcome) {
    match outcome {
        BuildOutcome::Written { kind, path, count } => {
            println!(
                "Wrote {} manifest with {} entries to {}",
                kind,
                count,
                path.display()
            );
        }
        BuildOutcome::Skipped { kind, dir } => {
            eprintln!(
                "Warning: {} directory not found for dataset \"{}\": {}",
                kind,
                dataset.id,
                dir.display()
            );
        }
    }
}
