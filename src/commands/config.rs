//! Config subcommands handler

use anyhow::{Context, Result};
use std::path::Path;

use framecap::config::{config_root, Config, VideoCandidate};
use framecap::manifest::ListKind;

/// Show the effective configuration as TOML.
///
/// Falls back to the built-in default dataset when the file cannot be used,
/// exactly like `build` does.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let toml_str = toml::to_string_pretty(&config).context("Failed to render config as TOML")?;
    print!("{}", toml_str);
    Ok(())
}

/// List datasets with resolved directories and video sources.
pub fn handle_datasets(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let root = config_root(config_path);
    let default = config.pick_dataset(None).map(|d| d.id.clone());

    for dataset in &config.datasets {
        let marker = if default.as_deref() == Some(dataset.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{} {} ({})", marker, dataset.id, dataset.display_name());

        let paths = dataset.paths(&root);
        for kind in ListKind::ALL {
            println!("    {:<8} {}", kind, paths.dir(kind).display());
        }
        for candidate in dataset.video_candidates(&root) {
            match candidate {
                VideoCandidate::Remote(url) => println!("    video    {}", url),
                VideoCandidate::Local(path) => println!("    video    {} (fallback)", path.display()),
            }
        }
    }
    Ok(())
}
