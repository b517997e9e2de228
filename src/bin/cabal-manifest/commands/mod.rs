//! Command implementations

pub mod completions;
pub mod deps;
pub mod parse;
pub mod tokens;

use std::path::Path;

use cabal_manifest::util::config::{self, Config};

/// Load global and project configuration; `--config` replaces the project file.
pub fn load_config(explicit: Option<&Path>) -> Config {
    let project = match explicit {
        Some(path) => {
            if !path.exists() {
                tracing::warn!("Config file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => config::project_config_path(Path::new(".")),
    };

    match config::global_config_path() {
        Some(global) => config::load_config(&global, &project),
        None => Config::load_or_default(&project),
    }
}
