use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::utils::error::{BoxResult, CollapsifyError};

const CONFIG_CANDIDATES: [&str; 2] = ["collapsify.yml", "collapsify.yaml"];

/// Load configuration from `dir`, preferring `explicit` when given.
///
/// Falls back to the built-in defaults when no configuration file exists.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> BoxResult<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(dir),
    };

    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            let config: Config = serde_yaml::from_str(&raw)
                .map_err(|e| CollapsifyError::Config(format!("{}: {}", path.display(), e)))?;
            debug!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}
