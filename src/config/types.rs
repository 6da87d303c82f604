use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::collapse::{CollapseOptions, HeadingLevel};
use crate::config::defaults;

/// Site processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source directory with rendered HTML
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Destination directory for processed pages
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Absolute base URL the pages are served from; state keys derive
    /// from it
    #[serde(default = "defaults::default_base_url")]
    pub base_url: String,

    /// Heading levels that receive a visible toggle control
    #[serde(default = "defaults::default_include")]
    pub include: Vec<HeadingLevel>,

    /// Whether to also collapse nested lists
    #[serde(default = "defaults::default_lists")]
    pub lists: bool,

    /// JSON file holding persisted toggle state, if any
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            base_url: defaults::default_base_url(),
            include: defaults::default_include(),
            lists: defaults::default_lists(),
            state_file: None,
        }
    }
}

impl Config {
    /// Options for the sections pass.
    pub fn collapse_options(&self) -> CollapseOptions {
        CollapseOptions {
            include: self.include.clone(),
        }
    }
}
