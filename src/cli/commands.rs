use std::fs;
use std::io;
use std::path::PathBuf;

use log::{error, info};

use crate::builder;
use crate::cli::types::Commands;
use crate::config;

/// Handle the process command
pub fn handle_process_command(
    command: &Commands,
    global_source: Option<&PathBuf>,
    global_destination: Option<&PathBuf>,
) {
    let Commands::Process {
        config: config_file,
        source,
        destination,
        base_url,
        include,
        no_lists,
        state_file,
    } = command
    else {
        return;
    };

    let source = source.clone().or_else(|| global_source.cloned());
    let search_dir = source.clone().unwrap_or_else(|| PathBuf::from("./"));

    let mut config = match config::load_config(&search_dir, config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return;
        }
    };

    // CLI flags win over the configuration file
    if let Some(source) = source {
        config.source = source;
    }
    if let Some(destination) = destination.clone().or_else(|| global_destination.cloned()) {
        config.destination = destination;
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url.clone();
    }
    if let Some(include) = include {
        config.include = include.clone();
    }
    if *no_lists {
        config.lists = false;
    }
    if let Some(state_file) = state_file {
        config.state_file = Some(state_file.clone());
    }

    info!(
        "Processing {} into {}",
        config.source.display(),
        config.destination.display()
    );
    match builder::process_site(&config) {
        Ok(stats) => info!("Done: {} page(s) processed", stats.pages),
        Err(e) => error!("Failed to process site: {}", e),
    }
}

/// Handle the clean command
pub fn handle_clean_command(global_source: Option<&PathBuf>) {
    let search_dir = global_source
        .cloned()
        .unwrap_or_else(|| PathBuf::from("./"));

    let config = match config::load_config(&search_dir, None) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return;
        }
    };

    match fs::remove_dir_all(&config.destination) {
        Ok(()) => info!("Removed {}", config.destination.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => info!("Nothing to clean"),
        Err(e) => error!("Failed to clean {}: {}", config.destination.display(), e),
    }
}
