use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::collapse::HeadingLevel;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "collapsify")]
#[command(about = "Collapsible sections and lists for rendered HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to ./_site)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Process rendered HTML pages
    #[command(alias = "p")]
    Process {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Base URL the pages are served from
        #[arg(short, long, value_name = "URL")]
        base_url: Option<String>,

        /// Heading levels that receive a toggle control (e.g. h2,h3)
        #[arg(short, long, value_name = "LEVELS", value_delimiter = ',')]
        include: Option<Vec<HeadingLevel>>,

        /// Skip the collapsible-lists pass
        #[arg(long, default_value_t = false)]
        no_lists: bool,

        /// JSON file holding persisted toggle state
        #[arg(long, value_name = "FILE")]
        state_file: Option<PathBuf>,
    },

    /// Remove the destination directory without processing
    Clean {},
}
