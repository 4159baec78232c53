//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Auto-hiding drop panel for quick access to your folders
#[derive(Parser, Debug)]
#[command(name = "quickdrop", version, about)]
pub struct CliArgs {
    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with the panel visible instead of waiting for the edge
    /// trigger
    #[arg(long)]
    pub show: bool,
}
