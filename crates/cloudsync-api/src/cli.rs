//! Command-line flags

use clap::Parser;
use cloudsync_core::constants::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloudsync", about = "Mirror storage notifications to Google Cloud Storage")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
