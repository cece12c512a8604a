//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Inspect, extract and load the systemhook native library.
#[derive(Parser)]
#[command(name = "systemhook")]
#[command(about = "Resolve, extract and load the systemhook native library")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
