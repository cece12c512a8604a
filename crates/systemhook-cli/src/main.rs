//! CLI entry point.

use clap::Parser;
use systemhook_cli::{Cli, Commands, handlers};
use systemhook_core::LoaderConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LoaderConfig::from_env();
    match cli.command {
        Commands::Platform { json } => handlers::platform::execute(json)?,
        Commands::Paths => handlers::paths::execute(&config)?,
        Commands::Extract { resources } => {
            handlers::extract::execute(resources.as_deref(), &config)?;
        }
        Commands::Load { resources } => handlers::load::execute(resources.as_deref(), &config)?,
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise `-v` lowers the level to debug.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
