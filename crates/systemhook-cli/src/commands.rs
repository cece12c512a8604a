//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use systemhook_runtime::ENV_RESOURCE_DIR;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the detected platform and the bundled library it maps to
    Platform {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved loader configuration
    Paths,

    /// Extract the bundled library without loading it
    Extract {
        /// Resource directory or zip/jar archive holding bundled libraries
        #[arg(long, env = ENV_RESOURCE_DIR)]
        resources: Option<PathBuf>,
    },

    /// Run the full load sequence in this process
    Load {
        /// Resource directory or zip/jar archive holding bundled libraries
        #[arg(long, env = ENV_RESOURCE_DIR)]
        resources: Option<PathBuf>,
    },
}
