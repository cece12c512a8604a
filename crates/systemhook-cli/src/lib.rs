//! Diagnostic command-line front end for `systemhook-runtime`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
