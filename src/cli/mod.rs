//! CLI layer: argument parsing and top-level error mapping

pub mod args;
pub mod error;
pub mod output;

pub use args::Cli;
pub use error::{CliError, CliResult};
