//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Interactive RSVP guest-list tracker: add guests, view the list, save it between runs
#[derive(Parser, Debug)]
#[command(name = "rsvp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Roster file (default: RSVP.dat, overrides config and RSVP_DATA_FILE)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Enable debug logging. Multiple -d options increase the verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print version info
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
