//! Command-line argument definitions for the Constellation CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input files, view settings, output
//! destination, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Constellation diagram canvas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Paths to the input DOT files
    #[arg(required = true, help = "Paths to the input DOT files")]
    pub inputs: Vec<String>,

    /// Path to the output report file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Connection visibility mode (all, subset-only, none)
    #[arg(long)]
    pub mode: Option<String>,

    /// Hide shared connections with this many shared labels or fewer
    #[arg(long)]
    pub min_shared: Option<usize>,

    /// Hide subset connections implied by a two-hop subset path
    #[arg(long)]
    pub hide_transitive: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
