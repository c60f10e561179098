//! Command-line argument definitions for the Diregram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the input document,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Diregram validator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Diregram document
    #[arg(help = "Path to the document to validate")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
