//! Diregram CLI entry point.

use std::{io, process, str::FromStr};

use clap::{Parser, error::ErrorKind};
use log::{LevelFilter, debug, error, info};

use diregram_cli::{Args, CliError, write_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Parse configuration first. Usage problems exit 2 with the message
    // on stdout; --help and --version are not usage problems.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            println!("{err}");
            process::exit(0);
        }
        Err(err) => {
            println!("{err}");
            process::exit(2);
        }
    };

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Diregram validator");
    debug!(args:?; "Parsed arguments");

    match diregram_cli::run(&args) {
        Ok(report) => {
            let stdout = io::stdout();
            if let Err(err) = write_report(&mut stdout.lock(), &report) {
                error!(err:?; "Failed to write report");
                process::exit(1);
            }
            process::exit(if report.has_errors() { 1 } else { 0 });
        }
        Err(CliError::InputNotFound(path)) => {
            println!("FAIL: file not found: {}", path.display());
            process::exit(1);
        }
        Err(err) => {
            let report = miette::Report::new(err);
            error!("{report:?}");
            process::exit(1);
        }
    }
}
