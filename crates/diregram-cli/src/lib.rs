//! CLI logic for the Diregram validator.
//!
//! This module contains the core CLI logic: configuration loading,
//! reading the input document, running validation, and applying the
//! configured issue-code suppressions.

mod args;
mod config;
mod report;

pub use args::Args;
pub use config::{CliConfig, ConfigError};
pub use report::write_report;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use miette::Diagnostic;
use thiserror::Error;

use diregram::ValidationReport;

/// Fatal CLI failures.
///
/// Everything the validator can report about the document itself lives
/// in the [`ValidationReport`]; these variants cover the conditions that
/// prevent a run from starting at all.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("file not found: {}", .0.display())]
    #[diagnostic(code(diregram::cli::missing_input))]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    #[diagnostic(code(diregram::cli::io))]
    Io(#[from] io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Run the Diregram validator
///
/// This function loads configuration, reads the input document, runs
/// validation, and drops any suppressed issue codes from the report.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - A missing input file
/// - File I/O errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<ValidationReport, CliError> {
    info!(input = args.input; "Validating document");

    let config = config::load_config(args.config.as_ref())?;

    let path = Path::new(&args.input);
    if !path.exists() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path)?;

    let mut report = diregram::validate(&source);

    if !config.ignore.is_empty() {
        let before = report.issues().len();
        report.retain(|issue| !config.ignore.iter().any(|code| code == issue.code().as_str()));
        debug!(
            suppressed = before - report.issues().len();
            "Applied configured issue-code suppressions"
        );
    }

    info!(
        errors = report.error_count(),
        warnings = report.warning_count();
        "Validation finished"
    );

    Ok(report)
}
