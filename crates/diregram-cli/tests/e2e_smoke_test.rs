use std::fs;

use tempfile::tempdir;

use diregram_cli::{Args, CliError, run, write_report};

fn args_for(input: &str) -> Args {
    Args {
        input: input.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

const VALID_DOCUMENT: &str = concat!(
    "Intake\n",
    "  Greet the applicant #flow# <!-- tags:actor-staff -->\n",
    "---\n",
    "```tag-store\n",
    "{\"groups\": [{\"id\": \"tg-actors\"}],\n",
    " \"tags\": [{\"id\": \"actor-staff\", \"groupId\": \"tg-actors\"}]}\n",
    "```\n",
);

const INVALID_DOCUMENT: &str = concat!(
    "Process the case #flow#\n",
    "---\n",
    "```tag-store\n",
    "{\"groups\": [{\"id\": \"tg-actors\"}], \"tags\": []}\n",
    "```\n",
);

#[test]
fn e2e_valid_document_produces_clean_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("valid.md");
    fs::write(&input, VALID_DOCUMENT).expect("Failed to write document");

    let report = run(&args_for(&input.to_string_lossy())).expect("run should succeed");

    assert!(!report.has_errors());
    assert_eq!(report.warning_count(), 0);

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).expect("Writing to Vec is infallible");
    assert_eq!(
        String::from_utf8(buffer).expect("report is UTF-8"),
        "\nSummary: errors=0, warnings=0\n"
    );
}

#[test]
fn e2e_invalid_document_reports_errors() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("invalid.md");
    fs::write(&input, INVALID_DOCUMENT).expect("Failed to write document");

    let report = run(&args_for(&input.to_string_lossy())).expect("run should succeed");

    assert!(report.has_errors());

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).expect("Writing to Vec is infallible");
    let output = String::from_utf8(buffer).expect("report is UTF-8");
    assert_eq!(
        output,
        concat!(
            "ERROR   MISSING_ACTOR_TAG: Line 1 is #flow# but has no actor tag (group tg-actors).\n",
            "\n",
            "Summary: errors=1, warnings=0\n",
        )
    );
}

#[test]
fn e2e_missing_input_file() {
    let result = run(&args_for("/definitely/not/a/file.md"));
    assert!(matches!(result, Err(CliError::InputNotFound(_))));
}

#[test]
fn e2e_configured_ignore_list_suppresses_codes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input = temp_dir.path().join("doc.md");
    fs::write(&input, INVALID_DOCUMENT).expect("Failed to write document");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "ignore = [\"MISSING_ACTOR_TAG\"]\n").expect("Failed to write config");

    let args = Args {
        input: input.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let report = run(&args).expect("run should succeed");
    assert!(!report.has_errors());
    assert!(report.is_clean());
}

#[test]
fn e2e_missing_config_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("doc.md");
    fs::write(&input, VALID_DOCUMENT).expect("Failed to write document");

    let args = Args {
        input: input.to_string_lossy().to_string(),
        config: Some("nope/missing.toml".to_string()),
        log_level: "off".to_string(),
    };

    assert!(matches!(run(&args), Err(CliError::Config(_))));
}
