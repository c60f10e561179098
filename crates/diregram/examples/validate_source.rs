//! Example: Validating a Diregram document from source text
//!
//! This example demonstrates the basic workflow of:
//! 1. Assembling a Diregram document as a string
//! 2. Validating it into a report
//! 3. Inspecting the issues by severity

use diregram::validate;

fn main() {
    // A small document: an annotated outline, the region separator, and
    // the metadata blocks the markers refer to.
    let source = concat!(
        "Intake\n",
        "  Greet the applicant #flow# <!-- tags:actor-staff -->\n",
        "  Submit the form #flow# <!-- tags:actor-applicant -->\n",
        "  Wait for partner assessment #flow# <!-- tags:actor-partner -->\n",
        "---\n",
        "```tag-store\n",
        "{\"groups\": [{\"id\": \"tg-actors\"}],\n",
        " \"tags\": [{\"id\": \"actor-staff\", \"groupId\": \"tg-actors\"},\n",
        "           {\"id\": \"actor-applicant\", \"groupId\": \"tg-actors\"},\n",
        "           {\"id\": \"actor-partner\", \"groupId\": \"tg-actors\"}]}\n",
        "```\n",
    );

    println!("Validating document...");
    let report = validate(source);

    for issue in report.errors() {
        println!("error   {}: {}", issue.code(), issue.message());
    }
    for issue in report.warnings() {
        println!("warning {}: {}", issue.code(), issue.message());
    }

    println!(
        "\nDone: {} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}
