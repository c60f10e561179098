//! Fixed-format report printing.
//!
//! Issues print one per line as `<SEVERITY padded to 7> <CODE>: <message>`
//! with errors before warnings (discovery order within each class),
//! followed by a blank line and the summary line. The format is part of
//! the tool's contract; callers parse it.

use std::io::{self, Write};

use diregram::ValidationReport;

/// Write the full report, including the trailing summary line.
///
/// The report always prints in full — even a clean run gets the empty
/// issue list and the zero-count summary.
pub fn write_report<W: Write>(writer: &mut W, report: &ValidationReport) -> io::Result<()> {
    for issue in report.errors().chain(report.warnings()) {
        writeln!(
            writer,
            "{:<7} {}: {}",
            issue.severity().as_upper_str(),
            issue.code(),
            issue.message()
        )?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "Summary: errors={}, warnings={}",
        report.error_count(),
        report.warning_count()
    )?;
    Ok(())
}
