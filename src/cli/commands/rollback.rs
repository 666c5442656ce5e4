//! Rollback command implementation.
//!
//! Reads a report file and moves renamed subtitles back to their original
//! names.

use crate::cli::output;
use crate::core::renamer::FsRenamer;
use crate::core::report::load_report;
use crate::core::rollback::rollback_report;
use crate::Result;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Execute a rollback.
pub fn rollback<W: Write>(report_file: &Path, dry_run: bool, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "[ROLLBACK] Rollback command".bold().cyan())?;
    writeln!(out)?;

    writeln!(out, "[INFO] Loading report: {}", report_file.display())?;
    let report = load_report(report_file)?;

    writeln!(out, "  {} {}", "Run ID:".bold(), report.run_id)?;
    writeln!(out, "  {} {}", "Created at:".bold(), report.created_at)?;
    writeln!(out, "  {} {}", "Directory:".bold(), report.directory.display())?;
    writeln!(out)?;

    if report.dry_run {
        writeln!(out, "{}", "[INFO] Report is from a dry run, nothing to undo".yellow())?;
    } else if dry_run {
        writeln!(out, "{}", "[DRY-RUN] Showing what would be done:".bold().yellow())?;
    } else {
        writeln!(out, "{}", "[WARNING] This will restore the original subtitle names!".bold().yellow())?;
    }
    writeln!(out)?;

    let result = rollback_report(&report, &FsRenamer, dry_run);
    output::print_rollback_summary(out, &result)?;
    writeln!(out)?;

    if result.is_success() {
        if dry_run {
            writeln!(out, "{}", "[OK] Dry run complete - no changes were made".green())?;
        } else {
            writeln!(out, "{}", "[OK] Rollback completed successfully!".green())?;
        }
    } else {
        writeln!(out, "{}", "[WARNING] Rollback completed with errors".yellow())?;
    }

    Ok(())
}
