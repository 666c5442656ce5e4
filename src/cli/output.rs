//! Console reporting.
//!
//! Everything here writes to a caller-supplied writer so the output can be
//! captured in tests.

use crate::core::rollback::RollbackResult;
use crate::models::config::MatchConfig;
use crate::models::report::{MatchResult, MatchSummary};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print one line per accepted match (and per rejection when verbose),
/// followed by the run summary.
pub fn print_results<W: Write>(
    out: &mut W,
    results: &[MatchResult],
    config: &MatchConfig,
) -> io::Result<()> {
    for result in results {
        match (&result.new_subtitle_path, &result.video_path) {
            (Some(new_path), Some(video)) => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{} ({:.2} similarity):",
                    "Match found".bold().green(),
                    result.similarity
                )?;
                writeln!(out, "  Subtitle: {}", file_name(&result.subtitle_path))?;
                writeln!(out, "  Video:    {}", file_name(video))?;
                writeln!(out, "  New name: {}", file_name(new_path))?;
                print_status(out, result, config)?;
            }
            _ if config.verbose => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{} {} (best score: {:.2})",
                    "No good match found for:".yellow(),
                    file_name(&result.subtitle_path),
                    result.similarity
                )?;
            }
            _ => {}
        }
    }

    writeln!(out)?;
    print_summary(out, &MatchSummary::from_results(results), config.dry_run)
}

fn print_status<W: Write>(out: &mut W, result: &MatchResult, config: &MatchConfig) -> io::Result<()> {
    if let Some(error) = &result.error {
        return writeln!(out, "  {} {}", "[ERROR] Error renaming:".red(), error);
    }
    if result.was_moved() {
        writeln!(out, "  {}", "[OK] Renamed successfully".green())
    } else if result.renamed || result.new_subtitle_path.as_ref() == Some(&result.subtitle_path) {
        writeln!(out, "  {}", "[OK] Already correctly named".green())
    } else if config.dry_run {
        writeln!(out, "  {}", "[DRY-RUN] Would rename".yellow())
    } else {
        Ok(())
    }
}

/// Print the closing summary of a matching run.
pub fn print_summary<W: Write>(out: &mut W, summary: &MatchSummary, dry_run: bool) -> io::Result<()> {
    if dry_run {
        writeln!(
            out,
            "{} {} subtitles would be renamed.",
            "Dry run completed.".bold(),
            summary.matched
        )?;
        writeln!(out, "Use --execute to perform actual renaming.")?;
    } else {
        writeln!(
            out,
            "{} {} subtitles processed.",
            "Renaming completed.".bold(),
            summary.matched
        )?;
        if summary.failed > 0 {
            writeln!(out, "{} {} renames failed.", "[WARNING]".yellow(), summary.failed)?;
        }
    }
    Ok(())
}

/// Print the rollback summary.
pub fn print_rollback_summary<W: Write>(out: &mut W, result: &RollbackResult) -> io::Result<()> {
    writeln!(out, "{}", "Rollback Summary".bold().green())?;
    writeln!(out, "  {} {}", "Successful:".bold(), result.success_count)?;
    writeln!(out, "  {} {}", "Skipped:".bold(), result.skip_count)?;
    writeln!(out, "  {} {}", "Failed:".bold(), result.error_count)?;

    if !result.errors.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Errors:".bold().red())?;
        for error in &result.errors {
            writeln!(out, "  - {}", error)?;
        }
    }
    Ok(())
}
