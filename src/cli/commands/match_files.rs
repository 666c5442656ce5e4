//! Match command implementation.
//!
//! Scans a directory, matches subtitles to videos, renames them when asked
//! and saves a report for rollback.

use crate::cli::args::MatchArgs;
use crate::cli::output;
use crate::core::engine::MatchEngine;
use crate::core::report::{save_report, save_to_sessions, sessions_dir};
use crate::models::config::load_config;
use crate::models::report::MatchReport;
use crate::Result;
use colored::Colorize;
use std::io::Write;

/// Run the match command, writing the console report to `out`.
pub fn match_files<W: Write>(args: &MatchArgs, verbose: bool, out: &mut W) -> Result<()> {
    let file_config = load_config(args.config.as_deref())?;
    let config = args.to_config(&file_config, verbose);

    writeln!(out, "{}", "[MATCH] Matching subtitles...".bold().cyan())?;
    writeln!(out, "  {} {}", "Directory:".bold(), args.directory.display())?;
    writeln!(out, "  {} {:.2}", "Threshold:".bold(), config.threshold())?;
    if config.dry_run {
        writeln!(out, "  {}", "[DRY-RUN] No files will be renamed".yellow())?;
    }

    let engine = MatchEngine::new(config);
    let results = engine.run_directory(&args.directory)?;

    output::print_results(out, &results, engine.config())?;

    let report = MatchReport::new(
        args.directory.clone(),
        engine.config().dry_run,
        engine.config().threshold(),
        results,
    );

    if let Some(path) = &args.report {
        save_report(&report, path)?;
        writeln!(out, "{} {}", "[OK] Report saved to:".bold().green(), path.display())?;
    } else if report.results.iter().any(|r| r.was_moved()) {
        let path = save_to_sessions(&report, &sessions_dir())?;
        writeln!(out)?;
        writeln!(out, "{} {}", "[OK] Report saved to:".bold().green(), path.display())?;
        writeln!(
            out,
            "  To undo changes: {}",
            format!("subtitle-matcher rollback {}", path.display()).cyan()
        )?;
    }

    Ok(())
}
