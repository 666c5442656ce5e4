//! Rollback execution module.
//!
//! Moves renamed subtitles back to the names recorded in a report.

use crate::core::renamer::Renamer;
use crate::models::report::{MatchReport, MatchResult};
use crate::Result;
use std::path::Path;

/// Result of a rollback execution.
#[derive(Debug, Default)]
pub struct RollbackResult {
    /// Number of successful operations.
    pub success_count: usize,
    /// Number of skipped operations.
    pub skip_count: usize,
    /// Number of failed operations.
    pub error_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
}

impl RollbackResult {
    /// Check if rollback was successful.
    pub fn is_success(&self) -> bool {
        self.error_count == 0
    }
}

/// Undo the renames recorded in a report.
///
/// Only results that actually moved a file are reversed, last rename first.
/// A report written by a dry run has nothing to undo. A renamed file that no
/// longer exists is skipped. An original path that is occupied again is
/// reported as an error. In dry-run mode nothing is touched.
pub fn rollback_report<R: Renamer>(
    report: &MatchReport,
    renamer: &R,
    dry_run: bool,
) -> RollbackResult {
    let mut result = RollbackResult::default();

    if report.dry_run {
        tracing::info!("Run {} was a dry run, nothing to roll back", report.run_id);
        return result;
    }

    let moved: Vec<&MatchResult> = report.results.iter().filter(|r| r.was_moved()).collect();
    tracing::info!("Rolling back {} renames from run {}", moved.len(), report.run_id);

    for item in moved.into_iter().rev() {
        let Some(renamed) = item.new_subtitle_path.as_deref() else {
            continue;
        };
        let original = item.subtitle_path.as_path();

        if dry_run {
            tracing::info!("[DRY RUN] {} -> {}", renamed.display(), original.display());
            result.success_count += 1;
            continue;
        }

        match undo_rename(renamer, renamed, original) {
            Ok(true) => result.success_count += 1,
            Ok(false) => result.skip_count += 1,
            Err(e) => {
                let error_msg = format!("{}: {}", renamed.display(), e);
                tracing::error!("Rollback operation failed: {}", error_msg);
                result.errors.push(error_msg);
                result.error_count += 1;
            }
        }
    }

    result
}

fn undo_rename<R: Renamer>(renamer: &R, renamed: &Path, original: &Path) -> Result<bool> {
    if !renamed.exists() {
        tracing::warn!("Renamed file not found, skipping: {:?}", renamed);
        return Ok(false);
    }

    renamer.rename(renamed, original)?;
    tracing::debug!("Moved back: {:?} -> {:?}", renamed, original);
    Ok(true)
}


// Integration tests for rollback_report() live in tests/rollback_tests.rs
