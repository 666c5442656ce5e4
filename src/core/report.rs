//! Report persistence.
//!
//! Reports are saved as pretty JSON, either where the user asks or in the
//! sessions directory so a run can be rolled back later.

use crate::models::config::config_dir;
use crate::models::report::MatchReport;
use crate::Result;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Save a report to a JSON file.
pub fn save_report(report: &MatchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;

    tracing::info!("Report saved to {:?}", path);
    Ok(())
}

/// Load a report from a JSON file.
pub fn load_report(path: &Path) -> Result<MatchReport> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| crate::Error::InvalidReport(format!("{}: {}", path.display(), e)))
}

/// Get the sessions directory.
pub fn sessions_dir() -> PathBuf {
    config_dir().join("sessions")
}

/// File name for a report saved to the sessions directory.
pub fn session_file_name(report: &MatchReport) -> String {
    let short_id: String = report.run_id.chars().take(8).collect();
    format!("{}_{}.json", Utc::now().format("%Y%m%d_%H%M%S"), short_id)
}

/// Save a report into `dir` under a timestamped name.
pub fn save_to_sessions(report: &MatchReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(session_file_name(report));
    save_report(report, &path)?;
    Ok(path)
}
