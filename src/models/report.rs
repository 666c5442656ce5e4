//! Match result and report data model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report format version.
pub const REPORT_VERSION: &str = "1.0";

/// Outcome for a single subtitle file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Original subtitle path.
    pub subtitle_path: PathBuf,
    /// Best matching video, if any candidate scored above zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_path: Option<PathBuf>,
    /// Target subtitle path. Only set when the match was accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_subtitle_path: Option<PathBuf>,
    /// Similarity score (0.0-1.0).
    pub similarity: f64,
    /// Whether the subtitle now carries its target name.
    pub renamed: bool,
    /// Rename failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResult {
    /// Whether the match cleared the threshold.
    pub fn is_match(&self) -> bool {
        self.new_subtitle_path.is_some()
    }

    /// Whether a file was actually moved (as opposed to already being named correctly).
    pub fn was_moved(&self) -> bool {
        self.renamed
            && self
                .new_subtitle_path
                .as_ref()
                .is_some_and(|p| *p != self.subtitle_path)
    }
}

/// A saved matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Report version.
    pub version: String,
    /// Unique run ID.
    pub run_id: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Directory that was scanned.
    pub directory: PathBuf,
    /// Whether the run was a dry run.
    pub dry_run: bool,
    /// Threshold used for the run.
    pub threshold: f64,
    /// Per-subtitle results, in scan order.
    pub results: Vec<MatchResult>,
}

impl MatchReport {
    pub fn new(directory: PathBuf, dry_run: bool, threshold: f64, results: Vec<MatchResult>) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            run_id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            directory,
            dry_run,
            threshold,
            results,
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary::from_results(&self.results)
    }
}

/// Counts over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub processed: usize,
    pub matched: usize,
    pub renamed: usize,
    pub failed: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = MatchSummary {
            processed: results.len(),
            ..Default::default()
        };
        for result in results {
            if result.is_match() {
                summary.matched += 1;
            } else {
                summary.unmatched += 1;
            }
            if result.renamed && result.error.is_none() {
                summary.renamed += 1;
            }
            if result.error.is_some() {
                summary.failed += 1;
            }
        }
        summary
    }
}
