//! Directory scanner module.
//!
//! Collects video and subtitle files under a directory, filtered by the
//! configured extension lists.

use crate::models::config::MatchConfig;
use crate::utils::fs::{ensure_directory, get_extension};
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Video files found, in walk order.
    pub videos: Vec<PathBuf>,
    /// Subtitle files found, in walk order.
    pub subtitles: Vec<PathBuf>,
    /// Total files scanned.
    pub total_files_scanned: usize,
}

/// Scan a directory for video and subtitle files.
///
/// Walks the whole tree when `config.recursive` is set, otherwise only the
/// top level. Entries are visited in file-name order. Every non-directory
/// entry is classified, symlinks included. Any traversal error aborts the
/// scan.
pub fn scan_directory(path: &Path, config: &MatchConfig) -> Result<ScanResult> {
    ensure_directory(path)?;

    let mut walker = WalkDir::new(path)
        .follow_links(false)
        .sort_by_file_name();
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let mut result = ScanResult::default();

    for entry in walker {
        let entry = entry.map_err(|source| crate::Error::Scan {
            path: path.to_path_buf(),
            source,
        })?;

        // Symlinked media counts like a regular file
        if entry.file_type().is_dir() {
            continue;
        }
        result.total_files_scanned += 1;

        let entry_path = entry.path();
        let Some(ext) = get_extension(entry_path) else {
            continue;
        };

        if config.is_video_extension(&ext) {
            result.videos.push(entry_path.to_path_buf());
        } else if config.is_subtitle_extension(&ext) {
            result.subtitles.push(entry_path.to_path_buf());
        }
    }

    tracing::info!(
        "Scanned {} files: {} videos, {} subtitles",
        result.total_files_scanned,
        result.videos.len(),
        result.subtitles.len()
    );

    Ok(result)
}

// Integration tests for scan_directory() live in tests/scanner_tests.rs
