//! Configuration model.
//!
//! `MatchConfig` is built once before a run and read-only for its duration.
//! `FileConfig` is the optional TOML layer that sits between the defaults and
//! the command-line flags.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default video file extensions.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "mov", "webm"];

/// Default subtitle file extensions.
pub const DEFAULT_SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "vtt"];

/// Default minimum similarity for a match to be accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Matching configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Video extensions, lowercase and without the leading dot.
    pub video_extensions: Vec<String>,
    /// Subtitle extensions, lowercase and without the leading dot.
    pub subtitle_extensions: Vec<String>,
    /// Similarity threshold in [0, 1]. Only changed through `set_threshold`.
    threshold: f64,
    /// Scan subdirectories too.
    pub recursive: bool,
    /// Report what would happen without renaming anything.
    pub dry_run: bool,
    /// Print rejected subtitles as well as matches.
    pub verbose: bool,
    /// Drop results for subtitles that already carry the right name.
    pub ignore_existing: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            video_extensions: to_extensions(DEFAULT_VIDEO_EXTENSIONS),
            subtitle_extensions: to_extensions(DEFAULT_SUBTITLE_EXTENSIONS),
            threshold: DEFAULT_THRESHOLD,
            recursive: true,
            dry_run: true,
            verbose: false,
            ignore_existing: false,
        }
    }
}

impl MatchConfig {
    /// Current similarity threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Set the similarity threshold.
    ///
    /// Values outside [0, 1] (and NaN) are ignored and the current threshold
    /// is kept. Returns whether the value was applied.
    pub fn set_threshold(&mut self, threshold: f64) -> bool {
        if (0.0..=1.0).contains(&threshold) {
            self.threshold = threshold;
            true
        } else {
            tracing::warn!(
                "Ignoring similarity threshold {} (must be between 0.0 and 1.0), keeping {}",
                threshold,
                self.threshold
            );
            false
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.set_threshold(threshold);
        self
    }

    pub fn with_video_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.video_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_subtitle_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subtitle_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_ignore_existing(mut self, ignore_existing: bool) -> Self {
        self.ignore_existing = ignore_existing;
        self
    }

    /// Check whether an extension (any case, dot optional) is a video extension.
    pub fn is_video_extension(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.video_extensions.iter().any(|e| *e == ext)
    }

    /// Check whether an extension (any case, dot optional) is a subtitle extension.
    pub fn is_subtitle_extension(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.subtitle_extensions.iter().any(|e| *e == ext)
    }

    /// Apply the values present in a config file on top of this config.
    pub fn merge_file(mut self, file: &FileConfig) -> Self {
        if let Some(exts) = &file.video_extensions {
            self = self.with_video_extensions(exts);
        }
        if let Some(exts) = &file.subtitle_extensions {
            self = self.with_subtitle_extensions(exts);
        }
        if let Some(threshold) = file.threshold {
            self.set_threshold(threshold);
        }
        if let Some(recursive) = file.recursive {
            self.recursive = recursive;
        }
        if let Some(ignore_existing) = file.ignore_existing {
            self.ignore_existing = ignore_existing;
        }
        self
    }
}

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub video_extensions: Option<Vec<String>>,
    pub subtitle_extensions: Option<Vec<String>>,
    pub threshold: Option<f64>,
    pub recursive: Option<bool>,
    pub ignore_existing: Option<bool>,
}

/// Lowercase an extension and strip its leading dot.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn to_extensions(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("subtitle_matcher")
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load a config file from an explicit path.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit path must load successfully. Without one, the default config
/// file is used when present and readable, otherwise defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_file_config(path)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)));
    }

    let path = default_config_path();
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    match load_file_config(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            Ok(FileConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.threshold(), 0.6);
        assert!(config.recursive);
        assert!(config.dry_run);
        assert!(!config.ignore_existing);
        assert!(config.is_video_extension("mkv"));
        assert!(config.is_subtitle_extension("srt"));
    }

    #[test]
    fn test_threshold_out_of_range_is_ignored() {
        let mut config = MatchConfig::default().with_threshold(0.8);
        assert_eq!(config.threshold(), 0.8);

        assert!(!config.set_threshold(1.5));
        assert_eq!(config.threshold(), 0.8);

        assert!(!config.set_threshold(-0.1));
        assert!(!config.set_threshold(f64::NAN));
        assert_eq!(config.threshold(), 0.8);
    }

    #[test]
    fn test_threshold_bounds_are_inclusive() {
        assert_eq!(MatchConfig::default().with_threshold(0.0).threshold(), 0.0);
        assert_eq!(MatchConfig::default().with_threshold(1.0).threshold(), 1.0);
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let config = MatchConfig::default().with_video_extensions([".MKV", "Mp4"]);
        assert_eq!(config.video_extensions, vec!["mkv", "mp4"]);
        assert!(config.is_video_extension("MKV"));
        assert!(config.is_video_extension(".mp4"));
        assert!(!config.is_video_extension("avi"));
    }

    #[test]
    fn test_merge_file() {
        let file: FileConfig = toml::from_str(
            r#"
            subtitle_extensions = [".ASS"]
            threshold = 0.75
            recursive = false
            "#,
        )
        .unwrap();

        let config = MatchConfig::default().merge_file(&file);
        assert_eq!(config.subtitle_extensions, vec!["ass"]);
        assert_eq!(config.threshold(), 0.75);
        assert!(!config.recursive);
        // untouched
        assert_eq!(config.video_extensions.len(), DEFAULT_VIDEO_EXTENSIONS.len());
        assert!(!config.ignore_existing);
    }

    #[test]
    fn test_merge_file_invalid_threshold_keeps_default() {
        let file = FileConfig {
            threshold: Some(3.0),
            ..Default::default()
        };
        let config = MatchConfig::default().merge_file(&file);
        assert_eq!(config.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let result = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
