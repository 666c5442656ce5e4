//! Match engine.
//!
//! For every subtitle: normalize its title, pick the best video, apply the
//! threshold, compute the target name and (optionally) rename. Each subtitle
//! is matched independently against all videos; there is no global
//! assignment, so two subtitles can pick the same video.

use crate::core::normalizer::normalize_title;
use crate::core::renamer::{FsRenamer, Renamer};
use crate::core::scanner::scan_directory;
use crate::core::selector::{select_best, Candidate};
use crate::models::config::MatchConfig;
use crate::models::report::MatchResult;
use crate::utils::fs::{file_stem_lossy, renamed_subtitle_path};
use crate::Result;
use std::path::{Path, PathBuf};

/// Subtitle-to-video matcher.
pub struct MatchEngine<R: Renamer = FsRenamer> {
    config: MatchConfig,
    renamer: R,
}

impl MatchEngine<FsRenamer> {
    /// Create an engine that renames on the local file system.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_renamer(config, FsRenamer)
    }
}

impl<R: Renamer> MatchEngine<R> {
    /// Create an engine with a custom renamer.
    pub fn with_renamer(config: MatchConfig, renamer: R) -> Self {
        Self { config, renamer }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Compute results without renaming anything, whatever `dry_run` says.
    pub fn preview(&self, videos: &[PathBuf], subtitles: &[PathBuf]) -> Vec<MatchResult> {
        self.process(videos, subtitles, false)
    }

    /// Compute results and rename matched subtitles unless in dry-run mode.
    pub fn run(&self, videos: &[PathBuf], subtitles: &[PathBuf]) -> Vec<MatchResult> {
        self.process(videos, subtitles, !self.config.dry_run)
    }

    /// Scan a directory, then run.
    ///
    /// A scan failure is returned before any subtitle is processed.
    pub fn run_directory(&self, dir: &Path) -> Result<Vec<MatchResult>> {
        let scan = scan_directory(dir, &self.config)?;
        Ok(self.run(&scan.videos, &scan.subtitles))
    }

    fn process(&self, videos: &[PathBuf], subtitles: &[PathBuf], apply: bool) -> Vec<MatchResult> {
        tracing::info!(
            "Matching {} subtitles against {} videos (threshold {:.2})",
            subtitles.len(),
            videos.len(),
            self.config.threshold()
        );

        let candidates: Vec<Candidate> = videos.iter().map(|v| Candidate::from_path(v)).collect();

        subtitles
            .iter()
            .filter_map(|subtitle| self.match_subtitle(subtitle, &candidates, apply))
            .collect()
    }

    /// Match one subtitle. `None` means the result is suppressed.
    fn match_subtitle(
        &self,
        subtitle: &Path,
        candidates: &[Candidate],
        apply: bool,
    ) -> Option<MatchResult> {
        let title = normalize_title(&file_stem_lossy(subtitle));
        let selection = select_best(&title, candidates);

        let mut result = MatchResult {
            subtitle_path: subtitle.to_path_buf(),
            video_path: selection.path().map(Path::to_path_buf),
            new_subtitle_path: None,
            similarity: selection.score,
            renamed: false,
            error: None,
        };

        let video = match selection.candidate {
            Some(candidate) if selection.score >= self.config.threshold() => &candidate.path,
            _ => {
                tracing::debug!(
                    "No good match for {} (best score: {:.2})",
                    subtitle.display(),
                    selection.score
                );
                return Some(result);
            }
        };

        let new_path = renamed_subtitle_path(subtitle, video);
        let already_named = new_path == subtitle;

        if already_named && self.config.ignore_existing {
            tracing::debug!("Already correctly named, skipping: {}", subtitle.display());
            return None;
        }

        tracing::debug!(
            "Match ({:.2}): {} -> {}",
            selection.score,
            subtitle.display(),
            new_path.display()
        );

        if apply {
            if already_named {
                result.renamed = true;
            } else {
                match self.renamer.rename(subtitle, &new_path) {
                    Ok(()) => {
                        tracing::info!("Renamed {} -> {}", subtitle.display(), new_path.display());
                        result.renamed = true;
                    }
                    Err(e) => {
                        tracing::error!("Failed to rename {}: {}", subtitle.display(), e);
                        result.error = Some(e.to_string());
                    }
                }
            }
        }

        result.new_subtitle_path = Some(new_path);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records rename requests instead of touching the disk.
    #[derive(Default)]
    struct RecordingRenamer {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
        fail_on: Option<PathBuf>,
    }

    impl Renamer for RecordingRenamer {
        fn rename(&self, from: &Path, to: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((from.to_path_buf(), to.to_path_buf()));
            if self.fail_on.as_deref() == Some(from) {
                return Err(crate::Error::FileAlreadyExists(to.display().to_string()));
            }
            Ok(())
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn executing() -> MatchConfig {
        MatchConfig::default().with_dry_run(false)
    }

    #[test]
    fn test_youtube_subtitle_matches_video() {
        let renamer = RecordingRenamer::default();
        let engine = MatchEngine::with_renamer(executing(), &renamer);

        let results = engine.run(
            &paths(&["/media/How_to_code_[ABC123].mkv"]),
            &paths(&["/media/How_to_code_-_YouTube-zh-CN-dual-double.srt"]),
        );

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.similarity, 1.0);
        assert_eq!(
            result.video_path,
            Some(PathBuf::from("/media/How_to_code_[ABC123].mkv"))
        );
        assert_eq!(
            result.new_subtitle_path,
            Some(PathBuf::from("/media/How_to_code_[ABC123].srt"))
        );
        assert!(result.renamed);
        assert!(result.error.is_none());
        assert_eq!(renamer.calls.borrow().len(), 1);
    }

    #[test]
    fn test_below_threshold_is_rejected() {
        let renamer = RecordingRenamer::default();
        let engine = MatchEngine::with_renamer(executing(), &renamer);

        let results = engine.run(
            &paths(&["/media/abcdefghi.mkv"]),
            &paths(&["/media/abcdefghizzzzzzzzzzz.srt"]),
        );

        let result = &results[0];
        assert!((result.similarity - 0.45).abs() < 1e-9);
        assert_eq!(result.video_path, Some(PathBuf::from("/media/abcdefghi.mkv")));
        assert!(result.new_subtitle_path.is_none());
        assert!(!result.renamed);
        assert!(renamer.calls.borrow().is_empty());
    }

    #[test]
    fn test_score_equal_to_threshold_is_accepted() {
        let renamer = RecordingRenamer::default();
        let config = executing().with_threshold(0.45);
        let engine = MatchEngine::with_renamer(config, &renamer);

        let results = engine.run(
            &paths(&["/media/abcdefghi.mkv"]),
            &paths(&["/media/abcdefghizzzzzzzzzzz.srt"]),
        );

        // 9 / 20 rounds to the same f64 as the literal 0.45
        assert_eq!(results[0].similarity, 9.0 / 20.0);
        assert_eq!(
            results[0].new_subtitle_path,
            Some(PathBuf::from("/media/abcdefghi.srt"))
        );
        assert!(results[0].renamed);
    }

    #[test]
    fn test_dry_run_never_renames() {
        let renamer = RecordingRenamer::default();
        let engine = MatchEngine::with_renamer(MatchConfig::default(), &renamer);

        let results = engine.run(
            &paths(&["/media/Rust_Talk_[x1].mkv", "/media/Other.mkv"]),
            &paths(&[
                "/media/Rust_Talk_-_YouTube.srt",
                "/media/Other.srt",
                "/media/Unrelated_zzz.vtt",
            ]),
        );

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| !r.renamed));
        assert!(renamer.calls.borrow().is_empty());
        // already correct name still gets its result with a target path
        assert_eq!(
            results[1].new_subtitle_path,
            Some(PathBuf::from("/media/Other.srt"))
        );
    }

    #[test]
    fn test_preview_ignores_dry_run_flag() {
        let renamer = RecordingRenamer::default();
        let engine = MatchEngine::with_renamer(executing(), &renamer);

        let results = engine.preview(
            &paths(&["/media/Talk_[abc].mkv"]),
            &paths(&["/media/Talk.srt"]),
        );

        assert!(results[0].is_match());
        assert!(!results[0].renamed);
        assert!(renamer.calls.borrow().is_empty());
    }

    #[test]
    fn test_ignore_existing_suppresses_result() {
        let renamer = RecordingRenamer::default();
        let config = executing().with_ignore_existing(true);
        let engine = MatchEngine::with_renamer(config, &renamer);

        let results = engine.run(
            &paths(&["/media/Talk.mkv", "/media/Lecture_[id9].mkv"]),
            &paths(&["/media/Talk.srt", "/media/Lecture.srt"]),
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].subtitle_path, PathBuf::from("/media/Lecture.srt"));
        assert_eq!(renamer.calls.borrow().len(), 1);
    }

    #[test]
    fn test_already_named_marks_renamed_without_call() {
        let renamer = RecordingRenamer::default();
        let engine = MatchEngine::with_renamer(executing(), &renamer);

        let results = engine.run(&paths(&["/media/Talk.mkv"]), &paths(&["/media/Talk.srt"]));

        assert_eq!(results.len(), 1);
        assert!(results[0].renamed);
        assert!(renamer.calls.borrow().is_empty());
    }

    #[test]
    fn test_rename_failure_is_isolated() {
        let renamer = RecordingRenamer {
            fail_on: Some(PathBuf::from("/media/First.srt")),
            ..Default::default()
        };
        let engine = MatchEngine::with_renamer(executing(), &renamer);

        let results = engine.run(
            &paths(&["/media/First_[a1].mkv", "/media/Second_[b2].mkv"]),
            &paths(&["/media/First.srt", "/media/Second.srt"]),
        );

        assert_eq!(results.len(), 2);
        assert!(!results[0].renamed);
        assert!(results[0]
            .error
            .as_deref()
            .is_some_and(|e| e.contains("already exists")));
        assert!(results[1].renamed);
        assert!(results[1].error.is_none());
        assert_eq!(renamer.calls.borrow().len(), 2);
    }

    #[test]
    fn test_no_videos() {
        let renamer = RecordingRenamer::default();
        let config = executing().with_threshold(0.0);
        let engine = MatchEngine::with_renamer(config, &renamer);

        let results = engine.run(&[], &paths(&["/media/Talk.srt"]));

        assert_eq!(results.len(), 1);
        assert!(results[0].video_path.is_none());
        assert!(results[0].new_subtitle_path.is_none());
        assert_eq!(results[0].similarity, 0.0);
        assert!(renamer.calls.borrow().is_empty());
    }

    #[test]
    fn test_results_follow_subtitle_order() {
        let engine = MatchEngine::with_renamer(MatchConfig::default(), RecordingRenamer::default());

        let subtitles = paths(&["/m/c.srt", "/m/a.srt", "/m/b.srt"]);
        let results = engine.run(&paths(&["/m/a.mkv"]), &subtitles);

        let order: Vec<&PathBuf> = results.iter().map(|r| &r.subtitle_path).collect();
        assert_eq!(order, subtitles.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_tie_picks_first_video() {
        let engine = MatchEngine::with_renamer(MatchConfig::default(), RecordingRenamer::default());

        let results = engine.run(
            &paths(&["/m/Talk_[one].mkv", "/m/Talk_[two].mp4"]),
            &paths(&["/m/Talk.srt"]),
        );

        assert_eq!(results[0].video_path, Some(PathBuf::from("/m/Talk_[one].mkv")));
        assert_eq!(
            results[0].new_subtitle_path,
            Some(PathBuf::from("/m/Talk_[one].srt"))
        );
    }
}
