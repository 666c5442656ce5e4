//! Best-match selection over candidate videos.

use crate::core::normalizer::normalize_title;
use crate::core::similarity::similarity;
use crate::utils::fs::file_stem_lossy;
use std::path::{Path, PathBuf};

/// A video file with its normalized title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub title: String,
}

impl Candidate {
    pub fn new(path: PathBuf, title: impl Into<String>) -> Self {
        Self {
            path,
            title: title.into(),
        }
    }

    /// Build a candidate from a path, normalizing its file stem.
    pub fn from_path(path: &Path) -> Self {
        Self::new(path.to_path_buf(), normalize_title(&file_stem_lossy(path)))
    }
}

/// Best candidate for a subtitle and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    /// `None` when no candidate scored above zero.
    pub candidate: Option<&'a Candidate>,
    pub score: f64,
}

impl Selection<'_> {
    pub fn path(&self) -> Option<&Path> {
        self.candidate.map(|c| c.path.as_path())
    }
}

/// Pick the highest scoring candidate for a subtitle title.
///
/// Candidates are visited in order and only a strictly greater score replaces
/// the current best, so the earliest candidate wins a tie. An empty candidate
/// list yields no candidate and a score of 0.0.
pub fn select_best<'a>(subtitle_title: &str, candidates: &'a [Candidate]) -> Selection<'a> {
    let mut best = Selection {
        candidate: None,
        score: 0.0,
    };

    for candidate in candidates {
        let score = similarity(subtitle_title, &candidate.title);
        tracing::trace!("{:?} vs {:?}: {:.3}", subtitle_title, candidate.title, score);
        if score > best.score {
            best = Selection {
                candidate: Some(candidate),
                score,
            };
        }
    }

    best
}
