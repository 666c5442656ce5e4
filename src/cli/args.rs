//! Command line argument definitions.

use crate::models::config::{FileConfig, MatchConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Subtitle Matcher - Rename subtitles to match their videos
#[derive(Parser, Debug)]
#[command(name = "subtitle-matcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match subtitles to videos and rename them (dry run unless --execute)
    Match(MatchArgs),

    /// Undo the renames recorded in a report file
    Rollback {
        /// Path to the report JSON file
        #[arg(value_name = "REPORT_FILE")]
        report_file: PathBuf,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct MatchArgs {
    /// Directory containing videos and subtitles
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Actually rename files (default is a dry run)
    #[arg(long)]
    pub execute: bool,

    /// Minimum similarity (0.0-1.0) for a match
    #[arg(short, long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Only scan the top-level directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Leave out subtitles that already match their video's name
    #[arg(long)]
    pub ignore_existing: bool,

    /// Video extension to scan for (repeatable, replaces the defaults)
    #[arg(long = "video-ext", value_name = "EXT")]
    pub video_extensions: Vec<String>,

    /// Subtitle extension to scan for (repeatable, replaces the defaults)
    #[arg(long = "subtitle-ext", value_name = "EXT")]
    pub subtitle_extensions: Vec<String>,

    /// Save the match report to this JSON file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Config file (default: <config dir>/subtitle_matcher/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl MatchArgs {
    /// Build the run configuration: defaults, then the config file, then flags.
    pub fn to_config(&self, file: &FileConfig, verbose: bool) -> MatchConfig {
        let mut config = MatchConfig::default()
            .merge_file(file)
            .with_dry_run(!self.execute)
            .with_verbose(verbose);

        if let Some(threshold) = self.threshold {
            config.set_threshold(threshold);
        }
        if self.no_recursive {
            config.recursive = false;
        }
        if self.ignore_existing {
            config.ignore_existing = true;
        }
        if !self.video_extensions.is_empty() {
            config = config.with_video_extensions(&self.video_extensions);
        }
        if !self.subtitle_extensions.is_empty() {
            config = config.with_subtitle_extensions(&self.subtitle_extensions);
        }

        config
    }
}
