//! Subtitle Matcher CLI
//!
//! Renames subtitle files after the video files they belong to.

use clap::Parser;
use subtitle_matcher::cli::{
    args::{Cli, Commands},
    commands::{match_files, rollback},
};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Match(args) => {
            match_files::match_files(&args, cli.verbose, &mut out)?;
        }

        Commands::Rollback { report_file, dry_run } => {
            rollback::rollback(&report_file, dry_run, &mut out)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("subtitle_matcher=debug")
    } else {
        EnvFilter::new("subtitle_matcher=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
