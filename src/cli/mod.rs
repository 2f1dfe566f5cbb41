//! # CLI Module
//!
//! Command-line interface for the duplicate image detector.
//!
//! ## Usage
//! ```bash
//! # Check one directory with the default perceptual hash
//! dupe-detect ~/Photos
//!
//! # Byte-identical files only, walking subdirectories
//! dupe-detect -r --hash fast ~/Photos
//!
//! # Hash on 8 workers, JSON summary on stdout
//! dupe-detect -j 8 --output json ~/Photos
//! ```
//!
//! `-h` selects the hash mode, so help is only available as `--help`.

use clap::{ArgAction, Parser, ValueEnum};
use console::Term;
use dupe_detect::core::hasher::HashStrategy;
use dupe_detect::core::pipeline::{DetectionResult, Detector};
use dupe_detect::core::reporter::{export_csv, export_json, Reporter};
use dupe_detect::error::{ReportError, Result};
use dupe_detect::events::EventChannel;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;

/// Duplicate image detector - exact bytes, exact pixels, or perceptual hash
#[derive(Parser, Debug)]
#[command(name = "dupe-detect")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Files and/or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Hash mode: fast (bytes), exact (pixels) or phash (perceptual)
    #[arg(short = 'h', long = "hash", default_value = "phash")]
    hash: String,

    /// Hash in parallel on N workers (0 = one per core)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON summary for scripting
    Json,
    /// CSV of duplicate groups
    Csv,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    dupe_detect::init_tracing(cli.verbose);

    let detector = Detector::builder()
        .paths(cli.paths)
        .strategy(HashStrategy::from_mode(&cli.hash))
        .recursive(cli.recursive)
        .threads(cli.jobs)
        .build();

    // Live output shares stdout with the summary only in pretty mode
    let live_term = match cli.output {
        OutputFormat::Pretty => Term::stdout(),
        OutputFormat::Json | OutputFormat::Csv => Term::stderr(),
    };

    let (sender, receiver) = EventChannel::new();

    // Render events in a separate thread
    let event_thread = thread::spawn(move || -> std::result::Result<(), ReportError> {
        let mut reporter = Reporter::new(live_term);
        for event in receiver.iter() {
            reporter.handle(&event)?;
        }
        Ok(())
    });

    let result = detector.run_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    match event_thread.join() {
        Ok(rendered) => rendered?,
        Err(_) => tracing::warn!("event thread panicked"),
    }

    let result = result?;
    if result.had_no_files() {
        return Ok(());
    }

    print_results(&result, cli.output)?;
    Ok(())
}

fn print_results(
    result: &DetectionResult,
    output: OutputFormat,
) -> std::result::Result<(), ReportError> {
    match output {
        OutputFormat::Pretty => {
            Reporter::with_display(Term::stdout(), result.display).summary(&result.index)
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_json(result, &mut handle)?;
            handle.flush()?;
            Ok(())
        }
        OutputFormat::Csv => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_csv(result, &mut handle)?;
            handle.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_h_selects_hash_mode() {
        let cli = Cli::try_parse_from(["dupe-detect", "-h", "fast", "photos"]).unwrap();
        assert_eq!(cli.hash, "fast");
        assert_eq!(cli.paths, vec![PathBuf::from("photos")]);
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["dupe-detect", "a", "b"]).unwrap();
        assert_eq!(cli.hash, "phash");
        assert!(!cli.recursive);
        assert_eq!(cli.jobs, None);
        assert_eq!(cli.output, OutputFormat::Pretty);
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["dupe-detect"]).is_err());
    }

    #[test]
    fn long_help_is_still_available() {
        let err = Cli::try_parse_from(["dupe-detect", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
