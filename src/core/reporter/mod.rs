//! # Reporter Module
//!
//! Renders progress, incremental duplicate notices and the final summary.
//! The reporter only reads the group index; it never changes it.
//!
//! Line formats:
//! - progress: `07/12  58%    name.png`
//! - summary: `3 unique images`, then `Duplicates:` and one
//!   `0000: a.png, b.png` line per duplicate group

mod export;

pub use export::{export_csv, export_json};

use crate::core::comparator::GroupIndex;
use crate::core::scanner::PathDisplay;
use crate::error::ReportError;
use crate::events::{Event, GroupEvent, HashEvent, HashProgress, PipelineEvent, ScanEvent};
use console::{style, Term};
use std::path::Path;

pub const NO_FILES: &str = "no files to process";
pub const NO_DUPLICATES: &str = "No duplicates found";
pub const DUPLICATES_HEADER: &str = "Duplicates:";

/// `N files to process`
pub fn candidates_line(total: usize) -> String {
    format!("{} files to process", total)
}

/// Position and total share the width of the total, zero-padded; the
/// percentage is floored.
pub fn progress_line(progress: &HashProgress, display: &PathDisplay) -> String {
    let width = progress.total.to_string().len();
    format!(
        "{:0width$}/{:0width$} {:>3}%    {}",
        progress.position,
        progress.total,
        progress.percent(),
        display.render(&progress.current_path),
        width = width
    )
}

pub fn duplicate_found_line(path: &Path, display: &PathDisplay) -> String {
    format!("Duplicate found: {}", display.render(path))
}

pub fn unique_line(index: &GroupIndex) -> String {
    format!("{} unique images", index.len())
}

/// One line per duplicate group, numbered from zero
pub fn duplicate_group_lines(index: &GroupIndex, display: &PathDisplay) -> Vec<String> {
    index
        .duplicate_groups()
        .enumerate()
        .map(|(i, group)| {
            let names: Vec<String> = group.files.iter().map(|f| display.render(f)).collect();
            format!("{:04}: {}", i, names.join(", "))
        })
        .collect()
}

/// Terminal reporter driven by pipeline events
pub struct Reporter {
    term: Term,
    display: PathDisplay,
}

impl Reporter {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            display: PathDisplay::default(),
        }
    }

    /// Reporter with a known rendering mode, for printing a summary only
    pub fn with_display(term: Term, display: PathDisplay) -> Self {
        Self { term, display }
    }

    pub fn display(&self) -> PathDisplay {
        self.display
    }

    /// Render one live event
    pub fn handle(&mut self, event: &Event) -> Result<(), ReportError> {
        match event {
            Event::Scan(ScanEvent::Rejected { message, .. }) => {
                self.term
                    .write_line(&style(message).yellow().to_string())?;
            }
            Event::Scan(ScanEvent::Completed { full_path, .. }) => {
                self.display = if *full_path {
                    PathDisplay::full()
                } else {
                    PathDisplay::name_only()
                };
            }
            Event::Hash(HashEvent::Started { total_files }) => {
                self.term.write_line(&candidates_line(*total_files))?;
            }
            Event::Hash(HashEvent::Progress(progress)) => {
                self.term
                    .write_line(&progress_line(progress, &self.display))?;
            }
            Event::Hash(HashEvent::Error { message, .. }) => {
                self.term
                    .write_line(&style(format!("Skipping: {}", message)).yellow().to_string())?;
            }
            Event::Group(GroupEvent::DuplicateFound { path, .. }) => {
                self.term
                    .write_line(&duplicate_found_line(path, &self.display))?;
            }
            Event::Pipeline(PipelineEvent::NoFiles) => {
                self.term.write_line(NO_FILES)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Print the final summary
    pub fn summary(&self, index: &GroupIndex) -> Result<(), ReportError> {
        self.term.write_line(&unique_line(index))?;

        let lines = duplicate_group_lines(index, &self.display);
        if lines.is_empty() {
            self.term
                .write_line(&style(NO_DUPLICATES).green().to_string())?;
            return Ok(());
        }

        self.term
            .write_line(&style(DUPLICATES_HEADER).red().to_string())?;
        for line in lines {
            self.term.write_line(&style(line).red().to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hasher::Fingerprint;
    use std::path::PathBuf;

    fn progress(position: usize, total: usize, path: &str) -> HashProgress {
        HashProgress {
            position,
            total,
            current_path: PathBuf::from(path),
        }
    }

    #[test]
    fn progress_pads_to_total_width() {
        let line = progress_line(&progress(7, 12, "/photos/a.png"), &PathDisplay::name_only());
        assert_eq!(line, "07/12  58%    a.png");
    }

    #[test]
    fn progress_renders_full_path_when_asked() {
        let line = progress_line(&progress(1, 1, "/photos/a.png"), &PathDisplay::full());
        assert_eq!(line, "1/1 100%    /photos/a.png");
    }

    #[test]
    fn progress_floors_percentage() {
        let line = progress_line(&progress(2, 3, "b.png"), &PathDisplay::name_only());
        assert_eq!(line, "2/3  66%    b.png");
    }

    #[test]
    fn duplicate_lines_are_numbered_from_zero() {
        let mut index = GroupIndex::new();
        index.record(Fingerprint::new(1), PathBuf::from("/p/a.png"));
        index.record(Fingerprint::new(2), PathBuf::from("/p/c.png"));
        index.record(Fingerprint::new(1), PathBuf::from("/p/b.png"));
        index.record(Fingerprint::new(2), PathBuf::from("/p/d.png"));

        let lines = duplicate_group_lines(&index, &PathDisplay::name_only());
        assert_eq!(lines, vec!["0000: a.png, b.png", "0001: c.png, d.png"]);
        assert_eq!(unique_line(&index), "2 unique images");
    }

    #[test]
    fn no_duplicates_yields_no_lines() {
        let mut index = GroupIndex::new();
        index.record(Fingerprint::new(1), PathBuf::from("a.png"));

        assert!(duplicate_group_lines(&index, &PathDisplay::name_only()).is_empty());
    }

    #[test]
    fn summary_does_not_touch_the_index() {
        let mut index = GroupIndex::new();
        index.record(Fingerprint::new(1), PathBuf::from("a.png"));
        index.record(Fingerprint::new(1), PathBuf::from("b.png"));

        let reporter = Reporter::new(Term::buffered_stdout());
        reporter.summary(&index).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.total_files(), 2);
    }

    #[test]
    fn scan_completion_sets_display_mode() {
        let mut reporter = Reporter::new(Term::buffered_stdout());
        reporter
            .handle(&Event::Scan(ScanEvent::Completed {
                total_candidates: 2,
                full_path: true,
            }))
            .unwrap();

        assert!(reporter.display().is_full_path());
    }
}
