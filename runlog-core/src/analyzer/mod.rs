//! Analyzer: recovers structured metrics from a previously written run log.
//!
//! The overall data processing pipeline is:
//!
//! log file
//! read_log
//! raw lines
//! calculate_metrics
//! Metrics
//! render_summary
//! stdout | `<dir>`/outfile.log
//!
//! Loading keeps every raw line, banner content included; classification
//! happens during metric calculation and is deliberately fail-soft: lines
//! that do not look like entries and entries with unknown tags are skipped
//! silently, so a summary can still be produced from a partially corrupt or
//! hand-edited log file.

mod error;
mod metrics;
mod parse;
mod render;


pub use error::AnalyzerError;
pub use metrics::{Metrics, Tracking};
pub use render::render_summary;

use std::fs;
use std::path::Path;

use crate::format;
use crate::precheck::ensure_dir;

/// Progresses `read_log` → `calculate_metrics` → `summary`; each stage
/// requires the previous one and fails with a typed error otherwise.
#[derive(Default)]
pub struct Analyzer {
    lines: Option<Vec<String>>,
    metrics: Option<Metrics>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the raw log. Fails with a precondition error when `directory`
    /// is missing, before any read. Every line is kept in order, headers
    /// and rules included; nothing is parsed or filtered at this stage.
    pub fn read_log(
        &mut self,
        directory: impl AsRef<Path>,
        file_name: &str,
    ) -> Result<(), AnalyzerError> {
        let directory = directory.as_ref();
        ensure_dir(directory)?;

        let path = directory.join(file_name);
        let raw = fs::read_to_string(&path).map_err(|e| AnalyzerError::read(&path, e))?;

        self.lines = Some(raw.lines().map(str::to_owned).collect());
        self.metrics = None;
        Ok(())
    }

    /// Tallies entry lines by level under the given tracking flags.
    /// Requires a loaded log.
    pub fn calculate_metrics(&mut self, tracking: Tracking) -> Result<&Metrics, AnalyzerError> {
        let lines = self.lines.as_ref().ok_or(AnalyzerError::NotLoaded)?;

        let metrics = Metrics::tally(lines.iter().map(String::as_str), tracking);
        Ok(self.metrics.insert(metrics))
    }

    /// Metrics from the last `calculate_metrics` call, if any.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Renders the summary report. Requires calculated metrics.
    pub fn summary(&self) -> Result<String, AnalyzerError> {
        let metrics = self.metrics.as_ref().ok_or(AnalyzerError::NotCalculated)?;
        Ok(render_summary(metrics))
    }

    /// Emits the summary: overwrites `<dir>/outfile.log` when `write_to`
    /// names an existing directory, prints to stdout line by line otherwise.
    pub fn print_summary(&self, write_to: Option<&Path>) -> Result<(), AnalyzerError> {
        let report = self.summary()?;

        match write_to {
            Some(dir) if dir.is_dir() => {
                let path = dir.join(format::SUMMARY_FILE_NAME);
                fs::write(&path, &report).map_err(|e| AnalyzerError::write_summary(&path, e))
            }
            _ => {
                for line in report.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}
