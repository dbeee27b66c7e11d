//! Recorder: builds a well-formed run log for one program run.
//!
//! Entries accumulate in memory in insertion order and reach disk only
//! through an explicit [`Recorder::flush`]. The file sees distinct writes:
//! header plus rule from [`Recorder::create`] (truncating), then one entry
//! block plus trailing rule per flush (appending). Create and flush may be
//! separated by arbitrary time and are not atomic with each other.

mod entry;
mod error;

#[cfg(test)]
mod tests;

pub use entry::LogEntry;
pub use error::RecorderError;

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::format;
use crate::level::Level;
use crate::precheck::{PreconditionError, ensure_dir};

#[derive(Debug)]
pub struct Recorder {
    path: PathBuf,
    project: String,
    entries: Vec<LogEntry>,
}

impl Recorder {
    /// Fails when `directory` is missing or not a directory. Does not touch
    /// the filesystem target yet; that happens in [`Recorder::create`].
    pub fn new(
        directory: impl AsRef<Path>,
        file_name: &str,
        project: impl Into<String>,
    ) -> Result<Self, PreconditionError> {
        let directory = directory.as_ref();
        ensure_dir(directory)?;

        Ok(Self {
            path: directory.join(file_name),
            project: project.into(),
            entries: Vec::new(),
        })
    }

    /// Target path the entries are flushed to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncating create of the log file: header line plus heavy rule.
    ///
    /// Callers are expected to abort startup when this fails; nothing else
    /// touches the file until [`Recorder::flush`].
    pub fn create(&self) -> Result<(), RecorderError> {
        let mut file =
            File::create(&self.path).map_err(|e| RecorderError::create(&self.path, e))?;

        write_header(&mut file, &self.project).map_err(|e| RecorderError::create(&self.path, e))
    }

    /// Records an action taken by the program.
    pub fn action(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry::new(Level::Action, message.into()));
    }

    /// Records potentially abnormal but non-fatal behavior.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry::new(Level::Warn, message.into()));
    }

    /// Records an error. The expected/actual pair is carried into the entry
    /// only when both strings are non-empty.
    pub fn error(&mut self, message: impl Into<String>, expected: &str, actual: &str) {
        let entry = if expected.is_empty() || actual.is_empty() {
            LogEntry::new(Level::Error, message.into())
        } else {
            LogEntry::with_values(message.into(), expected.to_owned(), actual.to_owned())
        };

        self.entries.push(entry);
    }

    /// Records an unrecoverable failure. Reserved by convention for crash
    /// and signal paths; storage behavior is identical to the other levels.
    pub fn critical(&mut self, message: impl Into<String>) {
        self.entries
            .push(LogEntry::new(Level::Critical, message.into()));
    }

    /// Entries recorded but not yet flushed, in insertion order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries recorded but not yet flushed.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Appends every buffered entry in insertion order, then a trailing
    /// heavy rule.
    ///
    /// The buffer is drained on success, so repeated flushes do not
    /// duplicate entries; a later flush with nothing buffered writes only
    /// its trailing rule. On failure the buffer is kept intact for a retry.
    pub fn flush(&mut self) -> Result<(), RecorderError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| RecorderError::append(&self.path, e))?;

        write_entries(&mut file, &self.entries).map_err(|e| RecorderError::append(&self.path, e))?;

        self.entries.clear();
        Ok(())
    }
}

fn write_header(file: &mut File, project: &str) -> std::io::Result<()> {
    writeln!(file, "{}", format::header(project))?;
    writeln!(file, "{}", format::heavy_rule())
}

fn write_entries(file: &mut File, entries: &[LogEntry]) -> std::io::Result<()> {
    for entry in entries {
        writeln!(file, "{}", entry.render())?;
    }
    writeln!(file, "{}", format::heavy_rule())
}
