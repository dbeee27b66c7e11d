use crate::format;
use crate::precheck::PreconditionError;
use crate::recorder::{Recorder, RecorderError};

use std::fs;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn read_lines(recorder: &Recorder) -> Vec<String> {
    fs::read_to_string(recorder.path())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn new_rejects_missing_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent");

    // Act
    let err = Recorder::new(&missing, "runtime.log", "P").unwrap_err();

    // Assert
    assert!(matches!(err, PreconditionError::MissingPath { .. }));
}

#[test]
fn new_rejects_file_as_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    // Act
    let err = Recorder::new(&file, "runtime.log", "P").unwrap_err();

    // Assert
    assert!(matches!(err, PreconditionError::NotADirectory { .. }));
}

#[test]
fn create_writes_header_and_rule() {
    // Arrange
    let dir = tempdir().unwrap();
    let recorder = Recorder::new(dir.path(), "runtime.log", "Example Project").unwrap();

    // Act
    recorder.create().unwrap();

    // Assert
    let lines = read_lines(&recorder);
    assert_eq!(lines, vec![
        "Example Project - Begin Log:".to_owned(),
        "=".repeat(format::RULE_WIDTH),
    ]);
}

#[test]
fn create_truncates_previous_content() {
    // Arrange
    let dir = tempdir().unwrap();
    let recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    fs::write(recorder.path(), "stale content\n").unwrap();

    // Act
    recorder.create().unwrap();

    // Assert
    let lines = read_lines(&recorder);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "P - Begin Log:");
}

#[test]
fn record_methods_buffer_without_touching_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();

    // Act
    recorder.action("queued");
    recorder.warning("still queued");

    // Assert
    assert_eq!(recorder.pending(), 2);
    assert_eq!(recorder.entries()[0].level(), crate::level::Level::Action);
    assert_eq!(recorder.entries()[0].message(), "queued");
    assert_eq!(recorder.entries()[1].level(), crate::level::Level::Warn);
    assert!(!recorder.path().exists());
}

#[test]
fn flush_appends_entries_in_order_with_trailing_rule() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    recorder.create().unwrap();

    recorder.action("first");
    recorder.warning("second");
    recorder.critical("third");

    // Act
    recorder.flush().unwrap();

    // Assert
    let lines = read_lines(&recorder);
    assert_eq!(lines.len(), 6); // header, rule, 3 entries, trailing rule
    assert!(lines[2].starts_with("[ACTION:"));
    assert!(lines[2].ends_with("] first"));
    assert!(lines[3].starts_with("[WARN:"));
    assert!(lines[3].ends_with("] second"));
    assert!(lines[4].starts_with("[CRITICAL:"));
    assert!(lines[4].ends_with("] third"));
    assert_eq!(lines[5], "=".repeat(format::RULE_WIDTH));
}

#[test]
fn flush_drains_buffer() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    recorder.create().unwrap();
    recorder.action("once");

    // Act
    recorder.flush().unwrap();
    recorder.flush().unwrap();

    // Assert: the entry appears exactly once; the second flush added only
    // its trailing rule.
    let lines = read_lines(&recorder);
    let entry_lines = lines.iter().filter(|l| l.starts_with("[ACTION:")).count();
    assert_eq!(entry_lines, 1);
    assert_eq!(lines.len(), 5);
    assert_eq!(recorder.pending(), 0);
}

#[test]
fn flush_keeps_buffer_on_failure() {
    // Arrange: the target's parent directory disappears after construction.
    let dir = tempdir().unwrap();
    let sub = dir.path().join("logs");
    fs::create_dir(&sub).unwrap();
    let mut recorder = Recorder::new(&sub, "runtime.log", "P").unwrap();
    recorder.action("kept");
    fs::remove_dir_all(&sub).unwrap();

    // Act
    let err = recorder.flush().unwrap_err();

    // Assert
    assert!(matches!(err, RecorderError::Append { .. }));
    assert_eq!(recorder.pending(), 1);
}

#[test]
fn multiple_flushes_append_separate_blocks() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    recorder.create().unwrap();

    // Act
    recorder.action("block one");
    recorder.flush().unwrap();
    recorder.action("block two");
    recorder.flush().unwrap();

    // Assert: each block carries its own trailing rule.
    let lines = read_lines(&recorder);
    let rules = lines
        .iter()
        .filter(|l| **l == "=".repeat(format::RULE_WIDTH))
        .count();
    assert_eq!(rules, 3); // header rule + one per flush
}

#[test]
fn error_with_both_values_appends_fragment() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    recorder.create().unwrap();
    recorder.error("bad input", "int", "str");

    // Act
    recorder.flush().unwrap();

    // Assert
    let lines = read_lines(&recorder);
    assert!(lines[2].starts_with("[ERROR:"));
    assert!(lines[2].ends_with("bad inputExpected: int - Actual: str"));
}

#[test]
fn error_with_missing_value_omits_fragment() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    recorder.create().unwrap();
    recorder.error("bad input", "int", "");
    recorder.error("bad input", "", "str");

    // Act
    recorder.flush().unwrap();

    // Assert
    let lines = read_lines(&recorder);
    assert!(lines[2].ends_with("] bad input"));
    assert!(lines[3].ends_with("] bad input"));
}

#[test]
fn flush_without_create_still_writes_entries() {
    // Arrange: flushing into a fresh file is allowed; the header is the
    // create step's concern, not flush's.
    let dir = tempdir().unwrap();
    let mut recorder = Recorder::new(dir.path(), "runtime.log", "P").unwrap();
    recorder.warning("headerless");

    // Act
    recorder.flush().unwrap();

    // Assert
    let lines = read_lines(&recorder);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[WARN:"));
    assert_eq!(lines[1], "=".repeat(format::RULE_WIDTH));
}
