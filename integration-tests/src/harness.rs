//! Shared helpers for the end-to-end tests.

use std::path::Path;

use runlog_core::recorder::Recorder;

/// Writes the reference scenario log: one ACTION, one WARN, one ERROR with
/// an expected/actual pair, created and flushed under project name "P".
pub fn write_reference_log(dir: &Path, file_name: &str) {
    let mut recorder = Recorder::new(dir, file_name, "P").expect("log directory must exist");

    recorder.create().expect("create log file");

    recorder.action("start");
    recorder.warning("disk low");
    recorder.error("bad input", "int", "str");

    recorder.flush().expect("flush log");
}
