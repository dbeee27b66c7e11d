use chrono::{DateTime, Local};

use crate::format::TIMESTAMP_FORMAT;
use crate::level::Level;

/// One leveled, timestamped entry held in the recorder buffer.
///
/// The timestamp is captured when the entry is recorded, not when it is
/// flushed, so buffer order stays chronological order.
#[derive(Debug, Clone)]
pub struct LogEntry {
    level: Level,
    timestamp: DateTime<Local>,
    message: String,
    values: Option<ValueMismatch>,
}

/// Expected/actual pair attached to error entries.
#[derive(Debug, Clone)]
struct ValueMismatch {
    expected: String,
    actual: String,
}

impl LogEntry {
    pub(crate) fn new(level: Level, message: String) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message,
            values: None,
        }
    }

    pub(crate) fn with_values(message: String, expected: String, actual: String) -> Self {
        Self {
            level: Level::Error,
            timestamp: Local::now(),
            message,
            values: Some(ValueMismatch { expected, actual }),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serialized line form: `[<LEVEL>:<timestamp>] <message>`, with the
    /// expected/actual fragment appended directly after the message for
    /// error entries carrying both values. No separator before the
    /// fragment; that is the format the analyzer was built against.
    pub fn render(&self) -> String {
        let mut line = format!(
            "[{}:{}] {}",
            self.level,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        );

        if let Some(ValueMismatch { expected, actual }) = &self.values {
            line.push_str(&format!("Expected: {expected} - Actual: {actual}"));
        }

        line
    }
}
