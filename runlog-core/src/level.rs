use std::fmt;

/// Severity tag carried by every log entry.
///
/// The set is fixed and closed. The `as_str` spellings are the on-disk tag
/// spellings, so changing them changes the file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Action,
    Warn,
    Error,
    Critical,
}

impl Level {
    /// All levels, in summary order.
    pub const ALL: [Level; 4] = [Level::Action, Level::Warn, Level::Error, Level::Critical];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Action => "ACTION",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Classifies a raw tag. Unknown tags yield `None`; callers skip those
    /// lines rather than fail, so hand-edited or partially corrupt logs stay
    /// summarizable.
    pub fn from_tag(tag: &str) -> Option<Level> {
        match tag {
            "ACTION" => Some(Level::Action),
            "WARN" => Some(Level::Warn),
            "ERROR" => Some(Level::Error),
            "CRITICAL" => Some(Level::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
