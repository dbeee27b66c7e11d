use super::parse::parse_tag;
use crate::level::Level;

/// Which levels contribute to the tally.
///
/// Defaults mirror the common reporting case: actions are routine noise
/// and excluded; warnings, errors and criticals are tracked.
#[derive(Debug, Clone, Copy)]
pub struct Tracking {
    pub actions: bool,
    pub warnings: bool,
    pub errors: bool,
    pub criticals: bool,
}

impl Default for Tracking {
    fn default() -> Self {
        Self {
            actions: false,
            warnings: true,
            errors: true,
            criticals: true,
        }
    }
}

impl Tracking {
    /// Tracks everything, including actions.
    pub fn all() -> Self {
        Self {
            actions: true,
            warnings: true,
            errors: true,
            criticals: true,
        }
    }

    fn tracks(&self, level: Level) -> bool {
        match level {
            Level::Action => self.actions,
            Level::Warn => self.warnings,
            Level::Error => self.errors,
            Level::Critical => self.criticals,
        }
    }
}

/// Per-level entry counts, kept in fixed ACTION, WARN, ERROR, CRITICAL
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    counts: [u64; Level::ALL.len()],
}

impl Metrics {
    /// Counts entry lines whose level is tracked. Non-entry lines and
    /// unknown tags never affect any counter.
    pub(crate) fn tally<'a>(lines: impl Iterator<Item = &'a str>, tracking: Tracking) -> Self {
        let mut counts = [0u64; Level::ALL.len()];

        for line in lines {
            let Some(level) = parse_tag(line) else {
                continue;
            };

            if tracking.tracks(level) {
                counts[level as usize] += 1;
            }
        }

        Self { counts }
    }

    pub fn count(&self, level: Level) -> u64 {
        self.counts[level as usize]
    }

    /// Levels with at least one counted entry, in summary order.
    pub fn non_zero(&self) -> impl Iterator<Item = (Level, u64)> + '_ {
        Level::ALL
            .into_iter()
            .map(|level| (level, self.count(level)))
            .filter(|(_, n)| *n > 0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
