use super::metrics::Metrics;
use crate::format;
use crate::level::Level;

/// Renders the fixed-format summary report.
///
/// Zero-count levels are dropped. Count lines keep ACTION, WARN, ERROR,
/// CRITICAL order. Narrative sentences exist for WARN, ERROR and CRITICAL
/// only, each followed by a light rule; actions never get one.
pub fn render_summary(metrics: &Metrics) -> String {
    let mut out = String::new();

    out.push_str("Log Metrics Summary:\n");
    out.push_str(&format::heavy_rule());
    out.push('\n');

    for (level, count) in metrics.non_zero() {
        out.push_str(&format!("{level} -> {count}\n"));
    }

    out.push_str(&format::light_rule());
    out.push('\n');

    for (level, count) in metrics.non_zero() {
        let Some(sentence) = narrative(level, count) else {
            continue;
        };

        out.push_str(&sentence);
        out.push('\n');
        out.push_str(&format::light_rule());
        out.push('\n');
    }

    out.push_str(&format::heavy_rule());
    out.push('\n');

    out
}

// The critical sentence carries no trailing period; the wording is part of
// the report format.
fn narrative(level: Level, count: u64) -> Option<String> {
    match level {
        Level::Action => None,
        Level::Warn => Some(format!("Software completed with {count} warnings.")),
        Level::Error => Some(format!("Software had {count} errors.")),
        Level::Critical => Some(format!("Software suffered from {count} critical failures")),
    }
}
