//! Shared on-disk format for run logs.
//!
//! The recorder writes this format and the analyzer re-parses it; the file
//! is the only coupling between the two. Every constant of that contract
//! lives here.

/// Width of the rule lines framing entry blocks and summary sections.
pub const RULE_WIDTH: usize = 125;

/// Timestamp layout inside the entry tag, local time with microseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// File name the analyzer writes summaries to when given a directory.
pub const SUMMARY_FILE_NAME: &str = "outfile.log";

/// Heavy rule framing the log body and the summary report.
pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Light rule separating summary sections.
pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Header line written when a log file is created.
pub fn header(project: &str) -> String {
    format!("{project} - Begin Log:")
}
