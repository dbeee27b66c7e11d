use crate::level::Level;

/// Classifies one raw log line.
///
/// Entry lines start with `[` and carry a `:` between the tag and the
/// timestamp; everything else (header, rule lines) is banner content and
/// yields `None`. Unknown tags also yield `None` — skipping unrecognized
/// content is the policy here, not an accident, and aggregation must never
/// abort because of it.
pub fn parse_tag(line: &str) -> Option<Level> {
    let rest = line.strip_prefix('[')?;
    let (tag, _) = rest.split_once(':')?;
    Level::from_tag(tag)
}
