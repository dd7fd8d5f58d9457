// ⏱️ Duration Parser - Extract "[1.5 hours]" tags from free-form task lines
//
// One line in, at most one TimeEntry out. Lines without a recognizable tag are
// not errors: they are skipped by the caller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Grammar for a duration tag, e.g. "[30 mins]", "[1.5h]", "[2 Hours]"
pub const DURATION_TAG_PATTERN: &str =
    r"(?i)\[([0-9]+(?:\.[0-9]+)?)\s*(hours?|hrs?|h|minutes?|mins?|m)\]";

/// Supported tag spellings, for help output
pub const SUPPORTED_FORMATS: [&str; 3] = [
    "Hours: [X hour], [X hours], [X hr], [X hrs], [X h]",
    "Minutes: [X minute], [X minutes], [X min], [X mins], [X m]",
    "Decimal hours work too: [1.5 hours], [0.5 h]",
];

fn duration_tag() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(DURATION_TAG_PATTERN).expect("duration tag pattern is valid"))
}

/// TimeUnit - Normalized unit of a duration tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Hour,
    Minute,
}

impl TimeUnit {
    /// Any unit spelling starting with 'h' is hours, everything else minutes
    pub fn from_tag(unit: &str) -> Self {
        if unit.to_lowercase().starts_with('h') {
            TimeUnit::Hour
        } else {
            TimeUnit::Minute
        }
    }

    pub fn minutes_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Hour => 60.0,
            TimeUnit::Minute => 1.0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
        }
    }
}

/// TimeEntry - One task line with its duration normalized to minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub minutes: f64,
    /// Line text with the tag removed, trimmed
    pub description: String,

    // Provenance
    pub source_value: f64,
    pub source_unit: TimeUnit,
    pub unit_text: String,   // Unit as written, lowercased ("hrs", "m", ...)
    pub line_number: usize,  // 1-based line in the analyzed text; 0 when unknown
}

impl TimeEntry {
    pub fn new(source_value: f64, source_unit: TimeUnit, description: String) -> Self {
        TimeEntry {
            minutes: source_value * source_unit.minutes_per_unit(),
            description,
            source_value,
            source_unit,
            unit_text: source_unit.name().to_string(),
            line_number: 0,
        }
    }

    /// Builder pattern: record unit spelling
    pub fn with_unit_text(mut self, unit_text: String) -> Self {
        self.unit_text = unit_text;
        self
    }

    /// Builder pattern: record line position
    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }

    pub fn hours(&self) -> f64 {
        self.minutes / 60.0
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Trim whitespace and byte-order marks from both ends
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Extract the first duration tag from a line
///
/// Returns `None` when the line has no tag or the number is not finite.
/// The description keeps everything around the tag, including punctuation.
///
/// ```
/// use time_allocation::parser::extract;
///
/// let entry = extract("[1.5 hours] Planning").unwrap();
/// assert_eq!(entry.minutes, 90.0);
/// assert_eq!(entry.description, "Planning");
/// ```
pub fn extract(line: &str) -> Option<TimeEntry> {
    let caps = duration_tag().captures(line)?;
    let tag = caps.get(0)?;

    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let unit_text = caps.get(2)?.as_str().to_lowercase();
    let unit = TimeUnit::from_tag(&unit_text);

    let mut description = String::with_capacity(line.len() - tag.len());
    description.push_str(&line[..tag.start()]);
    description.push_str(&line[tag.end()..]);

    Some(TimeEntry::new(value, unit, trim_text(&description).to_string()).with_unit_text(unit_text))
}

/// Result of parsing a whole log
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub entries: Vec<TimeEntry>,
    /// Line numbers of non-blank lines that carried no valid tag
    pub skipped: Vec<usize>,
}

/// Parse every non-blank line of a task log
pub fn parse_log(text: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();

    for (index, line) in text.split('\n').enumerate() {
        if trim_text(line).is_empty() {
            continue;
        }

        let line_number = index + 1;
        match extract(line) {
            Some(entry) => parsed.entries.push(entry.with_line_number(line_number)),
            None => {
                debug!(line_number, "no duration tag, skipping line");
                parsed.skipped.push(line_number);
            }
        }
    }

    parsed
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hours_prefix() {
        let entry = extract("[1.5 hours] Planning").unwrap();
        assert_eq!(entry.minutes, 90.0);
        assert_eq!(entry.description, "Planning");
        assert_eq!(entry.source_value, 1.5);
        assert_eq!(entry.source_unit, TimeUnit::Hour);
        assert_eq!(entry.unit_text, "hours");
    }

    #[test]
    fn test_extract_minutes() {
        let entry = extract("[30 mins] Code review").unwrap();
        assert_eq!(entry.minutes, 30.0);
        assert_eq!(entry.source_unit, TimeUnit::Minute);
        assert_eq!(entry.description, "Code review");
    }

    #[test]
    fn test_extract_all_unit_spellings() {
        for unit in ["hour", "hours", "hr", "hrs", "h", "HOURS", "Hr"] {
            let entry = extract(&format!("[2 {}] x", unit)).unwrap();
            assert_eq!(entry.minutes, 120.0, "unit {}", unit);
        }
        for unit in ["minute", "minutes", "min", "mins", "m", "MIN"] {
            let entry = extract(&format!("[2 {}] x", unit)).unwrap();
            assert_eq!(entry.minutes, 2.0, "unit {}", unit);
        }
    }

    #[test]
    fn test_extract_no_space_between_number_and_unit() {
        let entry = extract("Standup [15m]").unwrap();
        assert_eq!(entry.minutes, 15.0);
        assert_eq!(entry.description, "Standup");
    }

    #[test]
    fn test_extract_tag_in_middle_keeps_punctuation() {
        let entry = extract("Call with Bob ([45 min]) about billing").unwrap();
        assert_eq!(entry.minutes, 45.0);
        assert_eq!(entry.description, "Call with Bob () about billing");
    }

    #[test]
    fn test_extract_first_tag_wins() {
        let entry = extract("[1 h] Sync [30 m]").unwrap();
        assert_eq!(entry.minutes, 60.0);
        assert_eq!(entry.description, "Sync [30 m]");
    }

    #[test]
    fn test_extract_zero_is_accepted() {
        let entry = extract("[0 mins] Idle time").unwrap();
        assert_eq!(entry.minutes, 0.0);
        assert_eq!(entry.description, "Idle time");
    }

    #[test]
    fn test_extract_rejects_untagged_lines() {
        assert!(extract("Planning session").is_none());
        assert!(extract("(30 mins) Planning").is_none());
        assert!(extract("[30 seconds] Planning").is_none());
        assert!(extract("[.5 h] Planning").is_none());
        assert!(extract("[1. h] Planning").is_none());
        assert!(extract("[-1 h] Planning").is_none());
    }

    #[test]
    fn test_extract_rejects_non_finite_number() {
        let huge = "9".repeat(400);
        assert!(extract(&format!("[{} h] Forever", huge)).is_none());
    }

    #[test]
    fn test_extract_finite_tag_can_overflow_minutes() {
        let entry = extract(&format!("[1{} hours] Forever", "0".repeat(307))).unwrap();
        assert_eq!(entry.source_value, 1e307);
        assert!(entry.minutes.is_infinite());
    }

    #[test]
    fn test_extract_strips_byte_order_mark() {
        let entry = extract("\u{FEFF}Planning [1 h]").unwrap();
        assert_eq!(entry.description, "Planning");
    }

    #[test]
    fn test_parse_log_bom_only_line_is_blank() {
        let parsed = parse_log("\u{FEFF}\n[15 m] Standup\n\u{FEFF}  \r");
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].line_number, 2);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_parse_log_skips_blank_and_untagged_lines() {
        let text = "[1 hour] Weekly team sync meeting\n\n   \nno tag here\n[30 mins] Code review\r\n";
        let parsed = parse_log(text);

        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.entries[0].line_number, 1);
        assert_eq!(parsed.entries[1].line_number, 5);
        assert_eq!(parsed.entries[1].description, "Code review");
        assert_eq!(parsed.skipped, vec![4]);
    }

    #[test]
    fn test_parse_log_empty_text() {
        let parsed = parse_log("");
        assert!(parsed.entries.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_time_entry_builder() {
        let entry = TimeEntry::new(2.0, TimeUnit::Hour, "Workshop".to_string())
            .with_unit_text("hrs".to_string())
            .with_line_number(7);

        assert_eq!(entry.minutes, 120.0);
        assert_eq!(entry.hours(), 2.0);
        assert_eq!(entry.unit_text, "hrs");
        assert_eq!(entry.line_number, 7);
    }
}
