// 🔎 Analyzer - Full pipeline: text → entries → categories → distribution

use crate::aggregate::{aggregate, grand_total, ClassifiedEntry, DistributionRecord};
use crate::error::Result;
use crate::parser::parse_log;
use crate::rules::RuleEngine;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Demo task log, one entry per line
pub const SAMPLE_LOG: &str = "[1 hour] Weekly team sync meeting
[30 mins] Code review
[45 mins] Customer support call
[2 hours] UI design workshop
[1.5 hrs] Marketing campaign planning
[30 mins] Infrastructure maintenance
[1 hour] Learning React hooks
[45 mins] Email follow-ups";

/// Outcome of one successful analysis run
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub records: Vec<DistributionRecord>,
    pub entries: Vec<ClassifiedEntry>,
    pub total_minutes: f64,
    /// Non-blank lines that had no valid duration tag
    pub skipped_lines: Vec<usize>,
}

impl Analysis {
    pub fn total_hours(&self) -> f64 {
        self.total_minutes / 60.0
    }

    /// Entries that landed in the fallback category
    pub fn unclassified(&self) -> impl Iterator<Item = &ClassifiedEntry> {
        self.entries.iter().filter(|e| e.category.is_fallback())
    }
}

/// Run the pipeline with the built-in rule tables
pub fn analyze(text: &str) -> Result<Analysis> {
    let engine = RuleEngine::global();

    let parsed = parse_log(text);
    debug!(
        entries = parsed.entries.len(),
        skipped = parsed.skipped.len(),
        "parsed task log"
    );

    let entries: Vec<ClassifiedEntry> = parsed
        .entries
        .into_iter()
        .map(|entry| {
            let category = engine.classify(&entry.description);
            ClassifiedEntry::new(entry, category)
        })
        .collect();

    let records = match aggregate(&entries) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = ?e, "analysis produced no distribution");
            return Err(e);
        }
    };

    let total_minutes = grand_total(&entries);
    info!(
        categories = records.len(),
        entries = entries.len(),
        total_minutes,
        "analysis complete"
    );

    Ok(Analysis {
        records,
        entries,
        total_minutes,
        skipped_lines: parsed.skipped,
    })
}

// ============================================================================
// TESTS
// ============================================================================
