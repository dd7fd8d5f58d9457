// 🧾 Report Output - Text, JSON and CSV renderings of an Analysis

use crate::aggregate::DistributionRecord;
use crate::analyzer::Analysis;
use crate::category::{color_for_index, Category};
use crate::rules::explain;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// JSON REPORT
// ============================================================================

/// Distribution record with its chart color
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub name: Category,
    pub value: f64,
    pub hours: f64,
    pub minutes: f64,
    pub entries: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub total_minutes: f64,
    pub total_hours: f64,
    pub entry_count: usize,
    pub skipped_lines: Vec<usize>,
    pub distribution: Vec<ReportRow>,
}

impl Report {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let distribution = analysis
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| ReportRow {
                name: record.category,
                value: record.percentage,
                hours: record.hours,
                minutes: record.minutes,
                entries: record.entry_count,
                color: color_for_index(index),
            })
            .collect();

        Report {
            generated_at: Utc::now(),
            total_minutes: analysis.total_minutes,
            total_hours: analysis.total_hours(),
            entry_count: analysis.entries.len(),
            skipped_lines: analysis.skipped_lines.clone(),
            distribution,
        }
    }
}

pub fn render_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(&Report::from_analysis(analysis))
        .context("Failed to serialize report")
}

// ============================================================================
// CSV
// ============================================================================

pub fn render_csv(records: &[DistributionRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "percentage", "hours", "minutes", "entries"])?;

    for record in records {
        writer.write_record([
            record.category.name().to_string(),
            format!("{:.1}", record.percentage),
            format!("{:.1}", record.hours),
            record.minutes.to_string(),
            record.entry_count.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

// ============================================================================
// TEXT
// ============================================================================

/// Summary table: one line per category, hours and share
pub fn render_text(analysis: &Analysis) -> String {
    let width = analysis
        .records
        .iter()
        .map(|r| r.category.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str("Time Distribution\n");
    out.push_str(&"─".repeat(width + 24));
    out.push('\n');

    for record in &analysis.records {
        out.push_str(&format!(
            "{:<width$}  {:>6.1} hours  {:>5.1}%\n",
            record.category.name(),
            record.hours,
            record.percentage,
            width = width
        ));
    }

    out.push_str(&"─".repeat(width + 24));
    out.push('\n');
    out.push_str(&format!(
        "{} entries, {:.1} hours total\n",
        analysis.entries.len(),
        analysis.total_hours()
    ));

    if !analysis.skipped_lines.is_empty() {
        out.push_str(&format!(
            "{} line(s) without a duration tag skipped\n",
            analysis.skipped_lines.len()
        ));
    }

    out
}

/// Per-entry breakdown: which keyword put each line in its category
pub fn render_explain(analysis: &Analysis) -> String {
    let mut out = String::new();

    for classified in &analysis.entries {
        let result = explain(&classified.entry.description);
        let reason = match result.keyword {
            Some(keyword) => format!("{:?} \"{}\"", result.kind, keyword),
            None => format!("{:?}", result.kind),
        };

        out.push_str(&format!(
            "line {:>3}  {:>6} min  {:<28}  {}  ({})\n",
            classified.entry.line_number,
            classified.entry.minutes,
            classified.category.name(),
            classified.entry.description,
            reason
        ));
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
