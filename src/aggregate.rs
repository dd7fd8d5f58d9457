// 📊 Aggregation - Group classified entries into a time distribution
//
// Buckets keep first-appearance order, so the distribution lists categories
// in the order they first show up in the log.

use crate::category::Category;
use crate::error::{AnalysisError, Result};
use crate::parser::TimeEntry;
use serde::{Deserialize, Serialize};

// ============================================================================
// TYPES
// ============================================================================

/// A parsed entry with its inferred category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    #[serde(flatten)]
    pub entry: TimeEntry,
    pub category: Category,
}

impl ClassifiedEntry {
    pub fn new(entry: TimeEntry, category: Category) -> Self {
        ClassifiedEntry { entry, category }
    }

    pub fn minutes(&self) -> f64 {
        self.entry.minutes
    }
}

/// All entries of one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub total_minutes: f64,
    pub entries: Vec<ClassifiedEntry>,
}

/// One category's share of the grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub category: Category,
    /// Share of grand total, rounded to 1 decimal
    pub percentage: f64,
    /// Bucket total in hours, rounded to 1 decimal
    pub hours: f64,

    // Unrounded detail for exports
    pub minutes: f64,
    pub entry_count: usize,
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Round the exact stored value to one decimal place
///
/// 0.15 is stored just below 0.15 and rounds down to 0.1. Exact ties (odd
/// multiples of 0.25) round away from zero: 0.25 → 0.3, 6.25 → 6.3.
pub fn round1(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }

    // Fixed-precision formatting rounds the exact binary value
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Group entries by category, preserving first-appearance order
pub fn group(entries: &[ClassifiedEntry]) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = Vec::new();

    for entry in entries {
        match buckets.iter_mut().find(|b| b.category == entry.category) {
            Some(bucket) => {
                bucket.total_minutes += entry.minutes();
                bucket.entries.push(entry.clone());
            }
            None => buckets.push(CategoryBucket {
                category: entry.category,
                total_minutes: entry.minutes(),
                entries: vec![entry.clone()],
            }),
        }
    }

    buckets
}

/// Sum of minutes over every entry
pub fn grand_total(entries: &[ClassifiedEntry]) -> f64 {
    entries.iter().map(|e| e.minutes()).sum()
}

/// Build the distribution for a set of classified entries
///
/// Percentages are rounded independently, so their sum may drift from 100
/// by up to 0.05 per category.
pub fn aggregate(entries: &[ClassifiedEntry]) -> Result<Vec<DistributionRecord>> {
    let total = grand_total(entries);

    if !total.is_finite() {
        return Err(AnalysisError::Processing(format!(
            "grand total is not finite: {}",
            total
        )));
    }

    // Empty input and all-zero durations look the same to the caller
    if total <= 0.0 {
        return Err(AnalysisError::NoValidEntries);
    }

    let records = group(entries)
        .into_iter()
        .map(|bucket| DistributionRecord {
            category: bucket.category,
            percentage: round1(bucket.total_minutes / total * 100.0),
            hours: round1(bucket.total_minutes / 60.0),
            minutes: bucket.total_minutes,
            entry_count: bucket.entries.len(),
        })
        .collect();

    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
