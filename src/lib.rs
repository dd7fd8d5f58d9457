// Time Allocation Analyzer - Core Library
// Exposes the parsing/classification pipeline for the CLI, TUI, API server and tests

pub mod category;
pub mod parser;
pub mod rules;
pub mod aggregate;
pub mod analyzer;
pub mod error;
pub mod report;
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use category::{Category, PALETTE, color_for_index};
pub use parser::{
    TimeEntry, TimeUnit, ParsedLog,
    extract, parse_log,
    DURATION_TAG_PATTERN, SUPPORTED_FORMATS,
};
pub use rules::{
    ClassificationRule, ClassificationResult, FallbackTerm, MatchKind, RuleEngine,
    classify, explain,
};
pub use aggregate::{
    ClassifiedEntry, CategoryBucket, DistributionRecord,
    aggregate, group, grand_total, round1,
};
pub use analyzer::{Analysis, analyze, SAMPLE_LOG};
pub use error::AnalysisError;
pub use report::{Report, ReportRow, render_csv, render_explain, render_json, render_text};
pub use config::{ServerConfig, init_tracing};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
