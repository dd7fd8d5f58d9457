use thiserror::Error;

/// Reasons an analysis run produced no distribution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No line carried a valid tag, or every duration was zero
    #[error("No valid time entries found. Make sure each task includes time in [X mins] or [X hours] format.")]
    NoValidEntries,

    /// Numeric failure (e.g. non-finite totals); detail is for logs only
    #[error("Error processing time data. Please check the format.")]
    Processing(String),
}

impl AnalysisError {
    /// Short machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::NoValidEntries => "no_valid_entries",
            AnalysisError::Processing(_) => "processing_error",
        }
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
