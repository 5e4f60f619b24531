//! Custom error types for the vitals cleaning pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. The pipeline
//! aborts on the first error; there is no partial output or recovery.

use thiserror::Error;

/// The main error type for the cleaning pipeline.
#[derive(Error, Debug)]
pub enum CleaningError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A statistic was requested over a column with no non-missing values.
    #[error("Cannot compute mean of column '{0}': no non-missing values")]
    EmptyColumn(String),

    /// Standardization requires a nonzero standard deviation.
    #[error("Cannot standardize column '{0}': standard deviation is zero")]
    ZeroVariance(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CleaningError>,
    },
}

impl CleaningError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CleaningError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this error is a computation error (empty column or zero
    /// variance), i.e. a statistic was undefined for the given data.
    pub fn is_computation_error(&self) -> bool {
        match self {
            Self::EmptyColumn(_) | Self::ZeroVariance(_) => true,
            Self::WithContext { source, .. } => source.is_computation_error(),
            _ => false,
        }
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleaningError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CleaningError::Polars(e).with_context(context))
    }
}
