//! Result types produced by the cleaning pipeline.

use polars::prelude::*;
use serde::Serialize;

/// Serializable summary of what the pipeline did.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningSummary {
    /// Row count of the input table.
    pub rows_before: usize,
    /// Row count of the cleaned output table.
    pub rows_after: usize,
    /// Missing cells filled during imputation.
    pub cells_imputed: usize,
    /// Exact-duplicate rows removed.
    pub duplicates_removed: usize,
    /// Rows dropped by the z-score filter.
    pub outliers_removed: usize,
    /// Human-readable log of the applied steps, in order.
    pub processing_steps: Vec<String>,
}

/// Output of a pipeline run: the cleaned table plus its summary.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// The cleaned and standardized table.
    pub data: DataFrame,
    /// Summary of the applied transformations.
    pub summary: CleaningSummary,
}
