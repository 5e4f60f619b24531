//! Pipeline module.
//!
//! This module provides the main cleaning pipeline and its stage
//! implementations.

pub mod outliers;
pub mod standardize;

pub use outliers::OutlierFilter;
pub use standardize::Standardizer;

use polars::prelude::*;
use tracing::{error, info};

use crate::cleaner::DataCleaner;
use crate::config::PipelineConfig;
use crate::error::{CleaningError, Result, ResultExt};
use crate::imputers::MeanImputer;
use crate::types::{CleaningSummary, PipelineResult};

/// The main cleaning pipeline.
///
/// Runs four ordered stages over one table: mean imputation, duplicate
/// removal, z-score outlier filtering, and standardization. Each stage
/// consumes the table produced by the previous one; the first error aborts
/// the run with no partial output.
///
/// # Example
///
/// ```rust,ignore
/// use vitals_processing::{Pipeline, PipelineConfig, dataset};
///
/// let pipeline = Pipeline::new(PipelineConfig::default())?;
/// let result = pipeline.process(dataset::patient_vitals()?)?;
/// println!("{}", result.data);
/// ```
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

// Ensure Pipeline can be moved to another thread.
static_assertions::assert_impl_all!(Pipeline: Send);

impl Pipeline {
    /// Create a pipeline from a validated configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| CleaningError::InvalidConfig(e.to_string()))?;
        Ok(Self { config })
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process a table through the four cleaning stages.
    pub fn process(&self, df: DataFrame) -> Result<PipelineResult> {
        match self.process_internal(df) {
            Ok(result) => {
                info!(
                    "Pipeline completed: {} rows in, {} rows out",
                    result.summary.rows_before, result.summary.rows_after
                );
                Ok(result)
            }
            Err(e) => {
                error!("Pipeline error: {}", e);
                Err(e)
            }
        }
    }

    fn process_internal(&self, mut df: DataFrame) -> Result<PipelineResult> {
        let rows_before = df.height();
        let mut processing_steps: Vec<String> = Vec::new();

        info!("Stage 1: imputing missing values...");
        let cells_imputed = MeanImputer::apply(&mut df, &mut processing_steps)
            .context("While imputing missing values")?;

        info!("Stage 2: removing duplicate rows...");
        let (df, duplicates_removed) = DataCleaner::remove_duplicates(df, &mut processing_steps)
            .context("While removing duplicates")?;

        info!("Stage 3: filtering outliers...");
        let (df, outliers_removed) = OutlierFilter::filter(
            df,
            &self.config.monitored_columns,
            self.config.zscore_threshold,
            &mut processing_steps,
        )
        .context("While filtering outliers")?;

        info!("Stage 4: standardizing monitored columns...");
        let df = Standardizer::standardize(
            df,
            &self.config.monitored_columns,
            &mut processing_steps,
        )
        .context("While standardizing")?;

        let summary = CleaningSummary {
            rows_before,
            rows_after: df.height(),
            cells_imputed,
            duplicates_removed,
            outliers_removed,
            processing_steps,
        };

        Ok(PipelineResult { data: df, summary })
    }
}
