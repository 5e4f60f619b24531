//! Patient Vitals Cleaning Pipeline Library
//!
//! A small data-cleaning library built on Polars. It runs four ordered
//! stages over one in-memory table of patient vitals:
//!
//! 1. **Imputation**: missing numeric values are replaced with the column mean
//! 2. **Deduplication**: exact-duplicate rows are removed, first occurrence kept
//! 3. **Outlier filtering**: rows with an absolute z-score of 3.0 or more in
//!    any monitored vitals column are dropped
//! 4. **Standardization**: the monitored columns are rescaled to zero mean
//!    and unit variance
//!
//! Both statistical stages use the population standard deviation (ddof = 0).
//! Any computation error (a mean over an all-missing column, or a zero
//! standard deviation during standardization) aborts the run; there is no
//! partial output.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitals_processing::{Pipeline, PipelineConfig, dataset};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let result = pipeline.process(dataset::patient_vitals()?)?;
//!
//! println!("\nCleaned Healthcare Data:\n{}", result.data);
//! for step in &result.summary.processing_steps {
//!     println!("- {step}");
//! }
//! ```
//!
//! # Configuration
//!
//! Use [`PipelineConfig`] to change the monitored columns or the z-score
//! threshold:
//!
//! ```rust,ignore
//! let config = PipelineConfig::builder()
//!     .monitored_columns(["BloodPressure", "Weight"])
//!     .zscore_threshold(2.5)
//!     .build()?;
//! ```

pub mod cleaner;
pub mod config;
pub mod dataset;
pub mod error;
pub mod imputers;
pub mod pipeline;
pub mod stats;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::DataCleaner;
pub use config::{ConfigValidationError, PipelineConfig, PipelineConfigBuilder};
pub use error::{CleaningError, Result as CleaningResult, ResultExt};
pub use imputers::MeanImputer;
pub use pipeline::{OutlierFilter, Pipeline, Standardizer};
pub use stats::{ColumnStats, column_stats};
pub use types::{CleaningSummary, PipelineResult};
