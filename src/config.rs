//! Configuration types for the cleaning pipeline.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic pipeline setup.

use serde::{Deserialize, Serialize};

use crate::dataset::MONITORED_COLUMNS;

/// Default magnitude threshold for z-score outlier filtering.
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;

/// Configuration for the cleaning pipeline.
///
/// Use [`PipelineConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use vitals_processing::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .zscore_threshold(2.5)
///     .monitored_columns(["BloodPressure", "SugarLevel"])
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Columns monitored for outlier filtering and standardization.
    /// Default: `BloodPressure`, `SugarLevel`, `Weight`
    pub monitored_columns: Vec<String>,

    /// Rows are retained only when the absolute standard score of every
    /// monitored column is strictly below this threshold.
    /// Default: 3.0
    pub zscore_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            monitored_columns: MONITORED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            zscore_threshold: DEFAULT_ZSCORE_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.monitored_columns.is_empty() {
            return Err(ConfigValidationError::NoMonitoredColumns);
        }

        if !self.zscore_threshold.is_finite() || self.zscore_threshold <= 0.0 {
            return Err(ConfigValidationError::InvalidThreshold(
                self.zscore_threshold,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid z-score threshold: {0} (must be finite and positive)")]
    InvalidThreshold(f64),

    #[error("At least one monitored column is required")]
    NoMonitoredColumns,
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    monitored_columns: Option<Vec<String>>,
    zscore_threshold: Option<f64>,
}

impl PipelineConfigBuilder {
    /// Set the columns monitored for outlier filtering and standardization.
    pub fn monitored_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.monitored_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the z-score magnitude threshold for outlier filtering.
    ///
    /// # Arguments
    /// * `threshold` - Positive finite value (e.g., 3.0)
    pub fn zscore_threshold(mut self, threshold: f64) -> Self {
        self.zscore_threshold = Some(threshold);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let defaults = PipelineConfig::default();
        let config = PipelineConfig {
            monitored_columns: self
                .monitored_columns
                .unwrap_or(defaults.monitored_columns),
            zscore_threshold: self.zscore_threshold.unwrap_or(defaults.zscore_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}
