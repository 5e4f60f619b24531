//! Column statistics for outlier scoring and standardization.
//!
//! Both the outlier filter and the standardizer use the population standard
//! deviation (ddof = 0). This matches the conventions of `scipy.stats.zscore`
//! and scikit-learn's `StandardScaler`, and is deliberately the same in both
//! stages so the threshold boundary and the rescaled values agree.

use polars::prelude::*;
use serde::Serialize;

use crate::error::{CleaningError, Result};
use crate::utils::column_f64;

/// Mean and population standard deviation of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ColumnStats {
    /// Absolute standard score of `value` against these statistics.
    ///
    /// A zero standard deviation makes the score 0 rather than NaN, so
    /// constant columns never exclude rows.
    pub fn abs_zscore(&self, value: f64) -> f64 {
        if self.std_dev == 0.0 {
            0.0
        } else {
            ((value - self.mean) / self.std_dev).abs()
        }
    }
}

/// Compute mean and population standard deviation over the non-missing
/// values of a column.
///
/// # Errors
///
/// Returns [`CleaningError::EmptyColumn`] if the column has no non-missing
/// values, and [`CleaningError::ColumnNotFound`] if the column is absent.
pub fn column_stats(df: &DataFrame, name: &str) -> Result<ColumnStats> {
    let ca = column_f64(df, name)?;

    let mean = ca
        .mean()
        .ok_or_else(|| CleaningError::EmptyColumn(name.to_string()))?;
    let std_dev = ca
        .std(0)
        .ok_or_else(|| CleaningError::EmptyColumn(name.to_string()))?;

    Ok(ColumnStats { mean, std_dev })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_stats_population_std() {
        let df = df!["v" => [2.0f64, 4.0, 6.0, 8.0]].unwrap();
        let stats = column_stats(&df, "v").unwrap();
        assert_eq!(stats.mean, 5.0);
        // Population std of [2, 4, 6, 8] = sqrt(5), not sqrt(20/3)
        assert!((stats.std_dev - 5.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_column_stats_ignores_nulls() {
        let df = df!["v" => [Some(1.0f64), None, Some(5.0)]].unwrap();
        let stats = column_stats(&df, "v").unwrap();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn test_column_stats_empty_column() {
        let df = df!["v" => [Option::<f64>::None, None]].unwrap();
        let err = column_stats(&df, "v").unwrap_err();
        assert!(matches!(err, CleaningError::EmptyColumn(_)));
    }

    #[test]
    fn test_abs_zscore() {
        let stats = ColumnStats {
            mean: 10.0,
            std_dev: 2.0,
        };
        assert_eq!(stats.abs_zscore(14.0), 2.0);
        assert_eq!(stats.abs_zscore(6.0), 2.0);
    }

    #[test]
    fn test_abs_zscore_zero_std_is_zero() {
        let stats = ColumnStats {
            mean: 5.0,
            std_dev: 0.0,
        };
        assert_eq!(stats.abs_zscore(5.0), 0.0);
        assert_eq!(stats.abs_zscore(100.0), 0.0);
    }
}
