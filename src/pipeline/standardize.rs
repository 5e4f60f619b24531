//! Feature standardization.

use polars::prelude::*;
use tracing::debug;

use crate::error::{CleaningError, Result};
use crate::stats::column_stats;
use crate::utils::column_f64;

/// Rescales monitored columns to zero mean and unit variance.
pub struct Standardizer;

impl Standardizer {
    /// Replace each value of the monitored columns with `(x - μ) / σ`,
    /// where μ and σ (population) are computed over this table.
    ///
    /// The output has the same rows in the same order; only the monitored
    /// columns change. The input is consumed, so no view of the
    /// pre-standardization table aliases the result.
    ///
    /// # Errors
    ///
    /// Returns [`CleaningError::ZeroVariance`] if a monitored column has
    /// zero standard deviation; the rescaling is undefined there.
    pub fn standardize(
        mut df: DataFrame,
        monitored_columns: &[String],
        processing_steps: &mut Vec<String>,
    ) -> Result<DataFrame> {
        for name in monitored_columns {
            let stats = column_stats(&df, name)?;
            if stats.std_dev == 0.0 {
                return Err(CleaningError::ZeroVariance(name.clone()));
            }

            let ca = column_f64(&df, name)?;
            let standardized = ca.apply(|v| v.map(|x| (x - stats.mean) / stats.std_dev));
            df.replace(name, standardized.into_series())?;

            processing_steps.push(format!(
                "Standardized '{}' (mean {:.2}, std {:.2})",
                name, stats.mean, stats.std_dev
            ));
            debug!("Standardized '{}'", name);
        }

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ColumnStats;

    const TOLERANCE: f64 = 1e-9;

    fn monitored(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn stats_of(df: &DataFrame, name: &str) -> ColumnStats {
        column_stats(df, name).unwrap()
    }

    #[test]
    fn test_standardize_zero_mean_unit_std() {
        let df = df!["v" => [2.0f64, 4.0, 6.0, 8.0, 10.0]].unwrap();
        let mut steps = Vec::new();

        let out = Standardizer::standardize(df, &monitored(&["v"]), &mut steps).unwrap();

        let stats = stats_of(&out, "v");
        assert!(stats.mean.abs() < TOLERANCE);
        assert!((stats.std_dev - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_standardize_only_touches_monitored_columns() {
        let df = df![
            "id" => [1i32, 2, 3],
            "v" => [1.0f64, 2.0, 3.0],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let out = Standardizer::standardize(df, &monitored(&["v"]), &mut steps).unwrap();

        assert_eq!(out.height(), 3);
        let ids = out.column("id").unwrap();
        assert!(matches!(ids.dtype(), DataType::Int32));
        assert_eq!(ids.get(1).unwrap().try_extract::<i32>().unwrap(), 2);
    }

    #[test]
    fn test_standardize_zero_variance_errors() {
        let df = df!["v" => [5.0f64, 5.0, 5.0]].unwrap();
        let mut steps = Vec::new();

        let err =
            Standardizer::standardize(df, &monitored(&["v"]), &mut steps).unwrap_err();
        assert!(matches!(err, CleaningError::ZeroVariance(_)));
    }

    #[test]
    fn test_standardize_is_a_fixed_point() {
        let df = df!["v" => [10.0f64, 20.0, 30.0, 40.0]].unwrap();
        let mut steps = Vec::new();

        let once = Standardizer::standardize(df, &monitored(&["v"]), &mut steps).unwrap();
        let twice =
            Standardizer::standardize(once.clone(), &monitored(&["v"]), &mut steps).unwrap();

        let a = once.column("v").unwrap().f64().unwrap();
        let b = twice.column("v").unwrap().f64().unwrap();
        for (x, y) in a.into_no_null_iter().zip(b.into_no_null_iter()) {
            assert!((x - y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_standardize_known_values() {
        // [1, 2, 3]: mean 2, population std sqrt(2/3)
        let df = df!["v" => [1.0f64, 2.0, 3.0]].unwrap();
        let mut steps = Vec::new();

        let out = Standardizer::standardize(df, &monitored(&["v"]), &mut steps).unwrap();

        let v = out.column("v").unwrap().f64().unwrap();
        let expected = 1.0 / (2.0f64 / 3.0).sqrt();
        assert!((v.get(0).unwrap() + expected).abs() < TOLERANCE);
        assert!(v.get(1).unwrap().abs() < TOLERANCE);
        assert!((v.get(2).unwrap() - expected).abs() < TOLERANCE);
    }
}
