//! Z-score outlier filtering.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::stats::{ColumnStats, column_stats};
use crate::utils::column_f64;

/// Drops rows whose standard score exceeds a threshold in any monitored
/// column.
pub struct OutlierFilter;

impl OutlierFilter {
    /// Filter rows by absolute standard score.
    ///
    /// Mean and standard deviation are computed per monitored column over
    /// the full input table, before any row is dropped. A row is retained
    /// only when its score is strictly below `threshold` in every
    /// monitored column; failing a single column drops the row. Order of
    /// retained rows is preserved.
    ///
    /// A constant column (zero standard deviation) scores every value 0
    /// and so never excludes a row.
    pub fn filter(
        df: DataFrame,
        monitored_columns: &[String],
        threshold: f64,
        processing_steps: &mut Vec<String>,
    ) -> Result<(DataFrame, usize)> {
        let before = df.height();

        // All column statistics come from the unfiltered input.
        let stats: Vec<(String, ColumnStats)> = monitored_columns
            .iter()
            .map(|name| Ok((name.clone(), column_stats(&df, name)?)))
            .collect::<Result<_>>()?;

        let mut keep = vec![true; df.height()];
        for (name, col_stats) in &stats {
            let ca = column_f64(&df, name)?;
            for (i, value) in ca.into_iter().enumerate() {
                if let Some(value) = value
                    && col_stats.abs_zscore(value) >= threshold
                {
                    keep[i] = false;
                }
            }
        }

        let mask = BooleanChunked::from_slice("mask".into(), &keep);
        let df = df.filter(&mask)?;

        let outliers_removed = before - df.height();
        if outliers_removed > 0 {
            processing_steps.push(format!(
                "Removed {} rows with |z| >= {} in a monitored column",
                outliers_removed, threshold
            ));
            debug!("Removed {} outlier rows", outliers_removed);
        } else {
            debug!("No outlier rows found");
        }

        Ok((df, outliers_removed))
    }
}
