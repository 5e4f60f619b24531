//! Mean imputation for numeric columns.

use polars::prelude::*;
use tracing::debug;

use crate::error::{CleaningError, Result};
use crate::utils::{column_f64, numeric_column_names};

/// Fills missing numeric values with the column mean.
pub struct MeanImputer;

impl MeanImputer {
    /// Apply mean imputation to every numeric column with missing values.
    ///
    /// Columns without missing values are left untouched, including their
    /// dtype; a filled column becomes `Float64`. Returns the number of
    /// cells filled.
    ///
    /// # Errors
    ///
    /// Returns [`CleaningError::EmptyColumn`] if a column with missing
    /// values has no non-missing value to compute a mean from.
    pub fn apply(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<usize> {
        let mut cells_filled = 0;

        for col_name in numeric_column_names(df) {
            let null_count = df.column(&col_name)?.null_count();
            if null_count == 0 {
                continue;
            }

            let ca = column_f64(df, &col_name)?;
            let mean = ca
                .mean()
                .ok_or_else(|| CleaningError::EmptyColumn(col_name.clone()))?;

            Self::fill_with_value(df, &col_name, mean, &ca)?;
            cells_filled += null_count;

            processing_steps.push(format!(
                "Filled '{}' with mean: {:.2} ({} values)",
                col_name, mean, null_count
            ));
            debug!("Mean imputed '{}': {} values", col_name, null_count);
        }

        Ok(cells_filled)
    }

    /// Fill the nulls of a numeric column with a specific value.
    fn fill_with_value(
        df: &mut DataFrame,
        col_name: &str,
        fill_value: f64,
        ca: &Float64Chunked,
    ) -> Result<()> {
        let result_vec: Vec<f64> = ca
            .into_iter()
            .map(|v| v.unwrap_or(fill_value))
            .collect();

        let result = Series::new(col_name.into(), result_vec);
        df.replace(col_name, result)?;

        Ok(())
    }
}
